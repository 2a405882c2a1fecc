//! Named task-set (scenario) definitions.
//!
//! Scenarios are external configuration: a JSON document mapping a
//! scenario name to a list of task definitions, e.g.
//!
//! ```json
//! {
//!   "Normal Monitoring": [
//!     { "pid": "ECG-01", "arrival": 0, "burst": 4, "priority": 3 },
//!     { "pid": "BP-03", "arrival": 2, "burst": 3, "priority": 3 }
//!   ]
//! }
//! ```
//!
//! [`TaskSpec`] mirrors that wire shape; parsing is the caller's job
//! (e.g. with `serde_json`). Conversion into a [`Scenario`] validates
//! the task set, so anything reaching the engine is already well-formed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Task, Time};
use crate::validation::{validate_tasks, SimulationError};

/// One task definition as it appears in scenario configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Task identifier.
    pub pid: String,
    /// Arrival time (ticks).
    pub arrival: Time,
    /// Total execution time required (ticks).
    pub burst: Time,
    /// Scheduling priority (lower = higher precedence).
    #[serde(default)]
    pub priority: Option<i64>,
}

impl TaskSpec {
    /// Builds the domain task for this definition.
    pub fn to_task(&self) -> Task {
        let task = Task::new(self.pid.clone(), self.arrival, self.burst);
        match self.priority {
            Some(priority) => task.with_priority(priority),
            None => task,
        }
    }
}

/// A scenario definition file: scenario name → task definitions.
///
/// `BTreeMap` keeps scenario iteration order stable for consumers that
/// list scenarios.
pub type ScenarioSet = BTreeMap<String, Vec<TaskSpec>>;

/// A named, validated task set ready for simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name.
    pub name: String,
    /// The tasks of this scenario.
    pub tasks: Vec<Task>,
}

impl Scenario {
    /// Builds a validated scenario from parsed task definitions.
    ///
    /// # Errors
    /// All validation failures in the task set, collected together.
    pub fn from_specs(
        name: impl Into<String>,
        specs: &[TaskSpec],
    ) -> Result<Self, Vec<SimulationError>> {
        let tasks: Vec<Task> = specs.iter().map(TaskSpec::to_task).collect();
        validate_tasks(&tasks)?;
        Ok(Self {
            name: name.into(),
            tasks,
        })
    }
}

/// Converts a parsed scenario set into validated scenarios.
///
/// # Errors
/// The validation failures of the first invalid scenario, by name order.
pub fn build_scenarios(set: &ScenarioSet) -> Result<Vec<Scenario>, Vec<SimulationError>> {
    set.iter()
        .map(|(name, specs)| Scenario::from_specs(name.clone(), specs))
        .collect()
}
