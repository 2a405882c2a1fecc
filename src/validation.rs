//! Input validation for simulation runs.
//!
//! Checks structural integrity of a task collection before any policy
//! executes. Detects:
//! - Non-positive bursts and negative arrivals
//! - Duplicate task IDs
//! - Non-positive round-robin quanta
//!
//! Validation is all-or-nothing: the engine either accepts the input and
//! runs to completion deterministically, or rejects it before recording
//! a single interval. There are no partial results and nothing to retry.

use std::collections::HashSet;

use crate::models::{Task, Time};

/// Result of validating simulation input.
pub type ValidationResult = Result<(), Vec<SimulationError>>;

/// An error detected before or while configuring a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationError {
    /// Error category.
    pub kind: SimulationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of simulation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationErrorKind {
    /// A task has a non-positive burst or negative arrival, or the
    /// round-robin quantum is not positive.
    InvalidTask,
    /// Two tasks share the same ID, making tie-breaks ambiguous.
    DuplicateIdentifier,
    /// The requested policy name is not one of the four supported.
    UnsupportedPolicy,
}

impl SimulationError {
    pub(crate) fn new(kind: SimulationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SimulationError {}

/// Validates a task collection for simulation.
///
/// Checks:
/// 1. Every burst is positive
/// 2. Every arrival is non-negative
/// 3. No two tasks share an ID
///
/// An empty collection is valid — the engine returns an empty run for it.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for task in tasks {
        if task.burst <= 0 {
            errors.push(SimulationError::new(
                SimulationErrorKind::InvalidTask,
                format!("Task '{}' has non-positive burst {}", task.id, task.burst),
            ));
        }
        if task.arrival < 0 {
            errors.push(SimulationError::new(
                SimulationErrorKind::InvalidTask,
                format!("Task '{}' has negative arrival {}", task.id, task.arrival),
            ));
        }
        if !seen_ids.insert(task.id.as_str()) {
            errors.push(SimulationError::new(
                SimulationErrorKind::DuplicateIdentifier,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin quantum.
pub fn validate_quantum(quantum: Time) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![SimulationError::new(
            SimulationErrorKind::InvalidTask,
            format!("Round-robin quantum must be positive, got {quantum}"),
        )])
    }
}
