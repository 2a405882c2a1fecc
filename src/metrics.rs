//! Simulation performance metrics.
//!
//! Computes the standard per-task and aggregate indicators from a
//! completed simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround Time | completion - arrival |
//! | Waiting Time | turnaround - burst |
//! | Makespan (C_max) | Latest completion time |
//! | CPU Utilization | sum(burst) / makespan |
//! | Avg Waiting / Turnaround | Arithmetic mean over all tasks |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Task, Time};

/// Aggregate performance indicators of one simulation run.
///
/// All averages are `0.0` for an empty task collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean time tasks spent ready but not executing (ticks).
    pub avg_waiting_time: f64,
    /// Mean time tasks spent in the system (ticks).
    pub avg_turnaround_time: f64,
    /// Fraction of the makespan the CPU spent executing (0.0..1.0);
    /// `0.0` when the makespan is zero.
    pub cpu_utilization: f64,
    /// Completion time of the last-finishing task (ticks).
    pub makespan: Time,
}

/// Populates `turnaround_time` and `waiting_time` on each completed task.
///
/// Requires `completion_time` to be set by a policy run. A negative
/// waiting time cannot occur for valid engine output; it would indicate
/// an engine bug, not bad input.
pub fn annotate(tasks: &mut [Task]) {
    for task in tasks {
        task.turnaround_time = task.completion_time - task.arrival;
        task.waiting_time = task.turnaround_time - task.burst;
    }
}

impl SimulationMetrics {
    /// Computes aggregate metrics from a completed task collection.
    ///
    /// Tasks do not need to be annotated first; waiting and turnaround
    /// times are derived from `completion_time` directly.
    pub fn calculate(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            return Self {
                avg_waiting_time: 0.0,
                avg_turnaround_time: 0.0,
                cpu_utilization: 0.0,
                makespan: 0,
            };
        }

        let count = tasks.len() as f64;
        let mut total_waiting: Time = 0;
        let mut total_turnaround: Time = 0;
        let mut total_burst: Time = 0;
        let mut makespan: Time = 0;

        for task in tasks {
            let turnaround = task.completion_time - task.arrival;
            total_turnaround += turnaround;
            total_waiting += turnaround - task.burst;
            total_burst += task.burst;
            makespan = makespan.max(task.completion_time);
        }

        let cpu_utilization = if makespan > 0 {
            total_burst as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            cpu_utilization,
            makespan,
        }
    }
}
