//! Shortest-job-first scheduling, non-preemptive.
//!
//! Among the arrived-but-unfinished tasks, the one with the smallest
//! burst runs next, ties broken by ID. Once a task starts it runs to
//! completion — a shorter task arriving mid-execution waits.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::Task;

use super::{run_non_preemptive, SimulationRun};

pub(crate) fn simulate(tasks: Vec<Task>) -> SimulationRun {
    run_non_preemptive(tasks, |task| task.burst)
}
