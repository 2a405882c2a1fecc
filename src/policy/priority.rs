//! Priority scheduling, non-preemptive.
//!
//! Among the arrived-but-unfinished tasks, the one with the lowest
//! priority value runs next, ties broken by ID. Tasks without an
//! explicit priority sort last. Once a task starts it runs to
//! completion even if a higher-priority task arrives mid-execution —
//! the defining risk of the non-preemptive variant. There is no aging:
//! a low-priority task can starve under a stream of better-priority
//! arrivals.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use crate::models::Task;

use super::{run_non_preemptive, SimulationRun};

pub(crate) fn simulate(tasks: Vec<Task>) -> SimulationRun {
    run_non_preemptive(tasks, |task| task.effective_priority())
}
