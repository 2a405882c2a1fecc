//! Task (process) model.
//!
//! A task represents one schedulable unit of work: it arrives at a fixed
//! simulation time, requires a fixed amount of CPU time (its burst), and
//! optionally carries a scheduling priority.
//!
//! # Time Representation
//! All times are integer ticks relative to a simulation epoch (t=0).
//! The consumer defines what one tick means (e.g., a millisecond of
//! monitor processing time).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Type of time instants and durations, in simulation ticks.
pub type Time = i64;

/// A task to be scheduled on the simulated CPU.
///
/// The immutable inputs (`id`, `arrival`, `burst`, `priority`) are set at
/// construction. The run-time fields are populated during simulation:
/// `remaining` and `completion_time` by the scheduling policies,
/// `waiting_time` and `turnaround_time` by the metrics calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier. Lexicographic order is the final
    /// tie-break key in every policy.
    pub id: String,
    /// Time at which the task becomes eligible for scheduling (ticks, >= 0).
    pub arrival: Time,
    /// Total CPU time required (ticks, > 0).
    pub burst: Time,
    /// Scheduling priority. **Lower value = higher precedence.**
    /// `None` = lowest precedence under the priority policy.
    pub priority: Option<i64>,
    /// Unfinished work (ticks). Initialized to `burst`; decremented only
    /// by the round-robin policy.
    pub remaining: Time,
    /// Time at which the task finished all of its execution. Set by the
    /// scheduling policies; `0` until the task completes.
    pub completion_time: Time,
    /// Time spent ready but not executing. Set by [`crate::metrics::annotate`].
    pub waiting_time: Time,
    /// Completion time minus arrival. Set by [`crate::metrics::annotate`].
    pub turnaround_time: Time,
}

impl Task {
    /// Creates a new task with the given ID, arrival time, and burst.
    pub fn new(id: impl Into<String>, arrival: Time, burst: Time) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
            remaining: burst,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Sets the scheduling priority (lower = higher precedence).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for selection under the priority policy.
    ///
    /// Tasks without an explicit priority sort last.
    pub fn effective_priority(&self) -> i64 {
        self.priority.unwrap_or(i64::MAX)
    }

    /// Whether the task has executed all of its burst.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Resets the run-time fields to their pre-simulation state.
    ///
    /// Called on the engine's private copy at the start of every run so
    /// that re-running a policy on the same collection is idempotent.
    pub(crate) fn reset(&mut self) {
        self.remaining = self.burst;
        self.completion_time = 0;
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }
}
