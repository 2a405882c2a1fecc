//! Scheduling policies and the simulation entry point.
//!
//! The four classic single-core policies are a closed set, represented
//! as one enum variant each so that dispatch is an exhaustive match —
//! adding or removing a policy is a compile-time-checked change.
//!
//! # Usage
//!
//! ```
//! use u_cpusim::models::Task;
//! use u_cpusim::policy::Policy;
//!
//! let tasks = vec![Task::new("A", 0, 4), Task::new("B", 1, 2)];
//! let run = Policy::Fcfs.run(&tasks).unwrap();
//! assert_eq!(run.timeline.makespan(), 6);
//! ```
//!
//! # Ownership Contract
//!
//! `Policy::run` clones the caller's tasks and resets their run-time
//! fields before simulating. The caller's collection is never mutated,
//! so independent runs over the same tasks (e.g., comparing policies
//! side by side) are safe without locking.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

use serde::{Deserialize, Serialize};

use crate::models::{GanttEntry, Task, Time, Timeline};
use crate::validation::{validate_quantum, validate_tasks, SimulationError, SimulationErrorKind};

/// A scheduling policy, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served: fixed `(arrival, id)` order.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    SjfNonPreemptive,
    /// Priority, non-preemptive. Lower priority value wins.
    PriorityNonPreemptive,
    /// Round robin with a fixed positive time quantum.
    RoundRobin {
        /// Maximum slice length per execution turn (ticks, > 0).
        quantum: Time,
    },
}

/// The output of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Execution slices in chronological order.
    pub timeline: Timeline,
    /// The input tasks with `completion_time` populated, in completion
    /// order. `waiting_time`/`turnaround_time` are still unset; pass the
    /// collection to [`crate::metrics::annotate`].
    pub completed: Vec<Task>,
}

impl Policy {
    /// Resolves an external policy name onto the closed policy set.
    ///
    /// Accepted names (case-insensitive): `fcfs`, `sjf`, `priority`,
    /// `rr` / `round_robin` / `round-robin`. Round robin requires a
    /// quantum; the other policies ignore it.
    ///
    /// # Errors
    /// [`SimulationErrorKind::UnsupportedPolicy`] for unknown names,
    /// [`SimulationErrorKind::InvalidTask`] for round robin without a
    /// quantum.
    pub fn from_name(name: &str, quantum: Option<Time>) -> Result<Self, SimulationError> {
        match name.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::SjfNonPreemptive),
            "priority" => Ok(Self::PriorityNonPreemptive),
            "rr" | "round_robin" | "round-robin" => match quantum {
                Some(quantum) => Ok(Self::RoundRobin { quantum }),
                None => Err(SimulationError::new(
                    SimulationErrorKind::InvalidTask,
                    "Round robin requires a quantum",
                )),
            },
            other => Err(SimulationError::new(
                SimulationErrorKind::UnsupportedPolicy,
                format!("Unknown scheduling policy: {other}"),
            )),
        }
    }

    /// Canonical policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::SjfNonPreemptive => "SJF",
            Self::PriorityNonPreemptive => "Priority",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Runs the policy over the given tasks.
    ///
    /// Validates the input, simulates on a private copy, and returns the
    /// execution timeline together with the completed tasks. An empty
    /// task collection is a valid input producing an empty run.
    ///
    /// # Errors
    /// All validation failures are collected and returned together; no
    /// partial timeline is ever produced.
    pub fn run(&self, tasks: &[Task]) -> Result<SimulationRun, Vec<SimulationError>> {
        validate_tasks(tasks)?;
        if let Self::RoundRobin { quantum } = self {
            validate_quantum(*quantum)?;
        }

        // Copy-on-entry: the simulation owns a fresh copy with run-time
        // fields reset, so re-running on the same input is idempotent.
        let mut copy = tasks.to_vec();
        for task in &mut copy {
            task.reset();
        }

        Ok(match self {
            Self::Fcfs => fcfs::simulate(copy),
            Self::SjfNonPreemptive => sjf::simulate(copy),
            Self::PriorityNonPreemptive => priority::simulate(copy),
            Self::RoundRobin { quantum } => round_robin::simulate(copy, *quantum),
        })
    }
}

/// Sorts tasks by `(arrival, id)` — the admission order shared by every
/// policy.
pub(crate) fn sort_by_arrival(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        (a.arrival, a.id.as_str()).cmp(&(b.arrival, b.id.as_str()))
    });
}

/// Shared skeleton for the non-preemptive selecting policies (SJF,
/// Priority).
///
/// Admits every task whose arrival is at or before the clock into a
/// ready set, then repeatedly runs the ready task with the minimum
/// `(select_key, id)` to completion. When the ready set is empty the
/// clock jumps forward to the next unadmitted arrival; admission always
/// resumes from the current position, so the clock never moves backward.
pub(crate) fn run_non_preemptive<K, F>(mut tasks: Vec<Task>, select_key: F) -> SimulationRun
where
    K: Ord,
    F: Fn(&Task) -> K,
{
    sort_by_arrival(&mut tasks);

    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(tasks.len());
    let mut ready: Vec<Task> = Vec::new();
    let mut pending = tasks.into_iter().peekable();
    let mut clock: Time = 0;

    loop {
        while pending.peek().is_some_and(|t| t.arrival <= clock) {
            if let Some(task) = pending.next() {
                ready.push(task);
            }
        }

        if ready.is_empty() {
            match pending.peek() {
                // Idle gap: jump to the next arrival and re-admit.
                Some(task) => {
                    clock = task.arrival;
                    continue;
                }
                None => break,
            }
        }

        let selected = (0..ready.len()).min_by(|&a, &b| {
            select_key(&ready[a])
                .cmp(&select_key(&ready[b]))
                .then_with(|| ready[a].id.cmp(&ready[b].id))
        });

        if let Some(index) = selected {
            let mut task = ready.remove(index);
            let start = clock;
            // Runs to completion: later arrivals are not reconsidered
            // until this task finishes, even if they would win selection.
            clock += task.burst;
            task.remaining = 0;
            task.completion_time = clock;
            timeline.push(GanttEntry::new(task.id.clone(), start, clock));
            completed.push(task);
        }
    }

    SimulationRun {
        timeline,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("A", 0, 4).with_priority(2),
            Task::new("B", 1, 2).with_priority(1),
            Task::new("C", 2, 3).with_priority(3),
        ]
    }

    fn assert_run_invariants(run: &SimulationRun, tasks: &[Task]) {
        // Entries sorted by start, non-overlapping.
        for pair in run.timeline.entries.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert!(pair[0].end <= pair[1].start);
        }
        for task in tasks {
            // Slice durations sum to the burst.
            assert_eq!(run.timeline.executed_time_of(&task.id), task.burst);
            // Completion no earlier than arrival + burst.
            let done = run
                .timeline
                .completion_time_of(&task.id)
                .unwrap_or_else(|| panic!("task {} never executed", task.id));
            assert!(done >= task.arrival + task.burst);
        }
    }

    fn all_policies() -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::SjfNonPreemptive,
            Policy::PriorityNonPreemptive,
            Policy::RoundRobin { quantum: 2 },
        ]
    }

    #[test]
    fn test_run_invariants_all_policies() {
        let tasks = sample_tasks();
        for policy in all_policies() {
            let run = policy.run(&tasks).unwrap();
            assert_run_invariants(&run, &tasks);
        }
    }

    #[test]
    fn test_empty_input_all_policies() {
        for policy in all_policies() {
            let run = policy.run(&[]).unwrap();
            assert!(run.timeline.is_empty());
            assert!(run.completed.is_empty());
            let m = metrics::SimulationMetrics::calculate(&run.completed);
            assert_eq!(m.avg_waiting_time, 0.0);
            assert_eq!(m.avg_turnaround_time, 0.0);
            assert_eq!(m.cpu_utilization, 0.0);
        }
    }

    #[test]
    fn test_caller_tasks_never_mutated() {
        let tasks = sample_tasks();
        let before = tasks.clone();
        for policy in all_policies() {
            policy.run(&tasks).unwrap();
        }
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_idempotence_all_policies() {
        let tasks = sample_tasks();
        for policy in all_policies() {
            let first = policy.run(&tasks).unwrap();
            let second = policy.run(&tasks).unwrap();
            assert_eq!(first, second, "{} not idempotent", policy.name());
        }
    }

    #[test]
    fn test_rerun_on_previous_output() {
        // Running a policy on its own completed output must match the
        // original run: run-time fields are reset on entry.
        let tasks = sample_tasks();
        let policy = Policy::RoundRobin { quantum: 2 };
        let first = policy.run(&tasks).unwrap();
        let second = policy.run(&first.completed).unwrap();
        assert_eq!(first.timeline, second.timeline);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Policy::from_name("fcfs", None).unwrap(), Policy::Fcfs);
        assert_eq!(
            Policy::from_name("SJF", None).unwrap(),
            Policy::SjfNonPreemptive
        );
        assert_eq!(
            Policy::from_name("priority", Some(9)).unwrap(),
            Policy::PriorityNonPreemptive
        );
        assert_eq!(
            Policy::from_name("round-robin", Some(3)).unwrap(),
            Policy::RoundRobin { quantum: 3 }
        );
    }

    #[test]
    fn test_from_name_unsupported() {
        let err = Policy::from_name("mlfq", None).unwrap_err();
        assert_eq!(err.kind, SimulationErrorKind::UnsupportedPolicy);
    }

    #[test]
    fn test_from_name_rr_requires_quantum() {
        let err = Policy::from_name("rr", None).unwrap_err();
        assert_eq!(err.kind, SimulationErrorKind::InvalidTask);
    }

    #[test]
    fn test_invalid_input_rejected_before_simulation() {
        let tasks = vec![Task::new("A", 0, 0)];
        for policy in all_policies() {
            assert!(policy.run(&tasks).is_err());
        }
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let tasks = sample_tasks();
        let errors = Policy::RoundRobin { quantum: 0 }.run(&tasks).unwrap_err();
        assert_eq!(errors[0].kind, SimulationErrorKind::InvalidTask);
    }

    #[test]
    fn test_random_task_sets_hold_invariants() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..50 {
            let count: usize = rng.random_range(1..12);
            let tasks: Vec<Task> = (0..count)
                .map(|i| {
                    Task::new(
                        format!("T{i:02}"),
                        rng.random_range(0..20),
                        rng.random_range(1..10),
                    )
                    .with_priority(rng.random_range(0..5))
                })
                .collect();
            let quantum = rng.random_range(1..6);

            for policy in [
                Policy::Fcfs,
                Policy::SjfNonPreemptive,
                Policy::PriorityNonPreemptive,
                Policy::RoundRobin { quantum },
            ] {
                let run = policy.run(&tasks).unwrap();
                assert_run_invariants(&run, &tasks);
                assert_eq!(run.completed.len(), tasks.len());
                // Determinism on the same input.
                assert_eq!(run, policy.run(&tasks).unwrap());
            }
        }
    }
}
