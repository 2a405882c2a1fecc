//! Round-robin scheduling.
//!
//! A FIFO ready queue with a fixed time quantum. The head of the queue
//! executes for at most one quantum, then (if unfinished) returns to the
//! tail. Tasks that arrive during a slice enter the queue *before* the
//! sliced task re-queues — a task arriving exactly when a slice ends is
//! served ahead of the task that just ran. This admission order is
//! load-bearing for fairness.
//!
//! Completion times are derived from the recorded timeline (the end of
//! each task's last slice), never from an independently tracked
//! variable; the interval log is the single source of truth.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;
use std::iter::Peekable;
use std::vec::IntoIter;

use crate::models::{GanttEntry, Task, Time, Timeline};

use super::{sort_by_arrival, SimulationRun};

/// Moves every pending task with `arrival <= clock` to the queue tail,
/// in `(arrival, id)` order.
fn admit_arrivals(
    pending: &mut Peekable<IntoIter<Task>>,
    queue: &mut VecDeque<Task>,
    clock: Time,
) {
    while pending.peek().is_some_and(|t| t.arrival <= clock) {
        if let Some(task) = pending.next() {
            queue.push_back(task);
        }
    }
}

pub(crate) fn simulate(mut tasks: Vec<Task>, quantum: Time) -> SimulationRun {
    sort_by_arrival(&mut tasks);

    let mut timeline = Timeline::new();
    let mut finished = Vec::with_capacity(tasks.len());
    let mut queue: VecDeque<Task> = VecDeque::new();
    let mut pending = tasks.into_iter().peekable();
    let mut clock: Time = 0;

    loop {
        admit_arrivals(&mut pending, &mut queue, clock);

        let Some(mut task) = queue.pop_front() else {
            match pending.peek() {
                // Idle gap: jump to the next arrival and re-admit.
                Some(next) => {
                    clock = next.arrival;
                    continue;
                }
                None => break,
            }
        };

        let slice = task.remaining.min(quantum);
        let start = clock;
        clock += slice;
        task.remaining -= slice;
        timeline.push(GanttEntry::new(task.id.clone(), start, clock));

        // Tasks that arrived during the slice queue ahead of the task
        // that just ran.
        admit_arrivals(&mut pending, &mut queue, clock);

        if task.is_finished() {
            finished.push(task);
        } else {
            queue.push_back(task);
        }
    }

    // Completion from the interval log, not the loop's bookkeeping.
    for task in &mut finished {
        task.completion_time = timeline.completion_time_of(&task.id).unwrap_or(0);
    }

    SimulationRun {
        timeline,
        completed: finished,
    }
}
