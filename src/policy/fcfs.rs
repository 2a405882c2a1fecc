//! First-come-first-served scheduling.
//!
//! Tasks execute in fixed `(arrival, id)` order, each running to
//! completion. The order is decided once, up front — the ready set is
//! never re-evaluated, which is what distinguishes FCFS from the
//! selecting policies.

use crate::models::{GanttEntry, Task, Time, Timeline};

use super::{sort_by_arrival, SimulationRun};

pub(crate) fn simulate(mut tasks: Vec<Task>) -> SimulationRun {
    sort_by_arrival(&mut tasks);

    let mut timeline = Timeline::new();
    let mut clock: Time = 0;

    for task in &mut tasks {
        if clock < task.arrival {
            // Idle gap: the CPU waits for the next arrival.
            clock = task.arrival;
        }
        let start = clock;
        clock += task.burst;
        task.remaining = 0;
        task.completion_time = clock;
        timeline.push(GanttEntry::new(task.id.clone(), start, clock));
    }

    SimulationRun {
        timeline,
        completed: tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_basic_order() {
        let tasks = vec![Task::new("A", 0, 4), Task::new("B", 1, 2), Task::new("C", 2, 3)];
        let run = simulate(tasks);

        assert_eq!(
            run.timeline.entries,
            vec![
                GanttEntry::new("A", 0, 4),
                GanttEntry::new("B", 4, 6),
                GanttEntry::new("C", 6, 9),
            ]
        );
        assert_eq!(run.completed[0].completion_time, 4);
        assert_eq!(run.completed[1].completion_time, 6);
        assert_eq!(run.completed[2].completion_time, 9);
    }

    #[test]
    fn test_fcfs_completion_order_matches_arrival_order() {
        let tasks = vec![
            Task::new("C", 3, 1),
            Task::new("A", 0, 5),
            Task::new("B", 1, 1),
        ];
        let run = simulate(tasks);
        let order: Vec<&str> = run.completed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_fcfs_arrival_tie_broken_by_id() {
        let tasks = vec![Task::new("B", 0, 2), Task::new("A", 0, 2)];
        let run = simulate(tasks);
        assert_eq!(run.timeline.entries[0].task_id, "A");
        assert_eq!(run.timeline.entries[1].task_id, "B");
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let tasks = vec![Task::new("A", 0, 2), Task::new("B", 5, 1)];
        let run = simulate(tasks);

        assert_eq!(
            run.timeline.entries,
            vec![GanttEntry::new("A", 0, 2), GanttEntry::new("B", 5, 6)]
        );
        // Gap between 2 and 5 stays idle.
        assert_eq!(run.timeline.busy_time(), 3);
        assert_eq!(run.timeline.makespan(), 6);
    }

    #[test]
    fn test_fcfs_single_task_late_arrival() {
        let run = simulate(vec![Task::new("A", 7, 3)]);
        assert_eq!(run.timeline.entries, vec![GanttEntry::new("A", 7, 10)]);
        assert_eq!(run.completed[0].completion_time, 10);
    }
}
