//! Execution timeline (solution) model.
//!
//! A timeline is the complete record of which task occupied the CPU
//! during which interval — the Gantt chart of one simulation run. It is
//! the single source of truth for when a task finished: completion times
//! are derived from the interval log, never tracked independently.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Time;

/// One contiguous slice of a single task's execution.
///
/// Under the non-preemptive policies exactly one entry exists per task;
/// under round robin a task contributes one entry per quantum slice
/// (the last possibly shorter than the quantum).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// ID of the executing task.
    pub task_id: String,
    /// Slice start time (ticks).
    pub start: Time,
    /// Slice end time (ticks). Always strictly greater than `start`.
    pub end: Time,
}

impl GanttEntry {
    /// Creates a new entry.
    pub fn new(task_id: impl Into<String>, start: Time, end: Time) -> Self {
        Self {
            task_id: task_id.into(),
            start,
            end,
        }
    }

    /// Slice duration (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// The execution timeline of one simulation run.
///
/// Entries are in non-decreasing start-time order and never overlap:
/// the simulated CPU runs one task at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution slices in chronological order.
    pub entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Entries must be pushed in chronological order.
    pub fn push(&mut self, entry: GanttEntry) {
        self.entries.push(entry);
    }

    /// Makespan: latest end time across all entries (ticks).
    pub fn makespan(&self) -> Time {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Returns all entries for a given task, in chronological order.
    pub fn entries_for_task(&self, task_id: &str) -> Vec<&GanttEntry> {
        self.entries
            .iter()
            .filter(|e| e.task_id == task_id)
            .collect()
    }

    /// Completion time of a task: the end of its last entry.
    ///
    /// `None` if the task never executed.
    pub fn completion_time_of(&self, task_id: &str) -> Option<Time> {
        self.entries
            .iter()
            .filter(|e| e.task_id == task_id)
            .map(|e| e.end)
            .max()
    }

    /// Total executed time for a given task across all of its slices.
    pub fn executed_time_of(&self, task_id: &str) -> Time {
        self.entries
            .iter()
            .filter(|e| e.task_id == task_id)
            .map(|e| e.duration())
            .sum()
    }

    /// Total CPU busy time: sum of all slice durations.
    ///
    /// Equals the makespan minus any idle gaps.
    pub fn busy_time(&self) -> Time {
        self.entries.iter().map(|e| e.duration()).sum()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(GanttEntry::new("A", 0, 2));
        t.push(GanttEntry::new("B", 2, 4));
        t.push(GanttEntry::new("A", 4, 6));
        t.push(GanttEntry::new("C", 7, 9));
        t
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_timeline().makespan(), 9);
        assert_eq!(Timeline::new().makespan(), 0);
    }

    #[test]
    fn test_entries_for_task() {
        let t = sample_timeline();
        assert_eq!(t.entries_for_task("A").len(), 2);
        assert_eq!(t.entries_for_task("B").len(), 1);
        assert!(t.entries_for_task("X").is_empty());
    }

    #[test]
    fn test_completion_time_of() {
        let t = sample_timeline();
        assert_eq!(t.completion_time_of("A"), Some(6));
        assert_eq!(t.completion_time_of("B"), Some(4));
        assert_eq!(t.completion_time_of("X"), None);
    }

    #[test]
    fn test_executed_time_of() {
        let t = sample_timeline();
        assert_eq!(t.executed_time_of("A"), 4);
        assert_eq!(t.executed_time_of("C"), 2);
        assert_eq!(t.executed_time_of("X"), 0);
    }

    #[test]
    fn test_busy_time_excludes_idle_gap() {
        let t = sample_timeline();
        // One idle tick between 6 and 7.
        assert_eq!(t.busy_time(), 8);
        assert_eq!(t.makespan(), 9);
    }

    #[test]
    fn test_entry_duration() {
        let e = GanttEntry::new("A", 3, 8);
        assert_eq!(e.duration(), 5);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.entry_count(), 0);
        assert_eq!(t.busy_time(), 0);
    }
}
