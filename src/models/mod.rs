//! Simulation domain models.
//!
//! Provides the core data types for representing CPU-scheduling
//! simulations: the task entity and the execution timeline it produces.
//!
//! # Domain Mappings
//!
//! | u-cpusim | OS Textbook | Clinical Framing |
//! |----------|-------------|------------------|
//! | Task | Process / Job | Monitor Channel |
//! | GanttEntry | CPU Burst Slice | Processing Window |
//! | Timeline | Gantt Chart | Monitoring Timeline |

mod task;
mod timeline;

pub use task::{Task, Time};
pub use timeline::{GanttEntry, Timeline};
