//! Single-core CPU scheduling simulator.
//!
//! Given a set of tasks (arrival time, burst duration, optional
//! priority), computes the exact execution timeline and per-task
//! performance metrics under one of four classic scheduling policies:
//! FCFS, non-preemptive SJF, non-preemptive Priority, and Round Robin.
//! Built for teaching scheduling trade-offs — not a production
//! scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `GanttEntry`, `Timeline`
//! - **`policy`**: The four scheduling policies and the `Policy::run`
//!   entry point
//! - **`metrics`**: Waiting/turnaround annotation and aggregate
//!   `SimulationMetrics`
//! - **`validation`**: Input integrity checks (bursts, arrivals,
//!   duplicate IDs, quanta)
//! - **`scenario`**: Named task-set definitions loaded from external
//!   configuration
//!
//! # Flow
//!
//! ```
//! use u_cpusim::models::Task;
//! use u_cpusim::policy::Policy;
//! use u_cpusim::metrics::{annotate, SimulationMetrics};
//!
//! let tasks = vec![
//!     Task::new("A", 0, 4),
//!     Task::new("B", 1, 2),
//!     Task::new("C", 2, 3),
//! ];
//!
//! let run = Policy::RoundRobin { quantum: 2 }.run(&tasks).unwrap();
//! let mut completed = run.completed;
//! annotate(&mut completed);
//!
//! let m = SimulationMetrics::calculate(&completed);
//! assert_eq!(m.makespan, 9);
//! ```
//!
//! Every policy is a deterministic, terminating pure computation:
//! single-threaded, no I/O, and no mutation of the caller's tasks
//! (`Policy::run` simulates on its own copy).
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod metrics;
pub mod models;
pub mod policy;
pub mod scenario;
pub mod validation;

pub use metrics::{annotate, SimulationMetrics};
pub use models::{GanttEntry, Task, Time, Timeline};
pub use policy::{Policy, SimulationRun};
pub use validation::{SimulationError, SimulationErrorKind};
