//! CPU scheduling simulation engine.
//!
//! Computes the execution timeline and per-process metrics of classic
//! single-CPU scheduling policies. The engine is a pure function of its
//! input: callers own the process list and re-run the simulation
//! wholesale whenever it changes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `CompletedProcess`, `Bar`, `Timeline`
//! - **`dispatching`**: `Algorithm` selection and the rules behind each policy
//! - **`scheduler`**: `Simulator`, `simulate`, configuration and `SimulationKpi`
//! - **`validation`**: Input precondition checks
//! - **`workload`**: Sample and random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::{simulate, Algorithm, Process};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let result = simulate(&processes, Algorithm::RoundRobin, Some(2)).unwrap();
//! assert_eq!(result.timeline.bars()[0].end_time, 2);
//! assert_eq!(result.makespan, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use dispatching::Algorithm;
pub use error::SimulationError;
pub use models::{Bar, CompletedProcess, Process, Timeline};
pub use scheduler::{simulate, SimulationResult, Simulator};
