//! Simulation engine and KPI evaluation.
//!
//! Runs one of six CPU scheduling policies over a process set and
//! returns the execution timeline with per-process metrics.
//!
//! # Algorithm
//!
//! Selection-based policies (FCFS, SJF, SRTF, Priority, Preemptive
//! Priority) pick among ready processes with a dispatching rule; Round
//! Robin cycles a FIFO ready queue. Both share the same dispatch
//! bookkeeping: first-dispatch recording, bar emission, and completion
//! metrics.
//!
//! # KPI
//!
//! `SimulationKpi` summarizes a run: average waiting, turnaround and
//! response times, CPU utilization, throughput and context switches.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod config;
mod kpi;
mod round_robin;
mod selection;
mod simulator;
mod state;

pub use config::{SimulatorConfig, Stepping};
pub use kpi::SimulationKpi;
pub use simulator::{simulate, SimulationRequest, SimulationResult, Simulator};
