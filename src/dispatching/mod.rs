//! Algorithm selection and dispatching rules.
//!
//! Every selection-based policy (FCFS, SJF, SRTF and both priority
//! variants) is a [`RuleEngine`] over the set of ready processes. Round
//! Robin is queue-based and does not use rules.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, Algorithm, RuleEngine};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_rule(rules::Fifo);
//! assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
//!
//! let srtf: Algorithm = "sjf-preemptive".parse().unwrap();
//! assert!(srtf.is_preemptive());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod algorithm;
mod context;
mod engine;
pub mod rules;

pub use algorithm::{Algorithm, AlgorithmInfo};
pub use context::Candidate;
pub use engine::RuleEngine;

use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates how urgently a ready process
/// should receive the CPU.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process.
    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
