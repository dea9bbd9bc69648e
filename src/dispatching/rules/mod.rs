//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FIFO
//! - **Time-based**: SRPT
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{Candidate, DispatchingRule, RuleScore};

/// First In, First Out.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Remaining Processing Time.
///
/// Prioritizes processes with the least work left. Before a process
/// first runs its remaining time equals its burst, so the same rule
/// serves non-preemptive SJF.
///
/// # Reference
/// Schrage (1968), optimal for mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl DispatchingRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}

/// Highest priority value first.
///
/// A missing priority counts as 0.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        -i64::from(candidate.process.effective_priority())
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_fifo_scores_arrival() {
        let p = Process::new("P1", 4, 2);
        assert_eq!(Fifo.evaluate(&Candidate::new(0, &p, 2)), 4);
    }

    #[test]
    fn test_srpt_scores_remaining() {
        let p = Process::new("P1", 0, 9);
        assert_eq!(Srpt.evaluate(&Candidate::new(0, &p, 6)), 6);
    }

    #[test]
    fn test_priority_negates_value() {
        let high = Process::new("H", 0, 1).with_priority(5);
        let none = Process::new("N", 0, 1);
        assert_eq!(Priority.evaluate(&Candidate::new(0, &high, 1)), -5);
        assert_eq!(Priority.evaluate(&Candidate::new(1, &none, 1)), 0);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Srpt.description(), "Shortest Remaining Processing Time");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
