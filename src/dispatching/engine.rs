//! Rule engine for process selection.
//!
//! Composes dispatching rules into a sequential chain: the primary rule
//! decides, later rules only break its ties, and input order breaks
//! whatever ties remain.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{Candidate, DispatchingRule};

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, Candidate, RuleEngine};
/// use cpu_schedule::models::Process;
///
/// let long = Process::new("long", 0, 8);
/// let short = Process::new("short", 0, 2);
/// let ready = vec![Candidate::new(0, &long, 8), Candidate::new(1, &short, 2)];
///
/// let engine = RuleEngine::new().with_rule(rules::Srpt);
/// assert_eq!(engine.select_best(&ready), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules every candidate ties,
    /// so selection falls back to input order.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. The first rule decides; each later rule is
    /// consulted only when all earlier ones tie.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the input index of the winning candidate.
    ///
    /// Candidates that tie on every rule resolve to the smallest input
    /// index, regardless of the order of the slice.
    pub fn select_best(&self, candidates: &[Candidate<'_>]) -> Option<usize> {
        candidates
            .iter()
            .min_by(|a, b| self.compare(a, b))
            .map(|c| c.index)
    }

    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.index.cmp(&b.index)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
