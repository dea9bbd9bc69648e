//! Rule-driven strategies: FCFS, SJF, SRTF, Priority, Preemptive Priority.
//!
//! # Algorithm
//!
//! 1. Collect processes with `arrival_time <= now` and work remaining.
//! 2. If none, advance the clock without emitting a bar.
//! 3. Otherwise let the rule engine pick one (ties: input order).
//! 4. Run it to completion (non-preemptive) or for one decision step
//!    (preemptive), then repeat.
//!
//! # Complexity
//! O(n) per decision. Unit-tick preemption makes O(total burst)
//! decisions, so O(n · Σburst) overall.

use log::trace;

use super::config::Stepping;
use super::state::RunState;
use crate::dispatching::RuleEngine;
use crate::models::Process;

/// When a running process may lose the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Preemption {
    /// Runs until completion once selected.
    None,
    /// Re-evaluated at every decision point.
    AtDecisionPoints,
}

/// How idle CPU time is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdleAdvance {
    /// One time unit per idle step.
    SingleTick,
    /// Straight to the next arrival.
    NextArrival,
}

impl IdleAdvance {
    pub(crate) fn for_stepping(stepping: Stepping) -> Self {
        match stepping {
            Stepping::UnitTick => Self::SingleTick,
            Stepping::EventDriven => Self::NextArrival,
        }
    }

    /// Target time for an idle advance from `state.now()`.
    pub(crate) fn target(self, state: &RunState<'_>) -> i64 {
        match self {
            Self::SingleTick => state.now() + 1,
            Self::NextArrival => state.next_arrival().unwrap_or(state.now() + 1),
        }
    }
}

/// A selection-based scheduling strategy.
#[derive(Debug, Clone)]
pub(crate) struct SelectionStrategy {
    pub(crate) rules: RuleEngine,
    pub(crate) preemption: Preemption,
    pub(crate) stepping: Stepping,
    pub(crate) idle: IdleAdvance,
}

impl SelectionStrategy {
    /// Runs the strategy to completion over `processes`.
    pub(crate) fn run<'a>(&self, processes: &'a [Process]) -> RunState<'a> {
        let mut state = RunState::new(processes);

        while !state.is_done() {
            let ready = state.ready();

            let Some(selected) = self.rules.select_best(&ready) else {
                let target = self.idle.target(&state);
                state.idle_until(target);
                continue;
            };

            let run_length = self.run_length(&state, selected);
            trace!(
                "t={}: selected {} from {} ready",
                state.now(),
                processes[selected].id,
                ready.len()
            );
            state.dispatch(selected, run_length);
        }

        state
    }

    fn run_length(&self, state: &RunState<'_>, selected: usize) -> i64 {
        let remaining = state.remaining(selected);
        match (self.preemption, self.stepping) {
            (Preemption::None, _) => remaining,
            (Preemption::AtDecisionPoints, Stepping::UnitTick) => 1,
            (Preemption::AtDecisionPoints, Stepping::EventDriven) => state
                .next_arrival()
                .map_or(remaining, |arrival| remaining.min(arrival - state.now())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn classic() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    fn strategy(rules: RuleEngine, preemption: Preemption, stepping: Stepping) -> SelectionStrategy {
        SelectionStrategy {
            rules,
            preemption,
            stepping,
            idle: IdleAdvance::for_stepping(stepping),
        }
    }

    fn spans(state: RunState<'_>) -> Vec<(String, i64, i64)> {
        let (timeline, _, _) = state.finish();
        timeline
            .coalesce()
            .into_iter()
            .map(|b| (b.process_id, b.start_time, b.end_time))
            .collect()
    }

    #[test]
    fn test_non_preemptive_srpt() {
        let ps = classic();
        let s = strategy(
            RuleEngine::new().with_rule(rules::Srpt),
            Preemption::None,
            Stepping::UnitTick,
        );
        let state = s.run(&ps);
        let (timeline, done, makespan) = state.finish();
        assert_eq!(timeline.len(), 3);
        assert_eq!(makespan, 16);
        assert_eq!(done[1].start_time, 5);
    }

    #[test]
    fn test_unit_and_event_stepping_agree() {
        let ps = vec![
            Process::new("A", 0, 6),
            Process::new("B", 2, 2),
            Process::new("C", 9, 1),
            Process::new("D", 3, 4),
        ];
        let unit = strategy(
            RuleEngine::new().with_rule(rules::Srpt),
            Preemption::AtDecisionPoints,
            Stepping::UnitTick,
        );
        let event = strategy(
            RuleEngine::new().with_rule(rules::Srpt),
            Preemption::AtDecisionPoints,
            Stepping::EventDriven,
        );
        assert_eq!(spans(unit.run(&ps)), spans(event.run(&ps)));
    }

    #[test]
    fn test_idle_next_arrival_skips_gap() {
        let ps = vec![Process::new("late", 7, 2)];
        let s = strategy(
            RuleEngine::new().with_rule(rules::Fifo),
            Preemption::None,
            Stepping::EventDriven,
        );
        assert_eq!(spans(s.run(&ps)), vec![("late".to_string(), 7, 9)]);
    }
}
