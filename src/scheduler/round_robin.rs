//! Round Robin strategy.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO ready queue with the processes arriving at t=0.
//! 2. Pop the head and run it for `min(quantum, remaining)`.
//! 3. Enqueue every process that arrived during that slice, in arrival
//!    order.
//! 4. If the popped process still has work, append it after them.
//! 5. With an empty queue, advance the clock and admit new arrivals.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::trace;

use super::selection::IdleAdvance;
use super::state::RunState;
use crate::models::Process;

/// Queue-based time-slicing strategy.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RoundRobin {
    pub(crate) quantum: i64,
    pub(crate) idle: IdleAdvance,
}

impl RoundRobin {
    /// Runs the strategy to completion over `processes`.
    pub(crate) fn run<'a>(&self, processes: &'a [Process]) -> RunState<'a> {
        let mut state = RunState::new(processes);
        let mut queue: VecDeque<usize> = processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.arrival_time <= 0)
            .map(|(i, _)| i)
            .collect();

        while !state.is_done() {
            let Some(current) = queue.pop_front() else {
                let before = state.now();
                let target = self.idle.target(&state);
                state.idle_until(target);
                queue.extend(state.arrivals_between(before, state.now()));
                continue;
            };

            let run_length = self.quantum.min(state.remaining(current));
            let before = state.now();
            let finished = state.dispatch(current, run_length);

            let arrived = state.arrivals_between(before, state.now());
            if !arrived.is_empty() {
                trace!(
                    "t={}: {} process(es) joined the ready queue",
                    state.now(),
                    arrived.len()
                );
            }
            queue.extend(arrived);
            if !finished {
                queue.push_back(current);
            }
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: RunState<'_>) -> Vec<(String, i64, i64)> {
        let (timeline, _, _) = state.finish();
        timeline
            .into_iter()
            .map(|b| (b.process_id, b.start_time, b.end_time))
            .collect()
    }

    fn bar(id: &str, start: i64, end: i64) -> (String, i64, i64) {
        (id.to_string(), start, end)
    }

    #[test]
    fn test_new_arrivals_queue_before_preempted() {
        let ps = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let rr = RoundRobin {
            quantum: 2,
            idle: IdleAdvance::SingleTick,
        };
        assert_eq!(
            ids(rr.run(&ps)),
            vec![
                bar("P1", 0, 2),
                bar("P2", 2, 4),
                bar("P3", 4, 6),
                bar("P1", 6, 8),
                bar("P2", 8, 9),
                bar("P3", 9, 11),
                bar("P1", 11, 12),
                bar("P3", 12, 14),
                bar("P3", 14, 16),
            ]
        );
    }

    #[test]
    fn test_arrivals_within_slice_use_arrival_order() {
        // B arrives after C even though it is listed first.
        let ps = vec![
            Process::new("A", 0, 3),
            Process::new("B", 3, 1),
            Process::new("C", 1, 1),
        ];
        let rr = RoundRobin {
            quantum: 3,
            idle: IdleAdvance::SingleTick,
        };
        assert_eq!(
            ids(rr.run(&ps)),
            vec![bar("A", 0, 3), bar("C", 3, 4), bar("B", 4, 5)]
        );
    }

    #[test]
    fn test_idle_gap_then_arrival() {
        let ps = vec![Process::new("A", 0, 1), Process::new("B", 4, 2)];
        for idle in [IdleAdvance::SingleTick, IdleAdvance::NextArrival] {
            let rr = RoundRobin { quantum: 4, idle };
            assert_eq!(ids(rr.run(&ps)), vec![bar("A", 0, 1), bar("B", 4, 6)]);
        }
    }

    #[test]
    fn test_nothing_at_zero() {
        let ps = vec![Process::new("A", 3, 2), Process::new("B", 3, 2)];
        let rr = RoundRobin {
            quantum: 1,
            idle: IdleAdvance::SingleTick,
        };
        assert_eq!(
            ids(rr.run(&ps)),
            vec![bar("A", 3, 4), bar("B", 4, 5), bar("A", 5, 6), bar("B", 6, 7)]
        );
    }
}
