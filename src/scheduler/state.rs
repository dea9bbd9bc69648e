//! Mutable per-run state shared by every strategy.
//!
//! Owns the simulation clock, each process's remaining work, and the
//! timeline under construction. Strategies decide *what* runs; this type
//! does the dispatch bookkeeping identically for all of them.

use log::trace;

use crate::dispatching::Candidate;
use crate::models::{Bar, CompletedProcess, Process, Timeline};

/// Simulation state of one process.
#[derive(Debug, Clone)]
struct ProcessState {
    remaining_time: i64,
    start_time: Option<i64>,
    completed: Option<CompletedProcess>,
}

/// State of a single simulation run over a borrowed process snapshot.
#[derive(Debug)]
pub(crate) struct RunState<'a> {
    processes: &'a [Process],
    states: Vec<ProcessState>,
    completed_count: usize,
    now: i64,
    timeline: Timeline,
}

impl<'a> RunState<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        let states = processes
            .iter()
            .map(|p| ProcessState {
                remaining_time: p.burst_time,
                start_time: None,
                completed: None,
            })
            .collect();
        Self {
            processes,
            states,
            completed_count: 0,
            now: 0,
            timeline: Timeline::new(),
        }
    }

    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.now
    }

    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.completed_count == self.processes.len()
    }

    #[inline]
    pub(crate) fn remaining(&self, index: usize) -> i64 {
        self.states[index].remaining_time
    }

    /// Arrived, unfinished processes in input order.
    pub(crate) fn ready(&self) -> Vec<Candidate<'a>> {
        let processes: &'a [Process] = self.processes;
        processes
            .iter()
            .zip(&self.states)
            .enumerate()
            .filter(|(_, (p, s))| p.arrival_time <= self.now && s.remaining_time > 0)
            .map(|(i, (p, s))| Candidate::new(i, p, s.remaining_time))
            .collect()
    }

    /// Earliest arrival strictly after `now` among unfinished processes.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.processes
            .iter()
            .zip(&self.states)
            .filter(|(p, s)| p.arrival_time > self.now && s.remaining_time > 0)
            .map(|(p, _)| p.arrival_time)
            .min()
    }

    /// Indices of processes arriving in `(after, upto]`, ordered by
    /// arrival time and then input order.
    pub(crate) fn arrivals_between(&self, after: i64, upto: i64) -> Vec<usize> {
        let mut arrived: Vec<usize> = self
            .processes
            .iter()
            .enumerate()
            .filter(|(i, p)| {
                p.arrival_time > after
                    && p.arrival_time <= upto
                    && self.states[*i].remaining_time > 0
            })
            .map(|(i, _)| i)
            .collect();
        arrived.sort_by_key(|&i| (self.processes[i].arrival_time, i));
        arrived
    }

    /// Advances the clock to `time` without emitting a bar.
    pub(crate) fn idle_until(&mut self, time: i64) {
        debug_assert!(time > self.now);
        trace!("t={}: cpu idle until t={}", self.now, time);
        self.now = time;
    }

    /// Runs process `index` for `run_length` units starting now.
    ///
    /// Records the first dispatch, emits the bar, advances the clock,
    /// and derives metrics when the process finishes. Returns `true`
    /// when the process completed.
    pub(crate) fn dispatch(&mut self, index: usize, run_length: i64) -> bool {
        let processes = self.processes;
        let process = &processes[index];
        let state = &mut self.states[index];
        debug_assert!(run_length >= 1 && run_length <= state.remaining_time);

        let start_time = *state.start_time.get_or_insert(self.now);
        let end = self.now + run_length;
        trace!("t={}: dispatch {} for {}", self.now, process.id, run_length);

        self.timeline.push(Bar::new(process.id.clone(), self.now, end));
        state.remaining_time -= run_length;
        self.now = end;

        if state.remaining_time == 0 {
            state.completed = Some(CompletedProcess::from_run(process, start_time, end));
            self.completed_count += 1;
            trace!("t={}: {} completed", end, process.id);
            true
        } else {
            false
        }
    }

    /// Consumes the state, returning the timeline, completed processes in
    /// input order, and the makespan.
    pub(crate) fn finish(self) -> (Timeline, Vec<CompletedProcess>, i64) {
        debug_assert!(self.is_done());
        let completed = self
            .states
            .into_iter()
            .filter_map(|s| s.completed)
            .collect();
        (self.timeline, completed, self.now)
    }
}
