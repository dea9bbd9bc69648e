//! Timeline (solution) model.
//!
//! A timeline is the ordered list of execution intervals produced by a
//! simulation run. Idle CPU time is implicit: it is any part of
//! `[0, makespan)` not covered by a bar.

use serde::{Deserialize, Serialize};

/// One execution interval `[start_time, end_time)` of a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Process that held the CPU.
    pub process_id: String,
    /// Start of the interval (inclusive).
    pub start_time: i64,
    /// End of the interval (exclusive).
    pub end_time: i64,
    /// `end_time - start_time`, carried so consumers can size the bar
    /// without recomputing it.
    pub duration: i64,
}

impl Bar {
    /// Creates a new bar.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
            duration: end_time - start_time,
        }
    }

    /// Whether `time` falls inside `[start_time, end_time)`.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

/// Ordered execution plan, sorted by `start_time` ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    bars: Vec<Bar>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bar. Callers push bars in chronological order.
    pub fn push(&mut self, bar: Bar) {
        debug_assert!(
            self.bars
                .last()
                .map_or(true, |last| last.end_time <= bar.start_time),
            "bars must be appended in order"
        );
        self.bars.push(bar);
    }

    /// All bars in order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the timeline has no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// End of the last bar (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.bars.last().map(|b| b.end_time).unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.bars.iter().map(|b| b.duration).sum()
    }

    /// Bars belonging to one process.
    pub fn bars_for_process(&self, process_id: &str) -> Vec<&Bar> {
        self.bars
            .iter()
            .filter(|b| b.process_id == process_id)
            .collect()
    }

    /// Process holding the CPU at `time`, or `None` when idle.
    pub fn process_at(&self, time: i64) -> Option<&str> {
        let idx = self.bars.partition_point(|b| b.end_time <= time);
        self.bars
            .get(idx)
            .filter(|b| b.contains(time))
            .map(|b| b.process_id.as_str())
    }

    /// Gaps in `[0, makespan)` where no process ran.
    pub fn idle_spans(&self) -> Vec<(i64, i64)> {
        let mut spans = Vec::new();
        let mut cursor = 0;
        for bar in &self.bars {
            if bar.start_time > cursor {
                spans.push((cursor, bar.start_time));
            }
            cursor = bar.end_time;
        }
        spans
    }

    /// Number of switches between different processes on adjacent bars.
    pub fn context_switches(&self) -> usize {
        self.bars
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Merges back-to-back bars of the same process into one.
    ///
    /// Bars separated by idle time are kept apart.
    pub fn coalesce(&self) -> Timeline {
        let mut merged: Vec<Bar> = Vec::with_capacity(self.bars.len());
        for bar in &self.bars {
            match merged.last_mut() {
                Some(last)
                    if last.process_id == bar.process_id && last.end_time == bar.start_time =>
                {
                    last.end_time = bar.end_time;
                    last.duration += bar.duration;
                }
                _ => merged.push(bar.clone()),
            }
        }
        Timeline { bars: merged }
    }
}

impl From<Vec<Bar>> for Timeline {
    fn from(mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.start_time);
        Self { bars }
    }
}

impl IntoIterator for Timeline {
    type Item = Bar;
    type IntoIter = std::vec::IntoIter<Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
