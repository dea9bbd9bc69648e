//! Process model.
//!
//! A process is a single CPU burst competing for one processor. The
//! input descriptor (`Process`) is supplied by the caller; the engine
//! returns a `CompletedProcess` per input, carrying the derived metrics.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process descriptor supplied to the simulator.
///
/// # Time Representation
/// All times are integer time units relative to t=0. The engine never
/// interprets a unit as wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Instant at which the process becomes eligible to run (≥ 0).
    pub arrival_time: i64,
    /// Total CPU time required (≥ 1).
    pub burst_time: i64,
    /// Scheduling priority (higher = more important).
    ///
    /// Only priority-based policies read it. `None` is treated as 0,
    /// i.e. the lowest default priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority as seen by priority-based policies (missing = 0).
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }
}

/// A process after the simulation has run it to completion.
///
/// Metrics exist only on this type, so they are defined exactly when
/// the process has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: String,
    /// Arrival time copied from the input.
    pub arrival_time: i64,
    /// Burst time copied from the input.
    pub burst_time: i64,
    /// Priority copied from the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// First instant the process was dispatched.
    pub start_time: i64,
    /// Instant the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

impl CompletedProcess {
    /// Derives the metrics of a finished process.
    pub fn from_run(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 2, 7).with_priority(3);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, Some(3));
        assert_eq!(p.effective_priority(), 3);
    }

    #[test]
    fn test_missing_priority_is_zero() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, None);
        assert_eq!(p.effective_priority(), 0);
    }

    #[test]
    fn test_completed_metrics() {
        let p = Process::new("P2", 1, 3);
        let done = CompletedProcess::from_run(&p, 5, 8);
        assert_eq!(done.turnaround_time, 7);
        assert_eq!(done.waiting_time, 4);
        assert_eq!(done.response_time, 4);
    }

    #[test]
    fn test_priority_omitted_in_json() {
        let json = serde_json::to_string(&Process::new("P1", 0, 4)).unwrap();
        assert!(!json.contains("priority"));

        let parsed: Process =
            serde_json::from_str(r#"{"id":"P9","arrival_time":3,"burst_time":2}"#).unwrap();
        assert_eq!(parsed.priority, None);
        assert_eq!(parsed.arrival_time, 3);
    }
}
