//! Simulator configuration.

use serde::{Deserialize, Serialize};

/// How the clock advances for preemptive policies and idle CPU time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stepping {
    /// Preemptive policies re-decide every time unit, and idle time
    /// advances one unit at a time. Emits one bar per unit for SRTF and
    /// preemptive priority.
    #[default]
    UnitTick,
    /// Jump to the next decision point: a running process keeps the CPU
    /// until it completes or another process arrives, and idle time
    /// skips straight to the next arrival. Produces the same schedule as
    /// `UnitTick` once bars are coalesced.
    EventDriven,
}

/// Configuration for a [`Simulator`](super::Simulator).
///
/// # Example
/// ```
/// use cpu_schedule::scheduler::{SimulatorConfig, Stepping};
///
/// let config: SimulatorConfig = serde_json::from_str(
///     r#"{ "stepping": "event-driven", "coalesce": true }"#,
/// ).unwrap();
/// assert_eq!(config.stepping, Stepping::EventDriven);
/// assert_eq!(config.default_quantum, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Clock advancement mode.
    pub stepping: Stepping,
    /// Merge back-to-back bars of the same process in the returned timeline.
    pub coalesce: bool,
    /// Quantum used for Round Robin when a call does not supply one.
    pub default_quantum: Option<i64>,
}

impl SimulatorConfig {
    /// Creates the default configuration (unit ticks, raw bars, no quantum).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stepping mode.
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Enables or disables bar coalescing.
    pub fn with_coalescing(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    /// Sets the fallback Round Robin quantum.
    pub fn with_default_quantum(mut self, quantum: i64) -> Self {
        self.default_quantum = Some(quantum);
        self
    }
}
