//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Resolve the quantum (argument, else configured default).
//! 2. Validate the process set and build the strategy for the selected
//!    algorithm (Round Robin checks its quantum here); report every
//!    problem together, without clamping.
//! 3. Run the strategy over the caller's process slice, which is only
//!    ever read.
//! 4. Optionally coalesce contiguous bars and package the result.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::{SimulatorConfig, Stepping};
use super::kpi::SimulationKpi;
use super::round_robin::RoundRobin;
use super::selection::{IdleAdvance, Preemption, SelectionStrategy};
use super::state::RunState;
use crate::dispatching::Algorithm;
use crate::error::SimulationError;
use crate::models::{CompletedProcess, Process, Timeline};
use crate::validation::{validate_processes, validate_quantum, ValidationError};

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Scheduling policy.
    pub algorithm: Algorithm,
    /// Round Robin time quantum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution plan ordered by start time.
    pub timeline: Timeline,
    /// Completed processes with metrics, in input order.
    pub processes: Vec<CompletedProcess>,
    /// Time at which the last process completed.
    pub makespan: i64,
}

impl SimulationResult {
    /// Looks up a completed process by ID.
    pub fn process(&self, id: &str) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Aggregate metrics for this run.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(self)
    }
}

/// CPU scheduling simulator.
///
/// Holds only immutable configuration, so one instance can serve any
/// number of independent calls, including from several threads.
///
/// # Example
///
/// ```
/// use cpu_schedule::dispatching::Algorithm;
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::Simulator;
///
/// let processes = vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
///     Process::new("P3", 2, 8),
/// ];
/// let result = Simulator::new()
///     .run(&processes, Algorithm::Fcfs, None)
///     .unwrap();
///
/// assert_eq!(result.makespan, 16);
/// assert_eq!(result.process("P2").unwrap().waiting_time, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator from a configuration value.
    pub fn from_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Sets the stepping mode.
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.config.stepping = stepping;
        self
    }

    /// Enables or disables coalescing of contiguous bars.
    pub fn with_coalescing(mut self, coalesce: bool) -> Self {
        self.config.coalesce = coalesce;
        self
    }

    /// Sets the fallback Round Robin quantum.
    pub fn with_default_quantum(mut self, quantum: i64) -> Self {
        self.config.default_quantum = Some(quantum);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulates `algorithm` over `processes`.
    ///
    /// `quantum` is read only by Round Robin; when `None`, the configured
    /// default quantum is used.
    ///
    /// # Errors
    /// `SimulationError::InvalidInput` when the process set is empty,
    /// contains a non-positive burst, a negative arrival or a duplicate
    /// ID, when its times would overflow, or when Round Robin lacks a
    /// positive quantum.
    pub fn run(
        &self,
        processes: &[Process],
        algorithm: Algorithm,
        quantum: Option<i64>,
    ) -> Result<SimulationResult, SimulationError> {
        let quantum = quantum.or(self.config.default_quantum);
        let strategy = match (validate_processes(processes), self.strategy(algorithm, quantum)) {
            (Ok(()), Ok(strategy)) => strategy,
            (checked, strategy) => {
                let mut errors = checked.err().unwrap_or_default();
                errors.extend(strategy.err());
                debug!(
                    "rejecting {} request: {} validation error(s)",
                    algorithm,
                    errors.len()
                );
                return Err(SimulationError::InvalidInput(errors));
            }
        };

        debug!(
            "simulating {} over {} process(es), stepping {:?}",
            algorithm,
            processes.len(),
            self.config.stepping
        );

        let (timeline, completed, makespan) = strategy.run(processes).finish();
        let timeline = if self.config.coalesce {
            timeline.coalesce()
        } else {
            timeline
        };

        debug!(
            "{} finished at t={} with {} bar(s)",
            algorithm,
            makespan,
            timeline.len()
        );

        Ok(SimulationResult {
            timeline,
            processes: completed,
            makespan,
        })
    }

    /// Simulates a request.
    pub fn run_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        self.run(&request.processes, request.algorithm, request.quantum)
    }

    /// Simulates an algorithm given by its text selector (e.g. `"rr"`).
    ///
    /// # Errors
    /// `SimulationError::UnsupportedAlgorithm` for an unknown selector,
    /// otherwise as [`Simulator::run`].
    pub fn run_named(
        &self,
        processes: &[Process],
        algorithm: &str,
        quantum: Option<i64>,
    ) -> Result<SimulationResult, SimulationError> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.run(processes, algorithm, quantum)
    }

    fn strategy(
        &self,
        algorithm: Algorithm,
        quantum: Option<i64>,
    ) -> Result<Strategy, ValidationError> {
        let stepping = self.config.stepping;

        // Only Round Robin lacks selection rules.
        let Some(rules) = algorithm.rule_engine() else {
            return Ok(Strategy::RoundRobin(RoundRobin {
                quantum: validate_quantum(quantum)?,
                idle: IdleAdvance::for_stepping(stepping),
            }));
        };

        let preemption = if algorithm.is_preemptive() {
            Preemption::AtDecisionPoints
        } else {
            Preemption::None
        };
        // FCFS always jumps idle gaps: its dispatch steps are whole bursts.
        let idle = if algorithm == Algorithm::Fcfs {
            IdleAdvance::NextArrival
        } else {
            IdleAdvance::for_stepping(stepping)
        };

        Ok(Strategy::Selection(SelectionStrategy {
            rules,
            preemption,
            stepping,
            idle,
        }))
    }
}

/// Validated, ready-to-run strategy for one request.
#[derive(Debug)]
enum Strategy {
    Selection(SelectionStrategy),
    RoundRobin(RoundRobin),
}

impl Strategy {
    fn run<'a>(&self, processes: &'a [Process]) -> RunState<'a> {
        match self {
            Self::Selection(s) => s.run(processes),
            Self::RoundRobin(rr) => rr.run(processes),
        }
    }
}

/// Simulates `algorithm` over `processes` with the default configuration.
///
/// Shorthand for `Simulator::new().run(processes, algorithm, quantum)`.
pub fn simulate(
    processes: &[Process],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new().run(processes, algorithm, quantum)
}
