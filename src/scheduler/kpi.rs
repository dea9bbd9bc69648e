//! Simulation quality metrics (KPIs).
//!
//! Aggregates the per-process metrics of a completed run into the
//! summary figures usually reported alongside a Gantt chart.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Idle Time | makespan - busy time |
//! | Context Switches | adjacent bars owned by different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::SimulationResult;
use crate::models::CompletedProcess;

/// Aggregate performance indicators of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Time at which the last process completed.
    pub makespan: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Time units the CPU sat idle before the makespan.
    pub idle_time: i64,
    /// Number of process switches between adjacent bars.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let count = result.processes.len();
        // Summed as f64: per-process times are bounded, their sum is not.
        let mean = |metric: fn(&CompletedProcess) -> i64| {
            if count == 0 {
                0.0
            } else {
                let total: f64 = result.processes.iter().map(|p| metric(p) as f64).sum();
                total / count as f64
            }
        };

        let busy = result.timeline.busy_time();
        let (cpu_utilization, throughput) = if result.makespan > 0 {
            (
                busy as f64 / result.makespan as f64,
                count as f64 / result.makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan: result.makespan,
            avg_waiting_time: mean(|p| p.waiting_time),
            avg_turnaround_time: mean(|p| p.turnaround_time),
            avg_response_time: mean(|p| p.response_time),
            cpu_utilization,
            throughput,
            idle_time: result.makespan - busy,
            context_switches: result.timeline.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::Algorithm;
    use crate::models::{Process, Timeline};
    use crate::scheduler::simulate;

    fn classic() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    #[test]
    fn test_kpi_fcfs() {
        let kpi = simulate(&classic(), Algorithm::Fcfs, None).unwrap().kpi();
        assert_eq!(kpi.makespan, 16);
        // waits 0, 4, 6
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        // turnarounds 5, 7, 14
        assert!((kpi.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_response_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.idle_time, 0);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_with_idle_gap() {
        let ps = vec![Process::new("A", 0, 2), Process::new("B", 6, 2)];
        let kpi = simulate(&ps, Algorithm::Fcfs, None).unwrap().kpi();
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_context_switches_ignore_unit_splits() {
        // Raw SRTF bars are one unit long; only real switches count.
        let kpi = simulate(&classic(), Algorithm::Srtf, None).unwrap().kpi();
        assert_eq!(kpi.context_switches, 3);
    }

    #[test]
    fn test_kpi_near_time_limit() {
        let half = i64::MAX / 2;
        let ps = vec![Process::new("A", 0, half), Process::new("B", 0, half - 1)];
        let kpi = simulate(&ps, Algorithm::Fcfs, None).unwrap().kpi();
        // Turnarounds sum past i64::MAX.
        let expected = (half as f64 + (2 * half - 1) as f64) / 2.0;
        assert!((kpi.avg_turnaround_time - expected).abs() / expected < 1e-12);
        assert_eq!(kpi.idle_time, 0);
    }

    #[test]
    fn test_kpi_empty() {
        let result = SimulationResult {
            timeline: Timeline::new(),
            processes: Vec::new(),
            makespan: 0,
        };
        let kpi = SimulationKpi::calculate(&result);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
    }
}
