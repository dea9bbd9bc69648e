//! The closed set of supported scheduling policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{rules, RuleEngine};
use crate::error::SimulationError;

/// CPU scheduling policy.
///
/// Text selectors (`key()`) are the ones a front end sends: `"fcfs"`,
/// `"sjf"`, `"sjf-preemptive"`, `"rr"`, `"priority"` and
/// `"priority-preemptive"`. Parsing also accepts `"srtf"` and
/// `"round-robin"`, case-insensitively. Deserialization goes through the
/// same parser, so an unknown selector fails with the
/// `UnsupportedAlgorithm` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Algorithm {
    /// First Come First Serve.
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "sjf")]
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    #[serde(rename = "sjf-preemptive")]
    Srtf,
    /// Round Robin with a fixed time quantum.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Priority scheduling (non-preemptive).
    #[serde(rename = "priority")]
    Priority,
    /// Priority scheduling with preemption at every tick.
    #[serde(rename = "priority-preemptive")]
    PreemptivePriority,
}

/// Descriptive metadata for an algorithm, for catalogue displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Short label (e.g., "SRTF").
    pub label: &'static str,
    /// Full name.
    pub full_name: &'static str,
    /// Time complexity of the selection step.
    pub time_complexity: &'static str,
    /// Auxiliary space.
    pub space_complexity: &'static str,
    /// One-line description.
    pub description: &'static str,
}

impl Algorithm {
    /// All algorithms, in catalogue order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
        Algorithm::PreemptivePriority,
    ];

    /// Text selector for this algorithm.
    pub fn key(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "sjf-preemptive",
            Self::RoundRobin => "rr",
            Self::Priority => "priority",
            Self::PreemptivePriority => "priority-preemptive",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PreemptivePriority
        )
    }

    /// Whether the algorithm needs a time quantum.
    pub fn requires_quantum(self) -> bool {
        self == Self::RoundRobin
    }

    /// Catalogue metadata.
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Fcfs => AlgorithmInfo {
                label: "FCFS",
                full_name: "First Come First Serve",
                time_complexity: "O(n)",
                space_complexity: "O(1)",
                description: "Non-preemptive scheduling based on arrival time",
            },
            Self::Sjf => AlgorithmInfo {
                label: "SJF",
                full_name: "Shortest Job First",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                description: "Non-preemptive scheduling based on burst time",
            },
            Self::Srtf => AlgorithmInfo {
                label: "SRTF",
                full_name: "Shortest Remaining Time First",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                description: "Preemptive version of SJF",
            },
            Self::RoundRobin => AlgorithmInfo {
                label: "RR",
                full_name: "Round Robin",
                time_complexity: "O(n)",
                space_complexity: "O(n)",
                description: "Preemptive scheduling with fixed time quantum",
            },
            Self::Priority => AlgorithmInfo {
                label: "Priority",
                full_name: "Priority Scheduling",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                description: "Non-preemptive scheduling based on priority",
            },
            Self::PreemptivePriority => AlgorithmInfo {
                label: "P-Priority",
                full_name: "Preemptive Priority",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                description: "Preemptive scheduling based on priority",
            },
        }
    }

    /// Selection rules for the policy, or `None` for queue-based Round Robin.
    pub fn rule_engine(self) -> Option<RuleEngine> {
        match self {
            Self::Fcfs => Some(RuleEngine::new().with_rule(rules::Fifo)),
            Self::Sjf | Self::Srtf => Some(RuleEngine::new().with_rule(rules::Srpt)),
            Self::Priority | Self::PreemptivePriority => {
                Some(RuleEngine::new().with_rule(rules::Priority))
            }
            Self::RoundRobin => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().label)
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "sjf-preemptive" | "srtf" => Ok(Self::Srtf),
            "rr" | "round-robin" => Ok(Self::RoundRobin),
            "priority" => Ok(Self::Priority),
            "priority-preemptive" => Ok(Self::PreemptivePriority),
            _ => Err(SimulationError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SimulationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_parse() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.key().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("SRTF".parse::<Algorithm>().unwrap(), Algorithm::Srtf);
        assert_eq!(
            " round-robin ".parse::<Algorithm>().unwrap(),
            Algorithm::RoundRobin
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lottery".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SimulationError::UnsupportedAlgorithm("lottery".into()));
    }

    #[test]
    fn test_preemption_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(!Algorithm::Priority.is_preemptive());
        assert!(Algorithm::PreemptivePriority.is_preemptive());
    }

    #[test]
    fn test_info() {
        let info = Algorithm::Srtf.info();
        assert_eq!(info.label, "SRTF");
        assert_eq!(info.full_name, "Shortest Remaining Time First");
        assert_eq!(Algorithm::RoundRobin.info().space_complexity, "O(n)");
        assert_eq!(Algorithm::PreemptivePriority.to_string(), "P-Priority");
    }

    #[test]
    fn test_rule_engines() {
        assert!(Algorithm::RoundRobin.rule_engine().is_none());
        assert_eq!(
            Algorithm::Sjf.rule_engine().unwrap().rule_names(),
            vec!["SRPT"]
        );
        assert!(Algorithm::RoundRobin.requires_quantum());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::Srtf).unwrap();
        assert_eq!(json, r#""sjf-preemptive""#);
        let parsed: Algorithm = serde_json::from_str(r#""round-robin""#).unwrap();
        assert_eq!(parsed, Algorithm::RoundRobin);
        let parsed: Algorithm = serde_json::from_str(r#""SRTF""#).unwrap();
        assert_eq!(parsed, Algorithm::Srtf);
    }

    #[test]
    fn test_deserialize_unknown_selector() {
        let err = serde_json::from_str::<Algorithm>(r#""lottery""#).unwrap_err();
        assert!(err
            .to_string()
            .contains(&SimulationError::UnsupportedAlgorithm("lottery".into()).to_string()));
    }
}
