//! Input validation for simulation requests.
//!
//! Checks the engine's preconditions before any scheduling work is
//! done. Detects:
//! - Empty process sets
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Process sets whose clock would overflow `i64`
//! - Missing or non-positive Round Robin quantum
//!
//! All issues are collected; nothing is clamped or coerced.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (burst ≤ 0).
    NonPositiveBurst,
    /// The latest arrival plus all bursts does not fit in `i64`.
    TimeOverflow,
    /// Round Robin was requested without a quantum.
    MissingQuantum,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time >= 1`
/// 5. `max(arrival_time) + Σ burst_time` fits in `i64`; the clock never
///    passes that point, so a run cannot overflow.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .max()
        .unwrap_or(0)
        .max(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum, returning it when positive.
pub fn validate_quantum(quantum: Option<i64>) -> Result<i64, ValidationError> {
    match quantum {
        None => Err(ValidationError::new(
            ValidationErrorKind::MissingQuantum,
            "Round Robin requires a time quantum",
        )),
        Some(q) if q < 1 => Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {q}"),
        )),
        Some(q) => Ok(q),
    }
}
