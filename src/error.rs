//! Error types for simulation requests.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure outcome of a simulation call.
///
/// Returned synchronously as the sole result; no partial timeline is
/// produced on error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The process set or quantum violates the engine's preconditions.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// The algorithm selector is not one of the six supported policies.
    #[error("unsupported algorithm: '{0}'")]
    UnsupportedAlgorithm(String),
}

impl SimulationError {
    /// Validation errors carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::UnsupportedAlgorithm(_) => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_joins_messages() {
        let err = SimulationError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyProcessSet, "no processes"),
            ValidationError::new(ValidationErrorKind::MissingQuantum, "quantum required"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: no processes; quantum required"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_unsupported_display() {
        let err = SimulationError::UnsupportedAlgorithm("lottery".into());
        assert_eq!(err.to_string(), "unsupported algorithm: 'lottery'");
        assert!(err.validation_errors().is_empty());
    }
}
