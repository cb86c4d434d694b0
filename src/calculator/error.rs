//! Error and outcome signals reported by the calculator engine.

use super::operation::UnaryFunction;
use thiserror::Error;

/// A recoverable arithmetic error.
///
/// The engine never propagates these: when one occurs the state switches to
/// the error display and the error is handed back inside [`Outcome::Failed`]
/// so the front end can give transient feedback.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivideByZero,

    #[error("{function} is undefined for {operand}")]
    Domain {
        function: UnaryFunction,
        operand: f64,
    },
}

/// Result of a single engine operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The operation ran and the state may have changed.
    Applied,
    /// The input was not actionable (unparsable operand, nothing pending).
    Ignored,
    /// The operation hit an arithmetic error; the state is now the error state.
    Failed(CalcError),
}

impl Outcome {
    /// Check if this outcome carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Get the error, if any.
    pub fn error(&self) -> Option<CalcError> {
        match self {
            Self::Failed(err) => Some(*err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::DivideByZero.to_string(), "division by zero");
        let err = CalcError::Domain {
            function: UnaryFunction::Sqrt,
            operand: -1.0,
        };
        assert_eq!(err.to_string(), "sqrt is undefined for -1");
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Applied.is_error());
        assert!(!Outcome::Ignored.is_error());
        assert!(Outcome::Failed(CalcError::DivideByZero).is_error());
        assert_eq!(
            Outcome::Failed(CalcError::DivideByZero).error(),
            Some(CalcError::DivideByZero)
        );
        assert_eq!(Outcome::Applied.error(), None);
    }
}
