//! Binary operations and single-operand functions supported by the engine.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-operand operator awaiting its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperation {
    /// Apply the operation to `prev` (left) and `current` (right).
    pub fn apply(self, prev: f64, current: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(prev + current),
            Self::Subtract => Ok(prev - current),
            Self::Multiply => Ok(prev * current),
            Self::Divide => {
                if current == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(prev / current)
            }
            Self::Power => Ok(prev.powf(current)),
        }
    }

    /// Glyph shown next to the previous operand while the operation is pending.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A scientific function applied to the current operand alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
    Square,
}

impl UnaryFunction {
    /// Apply the function. Trigonometric functions take degrees.
    pub fn apply(self, operand: f64) -> Result<f64, CalcError> {
        let domain_error = CalcError::Domain {
            function: self,
            operand,
        };

        match self {
            Self::Sin => Ok(to_radians(operand).sin()),
            Self::Cos => Ok(to_radians(operand).cos()),
            Self::Tan => Ok(to_radians(operand).tan()),
            Self::Log10 => {
                if operand <= 0.0 {
                    return Err(domain_error);
                }
                Ok(operand.log10())
            }
            Self::Ln => {
                if operand <= 0.0 {
                    return Err(domain_error);
                }
                Ok(operand.ln())
            }
            Self::Sqrt => {
                if operand < 0.0 {
                    return Err(domain_error);
                }
                Ok(operand.sqrt())
            }
            Self::Square => Ok(operand.powi(2)),
        }
    }

    /// Short lowercase name, as typed on the keypad.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "sqr",
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computed as `degrees × (π / 180)`; the factor is folded first.
fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}
