//! Calculator module holding the keypad state machine.
//!
//! This module provides:
//! - The engine and the state it exposes to renderers
//! - Binary operations and scientific functions
//! - Operand parsing, rounding and result formatting

mod engine;
mod error;
mod number;
mod operation;

pub use engine::{CalculatorEngine, CalculatorState, ERROR_MARKER};
pub use error::{CalcError, Outcome};
pub use number::{format_number, parse_operand, round_result};
pub use operation::{BinaryOperation, UnaryFunction};
