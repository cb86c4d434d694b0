//! Two-line calculator display.
//!
//! The presenter renders the engine state into a previous line (left operand
//! and pending operator) and a current line (operand being typed or result).

use super::format::format_operand;
use crate::calculator::CalculatorState;
use serde::Serialize;
use std::fmt;

/// The rendered text of both display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    /// Previous operand and operator glyph; empty when nothing is pending.
    pub previous: String,
    /// Current operand, `0` when nothing has been typed.
    pub current: String,
    /// Whether the current line shows an error.
    pub error: bool,
}

impl fmt::Display for DisplayLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}

/// Renders [`CalculatorState`] into [`DisplayLines`].
#[derive(Clone, Copy, Debug)]
pub struct Presenter {
    group_digits: bool,
}

impl Default for Presenter {
    fn default() -> Self {
        Self { group_digits: true }
    }
}

impl Presenter {
    pub fn new(group_digits: bool) -> Self {
        Self { group_digits }
    }

    pub fn render(&self, state: &CalculatorState) -> DisplayLines {
        let current = if state.current_operand().is_empty() {
            "0".to_string()
        } else {
            format_operand(state.current_operand(), self.group_digits)
        };

        let previous = match state.pending_operation() {
            Some(operation) => format!(
                "{} {}",
                format_operand(state.previous_operand(), self.group_digits),
                operation.glyph()
            ),
            None => String::new(),
        };

        DisplayLines {
            previous,
            current,
            error: state.is_error(),
        }
    }
}
