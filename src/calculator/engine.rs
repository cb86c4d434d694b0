//! The calculator state machine.
//!
//! Every keypad action is a method on [`CalculatorEngine`]. Binary
//! operations are evaluated immediately and left to right: choosing a new
//! operator while one is pending collapses the pending one first.

use super::error::{CalcError, Outcome};
use super::number::{format_number, parse_operand, round_result};
use super::operation::{BinaryOperation, UnaryFunction};
use serde::Serialize;
use tracing::{debug, warn};

/// Operand text shown after an arithmetic error.
pub const ERROR_MARKER: &str = "Error";

/// The arithmetic state read by the presenter after every operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    pending_operation: Option<BinaryOperation>,
    should_reset_on_next_input: bool,
}

impl CalculatorState {
    /// Operand being typed, or the latest result. Empty means nothing typed.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Left-hand operand of the pending operation. Empty when none is pending.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn pending_operation(&self) -> Option<BinaryOperation> {
        self.pending_operation
    }

    /// Whether the next digit starts a fresh operand.
    pub fn should_reset_on_next_input(&self) -> bool {
        self.should_reset_on_next_input
    }

    /// Check if the state is showing an error.
    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_MARKER
    }
}

/// Owns a [`CalculatorState`] and applies keypad operations to it.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Reset everything to the initial empty state.
    pub fn clear(&mut self) -> Outcome {
        self.state = CalculatorState::default();
        Outcome::Applied
    }

    /// Backspace.
    ///
    /// Right after a result this discards the whole result, like
    /// [`clear`](Self::clear). Otherwise the last typed character is removed.
    pub fn delete(&mut self) -> Outcome {
        if self.state.should_reset_on_next_input {
            return self.clear();
        }

        match self.state.current_operand.pop() {
            Some(_) => Outcome::Applied,
            None => Outcome::Ignored,
        }
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// A second decimal point in the same operand is ignored. Other
    /// characters are not validated.
    pub fn append_digit(&mut self, token: char) -> Outcome {
        if self.state.should_reset_on_next_input {
            self.state.current_operand.clear();
            self.state.should_reset_on_next_input = false;
        }

        if token == '.' && self.state.current_operand.contains('.') {
            return Outcome::Ignored;
        }

        self.state.current_operand.push(token);
        Outcome::Applied
    }

    /// Select a binary operation, using the current operand as its left side.
    ///
    /// Does nothing until at least one digit has been entered. A pending
    /// operation is computed first.
    pub fn choose_operation(&mut self, operation: BinaryOperation) -> Outcome {
        if self.state.current_operand.is_empty() {
            return Outcome::Ignored;
        }

        let mut outcome = Outcome::Applied;
        if !self.state.previous_operand.is_empty()
            && let failed @ Outcome::Failed(_) = self.compute()
        {
            outcome = failed;
        }

        self.state.pending_operation = Some(operation);
        self.state.previous_operand = std::mem::take(&mut self.state.current_operand);
        outcome
    }

    /// Evaluate the pending operation.
    ///
    /// Ignored when either operand does not parse or nothing is pending.
    pub fn compute(&mut self) -> Outcome {
        let (Some(prev), Some(current)) = (
            parse_operand(&self.state.previous_operand),
            parse_operand(&self.state.current_operand),
        ) else {
            return Outcome::Ignored;
        };

        let Some(operation) = self.state.pending_operation else {
            return Outcome::Ignored;
        };

        match operation.apply(prev, current) {
            Ok(value) => {
                debug!(%prev, %operation, %current, %value, "computed");
                self.store_result(value);
                self.state.pending_operation = None;
                self.state.previous_operand.clear();
                Outcome::Applied
            }
            Err(err) => self.fail(err),
        }
    }

    /// Apply a scientific function to the current operand only.
    ///
    /// Pending operation state is left alone, so a function can rewrite the
    /// right-hand operand before [`compute`](Self::compute).
    pub fn apply_unary_function(&mut self, function: UnaryFunction) -> Outcome {
        let Some(operand) = parse_operand(&self.state.current_operand) else {
            return Outcome::Ignored;
        };

        match function.apply(operand) {
            Ok(value) => {
                debug!(%function, %operand, %value, "applied function");
                self.store_result(value);
                Outcome::Applied
            }
            Err(err) => self.fail(err),
        }
    }

    fn store_result(&mut self, value: f64) {
        self.state.current_operand = format_number(round_result(value));
        self.state.should_reset_on_next_input = true;
    }

    fn fail(&mut self, err: CalcError) -> Outcome {
        warn!(error = %err, "calculation failed");
        self.state = CalculatorState {
            current_operand: ERROR_MARKER.to_string(),
            previous_operand: String::new(),
            pending_operation: None,
            should_reset_on_next_input: true,
        };
        Outcome::Failed(err)
    }
}
