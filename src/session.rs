//! Calculator session: one engine, its keypad mode and its display.

use crate::calculator::{CalculatorEngine, CalculatorState, Outcome};
use crate::input::KeyCommand;
use crate::ui::{DisplayLines, Presenter};
use serde::Serialize;
use tracing::debug;

/// Which keypad is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Basic,
    /// Basic keys plus the function row (trig, logarithms, roots).
    Scientific,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Basic => Self::Scientific,
            Self::Scientific => Self::Basic,
        }
    }
}

/// What the front end gets back after each command.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub display: DisplayLines,
}

/// Serializable view of a session, for JSON output.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub state: &'a CalculatorState,
    pub display: DisplayLines,
}

/// Owns the engine and re-renders the display after every command.
#[derive(Clone, Debug, Default)]
pub struct Session {
    engine: CalculatorEngine,
    presenter: Presenter,
    mode: Mode,
}

impl Session {
    pub fn new(mode: Mode, presenter: Presenter) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            presenter,
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &CalculatorState {
        self.engine.state()
    }

    pub fn display(&self) -> DisplayLines {
        self.presenter.render(self.engine.state())
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            state: self.engine.state(),
            display: self.display(),
        }
    }

    /// Run one command, then render.
    ///
    /// Function keys only exist on the scientific keypad; in basic mode they
    /// are ignored.
    pub fn handle(&mut self, command: KeyCommand) -> Feedback {
        debug!(?command, mode = ?self.mode, "handling key");

        let outcome = match command {
            KeyCommand::Digit(c) => self.engine.append_digit(c),
            KeyCommand::Operation(operation) => self.engine.choose_operation(operation),
            KeyCommand::Compute => self.engine.compute(),
            KeyCommand::Clear => self.engine.clear(),
            KeyCommand::Delete => self.engine.delete(),
            KeyCommand::Function(function) => match self.mode {
                Mode::Scientific => self.engine.apply_unary_function(function),
                Mode::Basic => {
                    debug!(%function, "function key ignored in basic mode");
                    Outcome::Ignored
                }
            },
            KeyCommand::ToggleMode => {
                self.mode = self.mode.toggled();
                Outcome::Applied
            }
        };

        Feedback {
            outcome,
            display: self.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{BinaryOperation, CalcError, UnaryFunction};

    fn press(session: &mut Session, keys: &[KeyCommand]) -> Feedback {
        let mut last = None;
        for &key in keys {
            last = Some(session.handle(key));
        }
        last.unwrap()
    }

    #[test]
    fn test_display_follows_every_command() {
        let mut session = Session::default();
        let feedback = session.handle(KeyCommand::Digit('4'));
        assert_eq!(feedback.display.current, "4");

        let feedback = session.handle(KeyCommand::Operation(BinaryOperation::Add));
        assert_eq!(feedback.display.previous, "4 +");
        assert_eq!(feedback.display.current, "0");
    }

    #[test]
    fn test_functions_need_scientific_mode() {
        let mut session = Session::default();
        let sqrt = KeyCommand::Function(UnaryFunction::Sqrt);

        let feedback = press(&mut session, &[KeyCommand::Digit('9'), sqrt]);
        assert_eq!(feedback.outcome, Outcome::Ignored);
        assert_eq!(feedback.display.current, "9");

        let feedback = press(&mut session, &[KeyCommand::ToggleMode, sqrt]);
        assert_eq!(session.mode(), Mode::Scientific);
        assert_eq!(feedback.outcome, Outcome::Applied);
        assert_eq!(feedback.display.current, "3");
    }

    #[test]
    fn test_toggle_mode_leaves_engine_alone() {
        let mut session = Session::new(Mode::Scientific, Presenter::default());
        press(&mut session, &[KeyCommand::Digit('1'), KeyCommand::Digit('2')]);
        let before = session.state().clone();
        session.handle(KeyCommand::ToggleMode);
        assert_eq!(session.mode(), Mode::Basic);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_error_feedback() {
        let mut session = Session::default();
        let feedback = press(
            &mut session,
            &[
                KeyCommand::Digit('5'),
                KeyCommand::Operation(BinaryOperation::Divide),
                KeyCommand::Digit('0'),
                KeyCommand::Compute,
            ],
        );
        assert_eq!(feedback.outcome, Outcome::Failed(CalcError::DivideByZero));
        assert!(feedback.display.error);
        assert_eq!(feedback.display.current, "Error");

        let feedback = session.handle(KeyCommand::Clear);
        assert_eq!(feedback.display.current, "0");
        assert!(!feedback.display.error);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = Session::default();
        press(
            &mut session,
            &[
                KeyCommand::Digit('2'),
                KeyCommand::Operation(BinaryOperation::Power),
            ],
        );
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["mode"], "basic");
        assert_eq!(json["state"]["previous_operand"], "2");
        assert_eq!(json["state"]["pending_operation"], "power");
        assert_eq!(json["display"]["previous"], "2 ^");
    }
}
