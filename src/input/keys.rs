//! Key token parsing.
//!
//! A key token is what one key press or button click produces: a single
//! character (`7`, `.`, `+`, `=`) or a named key (`Enter`, `Backspace`,
//! `sqrt`).

use crate::calculator::{BinaryOperation, UnaryFunction};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    /// Matches one key token: `log10`, a word of letters (which may end in
    /// `²` or `ʸ`), or any single non-space character. Digits never join a
    /// word, so `sqrt9` is `sqrt` followed by `9`.
    static ref KEY_TOKEN: Regex = Regex::new(r"log10|[A-Za-z][A-Za-z²ʸ]*|\S").unwrap();
}

/// A command for the calculator session, decoded from one key token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    Operation(BinaryOperation),
    Function(UnaryFunction),
    Compute,
    Clear,
    Delete,
    /// Switch between basic and scientific keypads.
    ToggleMode,
}

/// A key token that does not map to any command.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown key '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for KeyCommand {
    type Err = UnknownKey;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(command) = Self::from_char(c)
        {
            return Ok(command);
        }

        let command = match token.to_lowercase().as_str() {
            "enter" | "return" => Self::Compute,
            "escape" | "esc" | "ac" => Self::Clear,
            "backspace" | "del" | "delete" => Self::Delete,
            "mode" | "tab" => Self::ToggleMode,
            "pow" | "xʸ" => Self::Operation(BinaryOperation::Power),
            "sin" => Self::Function(UnaryFunction::Sin),
            "cos" => Self::Function(UnaryFunction::Cos),
            "tan" => Self::Function(UnaryFunction::Tan),
            "log" | "log10" => Self::Function(UnaryFunction::Log10),
            "ln" => Self::Function(UnaryFunction::Ln),
            "sqrt" | "√" => Self::Function(UnaryFunction::Sqrt),
            "sqr" | "pow2" | "x²" => Self::Function(UnaryFunction::Square),
            _ => return Err(UnknownKey(token.to_string())),
        };

        Ok(command)
    }
}

impl KeyCommand {
    /// Decode a single-character key.
    fn from_char(c: char) -> Option<Self> {
        let command = match c {
            '0'..='9' | '.' => Self::Digit(c),
            '+' => Self::Operation(BinaryOperation::Add),
            '-' | '−' => Self::Operation(BinaryOperation::Subtract),
            '*' | '×' => Self::Operation(BinaryOperation::Multiply),
            '/' | '÷' => Self::Operation(BinaryOperation::Divide),
            '^' => Self::Operation(BinaryOperation::Power),
            '=' => Self::Compute,
            _ => return None,
        };
        Some(command)
    }
}

/// Split a line of terminal input into key tokens.
///
/// Digits and operators need no spaces between them: `12+3=` yields
/// `1`, `2`, `+`, `3`, `=`. Named keys are separated from each other by
/// whitespace, digits or any other non-letter character.
pub fn tokenize(line: &str) -> Vec<&str> {
    KEY_TOKEN.find_iter(line).map(|m| m.as_str()).collect()
}
