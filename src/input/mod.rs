//! Input adapter turning key presses into calculator commands.
//!
//! This module provides functionality to:
//! - Split a line of terminal input into key tokens
//! - Decode each key token into a [`KeyCommand`]

mod keys;

pub use keys::{KeyCommand, UnknownKey, tokenize};
