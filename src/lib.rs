//! Keypad calculator with basic and scientific modes.
//!
//! The [`calculator`] module holds the state machine. Everything else is a
//! front end for it: [`input`] decodes key tokens, [`ui`] renders the
//! two-line display, [`session`] ties one engine to a keypad mode, and
//! [`terminal`] drives a session from text input.

pub mod calculator;
pub mod config;
pub mod input;
pub mod session;
pub mod terminal;
pub mod ui;
