//! Errors surfaced by the command layer. The tree itself never fails: a missing key is just
//! `None`.

use std::num::{ParseFloatError, ParseIntError};

/// Why a command line could not be turned into a [`Command`][crate::command::Command].
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CommandError {
    /// The line had no command name.
    #[error("missing command name")]
    Empty,
    /// The command name isn't one we know.
    #[error("unknown command `{0}`")]
    Unknown(String),
    /// The command got the wrong number of fields.
    #[error("`{command}` takes {expected} field(s), found {found}")]
    Arity {
        /// The command name.
        command: &'static str,
        /// Fields required after the name.
        expected: usize,
        /// Fields actually present after the name.
        found: usize,
    },
    /// A required text field was empty.
    #[error("field `{0}` is empty")]
    EmptyField(&'static str),
    /// A field that should hold an integer didn't.
    #[error("field `{field}` is not an integer: `{value}` ({source})")]
    Integer {
        /// Which field.
        field: &'static str,
        /// The offending text.
        value: String,
        /// What the integer parser said.
        source: ParseIntError,
    },
    /// A field that should hold a number didn't.
    #[error("field `{field}` is not a number: `{value}` ({source})")]
    Float {
        /// Which field.
        field: &'static str,
        /// The offending text.
        value: String,
        /// What the float parser said.
        source: ParseFloatError,
    },
}

/// Failures that stop the interpreter.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading commands or writing results failed.
    #[error("I/O error (error: {0})")]
    Io(#[from] std::io::Error),
}
