use std::io;

use thiserror::Error;

pub const INVALID_INPUT_MESSAGE: &str = "invalid input: hours 0-23, minutes 0-59";

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, CalcError>;
