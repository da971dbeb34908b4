use thiserror::Error;

/// PropTerm unified error type
#[derive(Error, Debug)]
pub enum PropTermError {
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Invalid baud rate: {0}")]
    InvalidBaudRate(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type PropTermResult<T> = Result<T, PropTermError>;
