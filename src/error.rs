use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pnm operations
#[derive(Error, Diagnostic, Debug)]
pub enum PnmError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} grid")]
    #[diagnostic(code(pnm::bounds))]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(pnm::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pnm::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pnm::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pnm::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PnmError {
    /// Shorthand for a parse error without help text.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        PnmError::Parse {
            message: message.into(),
            help: None,
        }
    }

    /// Shorthand for a validation error without help text.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        PnmError::Validation {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PnmError>;
