//! Parse error types for pack files.

use thiserror::Error;

/// An error that occurred while parsing a pack file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input, e.g. an unterminated string.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// The same key appears twice in one pack.
    #[error("duplicate key '{key}' at {line}:{column}")]
    DuplicateKey {
        key: String,
        line: usize,
        column: usize,
    },

    /// A required metadata key is absent.
    #[error("missing required metadata key '{key}'")]
    MissingMetadata { key: String },

    /// `null` used for a key that must hold text.
    #[error("key '{key}' at {line}:{column} must be a string, found null")]
    NullValue {
        key: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    /// Location of the error, when it has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column }
            | ParseError::DuplicateKey { line, column, .. }
            | ParseError::NullValue { line, column, .. } => Some((*line, *column)),
            ParseError::MissingMetadata { .. } => None,
        }
    }
}
