//! Error types for pack loading and store access.

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::types::LocaleCode;

/// Structural errors raised by the pack store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A pack with this code is already registered.
    #[error("locale '{code}' is already registered")]
    DuplicateLocale { code: LocaleCode },

    /// No pack with this code is registered.
    #[error("unknown locale '{code}'{}", format_suggestions(suggestions))]
    UnknownLocale {
        code: String,
        suggestions: Vec<String>,
    },
}

/// Errors that occur while loading packs into a store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a pack file or directory.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The configured default locale was never registered.
    #[error("default locale '{code}' is not registered")]
    MissingDefaultLocale { code: LocaleCode },
}

impl LoadError {
    /// Attach a path to a parse error. String-loaded packs use `<code>`.
    pub(crate) fn from_parse(path: &Path, error: ParseError) -> Self {
        let (line, column) = error.position().unwrap_or((0, 0));
        let message = match error {
            ParseError::Syntax { message, .. } => message,
            ParseError::UnexpectedEof { .. } => "unexpected end of file".to_string(),
            other @ (ParseError::DuplicateKey { .. }
            | ParseError::MissingMetadata { .. }
            | ParseError::NullValue { .. }) => other.to_string(),
        };
        LoadError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            message,
        }
    }
}

/// Compute typo suggestions for an unknown name.
///
/// - Max distance 1 for names of 3 characters or fewer, 2 otherwise
/// - Limit to 3 suggestions, sorted by distance
pub(crate) fn compute_suggestions<'a>(
    name: &str,
    available: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

fn format_suggestions(suggestions: &[String]) -> String {
    let mut out = String::new();
    if !suggestions.is_empty() {
        let _ = write!(out, ", did you mean: {}?", suggestions.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_prefer_closest_codes() {
        let codes = ["en", "zh-Hans", "zh-Hant", "de"];
        let suggestions = compute_suggestions("zh-hans", codes.iter().copied());
        assert_eq!(suggestions, vec!["zh-Hans".to_string(), "zh-Hant".to_string()]);
    }

    #[test]
    fn short_codes_allow_one_edit() {
        let suggestions = compute_suggestions("eo", ["en", "de"].iter().copied());
        assert_eq!(suggestions, vec!["en".to_string()]);
    }

    #[test]
    fn unknown_locale_message_lists_suggestions() {
        let error = StoreError::UnknownLocale {
            code: "enn".to_string(),
            suggestions: vec!["en".to_string()],
        };
        assert_eq!(error.to_string(), "unknown locale 'enn', did you mean: en?");
    }
}
