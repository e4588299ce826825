//! Recovered conditions raised while resolving a message.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use tracing::{debug, warn};

use crate::types::LocaleCode;

/// A non-fatal event raised during resolution.
///
/// None of these reach the caller as an error; the resolver still returns
/// displayable text. They are logged through `tracing` by
/// [`Resolver::resolve`](crate::Resolver::resolve) and returned as data by
/// [`Resolver::resolve_detailed`](crate::Resolver::resolve_detailed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The requested locale lacks the key; the default locale's text was used.
    MissingTranslation {
        locale: String,
        key: String,
        default_locale: LocaleCode,
    },

    /// No pack has the key; the key itself was displayed.
    MissingKey { locale: String, key: String },

    /// A `{n}` placeholder had no matching argument and was left as is.
    PlaceholderIndexOutOfRange {
        key: String,
        index: usize,
        supplied: usize,
    },
}

impl Diagnostic {
    /// Log this diagnostic. Missing text is a warning; argument mismatches
    /// are usually deliberate partial formatting and logged at debug.
    pub fn emit(&self) {
        match self {
            Diagnostic::MissingTranslation {
                locale,
                key,
                default_locale,
            } => warn!(%locale, %key, %default_locale, "missing translation, using default locale"),
            Diagnostic::MissingKey { locale, key } => {
                warn!(%locale, %key, "missing message key, displaying key")
            }
            Diagnostic::PlaceholderIndexOutOfRange {
                key,
                index,
                supplied,
            } => debug!(%key, index, supplied, "placeholder left unsubstituted"),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Diagnostic::MissingTranslation {
                locale,
                key,
                default_locale,
            } => write!(
                f,
                "'{key}' is not translated for '{locale}', using '{default_locale}'"
            ),
            Diagnostic::MissingKey { locale, key } => {
                write!(f, "'{key}' is not defined in any pack (requested '{locale}')")
            }
            Diagnostic::PlaceholderIndexOutOfRange {
                key,
                index,
                supplied,
            } => write!(
                f,
                "'{key}' references {{{index}}} but only {supplied} argument(s) were supplied"
            ),
        }
    }
}
