//! Key-set validation of a pack against the default pack.
//!
//! A missing key is not an error: resolution falls back per message. These
//! warnings exist for tooling that reports translation coverage.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::types::{LocaleCode, LocalePack};

/// A difference between a pack and the default pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PackWarning {
    /// Key present in the default pack but not translated.
    MissingKey { locale: LocaleCode, key: String },

    /// Key present in the pack but unknown to the default pack.
    UnknownKey { locale: LocaleCode, key: String },

    /// The pack's template uses different placeholder indices.
    PlaceholderMismatch {
        locale: LocaleCode,
        key: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}

impl PackWarning {
    pub fn locale(&self) -> &LocaleCode {
        match self {
            PackWarning::MissingKey { locale, .. }
            | PackWarning::UnknownKey { locale, .. }
            | PackWarning::PlaceholderMismatch { locale, .. } => locale,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            PackWarning::MissingKey { key, .. }
            | PackWarning::UnknownKey { key, .. }
            | PackWarning::PlaceholderMismatch { key, .. } => key,
        }
    }
}

impl Display for PackWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PackWarning::MissingKey { locale, key } => {
                write!(f, "{locale}: '{key}' is not translated")
            }
            PackWarning::UnknownKey { locale, key } => {
                write!(f, "{locale}: '{key}' does not exist in the default pack")
            }
            PackWarning::PlaceholderMismatch {
                locale,
                key,
                expected,
                found,
            } => write!(
                f,
                "{locale}: '{key}' uses placeholders {found:?}, default uses {expected:?}"
            ),
        }
    }
}

/// Compare `target` against `reference`. Warnings are sorted by key.
pub fn compare_packs(reference: &LocalePack, target: &LocalePack) -> Vec<PackWarning> {
    let locale = target.code();
    let mut warnings = Vec::new();

    for (key, expected_template) in reference.messages() {
        let Some(found_template) = target.template(key) else {
            warnings.push(PackWarning::MissingKey {
                locale: locale.clone(),
                key: key.to_string(),
            });
            continue;
        };

        let expected = expected_template.placeholder_indices();
        let found = found_template.placeholder_indices();
        if expected != found {
            warnings.push(PackWarning::PlaceholderMismatch {
                locale: locale.clone(),
                key: key.to_string(),
                expected: expected.into_iter().collect(),
                found: found.into_iter().collect(),
            });
        }
    }

    warnings.extend(
        target
            .keys()
            .filter(|key| !reference.contains_key(key))
            .map(|key| PackWarning::UnknownKey {
                locale: locale.clone(),
                key: key.to_string(),
            }),
    );

    warnings.sort_by(|a, b| a.key().cmp(b.key()));
    warnings
}
