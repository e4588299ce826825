//! Public AST types for pack files and message templates.
//!
//! These types are public so external tooling (the CLI, linters) can work
//! on parsed packs without going through the store.

use std::collections::BTreeSet;

use super::template::parse_template;

/// A parsed message template.
///
/// Keeps the original source next to its segments so a template can be
/// shown verbatim (e.g. by `message()`), while rendering walks the segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including any braces that are not placeholders.
    Literal(String),
    /// A positional placeholder `{n}`, holding the zero-based index `n`.
    Placeholder(usize),
}

impl Template {
    /// Parse template text. Never fails: anything that is not a
    /// well-formed `{n}` placeholder is kept as literal text.
    pub fn parse(source: &str) -> Template {
        parse_template(source)
    }

    pub(crate) fn from_parts(source: &str, segments: Vec<Segment>) -> Template {
        Template {
            source: source.to_string(),
            segments,
        }
    }

    /// The template text exactly as it appeared in the pack.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct placeholder indices referenced by this template.
    pub fn placeholder_indices(&self) -> BTreeSet<usize> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(index) => Some(*index),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Placeholder(_)))
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::parse(source)
    }
}

/// A parsed pack file, before it is bound to a locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDocument {
    /// Value of the `languageName` metadata key.
    pub display_name: String,
    /// Value of the `localizedLanguageName` metadata key; `null` maps to `None`.
    pub localized_display_name: Option<String>,
    /// Value of the `htmlLang` metadata key, if present.
    pub html_lang: Option<String>,
    /// Message entries in file order.
    pub messages: Vec<MessageEntry>,
}

/// A single `'key': 'template'` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub key: String,
    pub template: Template,
    /// 1-based line of the key.
    pub line: usize,
    /// 1-based column of the key.
    pub column: usize,
}
