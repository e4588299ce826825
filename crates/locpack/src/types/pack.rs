use std::collections::BTreeMap;

use bon::Builder;
use serde::Serialize;

use super::LocaleCode;
use crate::parser::{PackDocument, Template};

/// One language's translation set: metadata plus message templates.
///
/// Packs are immutable once built. The store hands them out behind an
/// `Arc`, so every reader sees the same templates for the lifetime of the
/// process.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use locpack::LocalePack;
/// use locpack::parser::Template;
///
/// let pack = LocalePack::builder()
///     .code("en")
///     .display_name("English")
///     .messages(BTreeMap::from([
///         ("status.ready".to_string(), Template::parse("Ready")),
///     ]))
///     .build();
///
/// assert_eq!(pack.code().as_str(), "en");
/// assert_eq!(pack.html_lang(), "en");
/// assert_eq!(pack.template("status.ready").map(Template::source), Some("Ready"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct LocalePack {
    #[builder(into)]
    code: LocaleCode,

    /// Name of the language in the reference language, e.g. "Chinese (Simplified)".
    #[builder(into)]
    display_name: String,

    /// Name of the language written in itself. Absent for the reference pack.
    #[builder(into)]
    localized_display_name: Option<String>,

    /// Tag for presentation metadata; the locale code when unset.
    #[builder(into)]
    html_lang: Option<String>,

    #[builder(default)]
    messages: BTreeMap<String, Template>,
}

impl LocalePack {
    /// Build a pack from a parsed pack file.
    pub fn from_document(code: impl Into<LocaleCode>, document: PackDocument) -> Self {
        let messages = document
            .messages
            .into_iter()
            .map(|entry| (entry.key, entry.template))
            .collect();

        LocalePack {
            code: code.into(),
            display_name: document.display_name,
            localized_display_name: document.localized_display_name,
            html_lang: document.html_lang,
            messages,
        }
    }

    pub fn code(&self) -> &LocaleCode {
        &self.code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn localized_display_name(&self) -> Option<&str> {
        self.localized_display_name.as_deref()
    }

    pub fn html_lang(&self) -> &str {
        self.html_lang.as_deref().unwrap_or(self.code.as_str())
    }

    /// Look up the template for a message key.
    pub fn template(&self, key: &str) -> Option<&Template> {
        self.messages.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Message keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// `(key, template)` pairs in sorted key order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.messages.iter().map(|(key, template)| (key.as_str(), template))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The listing tuple for a language-selection menu.
    pub fn info(&self) -> LocaleInfo {
        LocaleInfo {
            code: self.code.clone(),
            name: self.display_name.clone(),
            localized_name: self.localized_display_name.clone(),
        }
    }
}

/// Entry of a language-selection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
    pub code: LocaleCode,
    pub name: String,
    pub localized_name: Option<String>,
}

impl LocaleInfo {
    /// Label for a menu: the self-name when present, else the reference name.
    pub fn label(&self) -> &str {
        self.localized_name.as_deref().unwrap_or(&self.name)
    }
}
