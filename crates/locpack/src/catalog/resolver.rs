//! Message resolution over a frozen pack store.

use std::collections::BTreeSet;

use crate::catalog::diagnostic::Diagnostic;
use crate::catalog::error::StoreError;
use crate::catalog::fallback::FallbackStage;
use crate::catalog::format::render;
use crate::catalog::store::PackStore;
use crate::catalog::validate::{PackWarning, compare_packs};
use crate::parser::Template;
use crate::types::{LocaleCode, LocaleInfo, LocalePack, Value};

/// Turns `(locale, key, args)` into display text.
///
/// A resolver owns a frozen [`PackStore`] and has no mutating methods, so it
/// can be shared across threads behind an `Arc` without locking.
/// Resolution never fails: gaps in the packs degrade to the default
/// locale's text and then to the key itself.
///
/// # Example
///
/// ```
/// use locpack::{PackStore, args};
///
/// let resolver = PackStore::builtin().unwrap().into_resolver().unwrap();
///
/// assert_eq!(
///     resolver.resolve("en", "status.processing", &args![3, 10, "30%"]),
///     "Processing: 3/10 (30%)"
/// );
/// assert_eq!(resolver.resolve("zh-Hans", "ui.cancel", &[]), "取消");
/// assert_eq!(resolver.resolve("en", "no.such.key", &[]), "no.such.key");
/// ```
#[derive(Debug)]
pub struct Resolver {
    store: PackStore,
}

/// Result of [`Resolver::resolve_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Fully substituted text.
    pub text: String,
    /// Stage of the fallback chain that supplied the template.
    pub stage: FallbackStage,
    /// Recovered conditions raised along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolver {
    pub(crate) fn new(store: PackStore) -> Self {
        Resolver { store }
    }

    pub fn store(&self) -> &PackStore {
        &self.store
    }

    pub fn default_locale(&self) -> &LocaleCode {
        self.store.default_locale()
    }

    /// Pack metadata for an explicit locale request.
    pub fn get(&self, code: &str) -> Result<&LocalePack, StoreError> {
        self.store.get(code)
    }

    pub fn contains_locale(&self, code: &str) -> bool {
        self.store.contains(code)
    }

    /// Listing for a language-selection UI, in registration order.
    pub fn list_locales(&self) -> impl Iterator<Item = LocaleInfo> + '_ {
        self.store.list_locales()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve and format a message, logging any diagnostics.
    pub fn resolve(&self, locale: &str, key: &str, args: &[Value]) -> String {
        let resolution = self.resolve_detailed(locale, key, args);
        for diagnostic in &resolution.diagnostics {
            diagnostic.emit();
        }
        resolution.text
    }

    /// Resolve and format a message, returning diagnostics instead of
    /// logging them.
    pub fn resolve_detailed(&self, locale: &str, key: &str, args: &[Value]) -> Resolution {
        let (stage, template) = self.select(locale, key);
        let mut diagnostics: Vec<Diagnostic> =
            self.fallback_diagnostic(stage, locale, key).into_iter().collect();

        let rendered = match template {
            Some(template) => render(template, args),
            None => render(&Template::parse(key), args),
        };

        let unmatched: BTreeSet<usize> = rendered.unmatched.into_iter().collect();
        diagnostics.extend(unmatched.into_iter().map(|index| {
            Diagnostic::PlaceholderIndexOutOfRange {
                key: key.to_string(),
                index,
                supplied: args.len(),
            }
        }));

        Resolution {
            text: rendered.text,
            stage,
            diagnostics,
        }
    }

    /// The unformatted template text for a key, with the same fallback
    /// chain as [`Resolver::resolve`].
    pub fn message(&self, locale: &str, key: &str) -> String {
        self.message_or(locale, key, key)
    }

    /// Like [`Resolver::message`], but `default` replaces the raw key when
    /// no pack has the message.
    pub fn message_or(&self, locale: &str, key: &str, default: &str) -> String {
        let (stage, template) = self.select(locale, key);
        if let Some(diagnostic) = self.fallback_diagnostic(stage, locale, key) {
            diagnostic.emit();
        }
        template.map_or_else(|| default.to_string(), |t| t.source().to_string())
    }

    /// Walk the fallback chain, stopping at the first stage with a template.
    fn select(&self, locale: &str, key: &str) -> (FallbackStage, Option<&Template>) {
        let mut stage = FallbackStage::FIRST;
        loop {
            let found = match stage {
                FallbackStage::ExactLocale => {
                    self.store.find(locale).and_then(|pack| pack.template(key))
                }
                FallbackStage::DefaultLocale if locale == self.default_locale().as_str() => None,
                FallbackStage::DefaultLocale => self
                    .store
                    .find(self.default_locale().as_str())
                    .and_then(|pack| pack.template(key)),
                FallbackStage::RawKey => return (stage, None),
            };

            if found.is_some() {
                return (stage, found);
            }
            let Some(next) = stage.next() else {
                return (stage, None);
            };
            stage = next;
        }
    }

    fn fallback_diagnostic(
        &self,
        stage: FallbackStage,
        locale: &str,
        key: &str,
    ) -> Option<Diagnostic> {
        match stage {
            FallbackStage::ExactLocale => None,
            FallbackStage::DefaultLocale => Some(Diagnostic::MissingTranslation {
                locale: locale.to_string(),
                key: key.to_string(),
                default_locale: self.default_locale().clone(),
            }),
            FallbackStage::RawKey => Some(Diagnostic::MissingKey {
                locale: locale.to_string(),
                key: key.to_string(),
            }),
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Compare one pack's key set and placeholders against the default pack.
    pub fn validate(&self, target: &str) -> Result<Vec<PackWarning>, StoreError> {
        let reference = self.store.get(self.default_locale().as_str())?;
        let target = self.store.get(target)?;
        Ok(compare_packs(reference, target))
    }

    /// Validate every non-default pack, in registration order.
    pub fn validate_all(&self) -> Vec<PackWarning> {
        let Some(reference) = self.store.find(self.default_locale().as_str()) else {
            return Vec::new();
        };
        self.store
            .packs()
            .filter(|pack| pack.code() != reference.code())
            .flat_map(|pack| compare_packs(reference, pack))
            .collect()
    }
}
