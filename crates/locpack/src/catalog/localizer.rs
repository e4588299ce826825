//! Active-locale handle for a UI.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::resolver::Resolver;
use crate::types::{LocaleCode, LocaleInfo, Value};

/// A resolver paired with the locale currently selected by the user.
///
/// Selecting an unregistered locale falls back to the default locale rather
/// than failing, so a stale saved preference never leaves the UI without
/// text. Storing the preference is up to the caller.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use locpack::{Localizer, PackStore};
///
/// let resolver = Arc::new(PackStore::builtin().unwrap().into_resolver().unwrap());
/// let mut localizer = Localizer::new(resolver, "zh-Hans");
/// assert_eq!(localizer.text("ui.menu.file", &[]), "文件");
///
/// localizer.cycle_locale();
/// assert_eq!(localizer.locale().as_str(), "en");
/// assert_eq!(localizer.text("ui.menu.file", &[]), "File");
/// ```
#[derive(Debug, Clone)]
pub struct Localizer {
    resolver: Arc<Resolver>,
    active: LocaleCode,
}

impl Localizer {
    /// Create a localizer with `locale` selected (or the default locale if
    /// `locale` is not registered).
    pub fn new(resolver: Arc<Resolver>, locale: &str) -> Self {
        let active = resolver.default_locale().clone();
        let mut localizer = Localizer { resolver, active };
        localizer.set_locale(locale);
        localizer
    }

    pub fn locale(&self) -> &LocaleCode {
        &self.active
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Metadata of the active locale.
    pub fn info(&self) -> Option<LocaleInfo> {
        self.resolver
            .get(self.active.as_str())
            .ok()
            .map(|pack| pack.info())
    }

    /// Select a locale, returning the code actually selected.
    pub fn set_locale(&mut self, code: &str) -> &LocaleCode {
        if self.resolver.contains_locale(code) {
            self.active = LocaleCode::new(code);
        } else {
            let fallback = self.resolver.default_locale();
            warn!(requested = code, %fallback, "locale not found, falling back");
            self.active = fallback.clone();
        }
        &self.active
    }

    /// Advance to the next locale in registration order, wrapping around.
    pub fn cycle_locale(&mut self) -> &LocaleCode {
        let codes: Vec<&LocaleCode> = self.resolver.store().codes().collect();
        let next = codes
            .iter()
            .position(|code| **code == self.active)
            .map_or(0, |i| (i + 1) % codes.len());

        if let Some(code) = codes.get(next) {
            let code = (*code).clone();
            info!(from = %self.active, to = %code, "switched locale");
            self.active = code;
        }
        &self.active
    }

    /// Resolve and format a message in the active locale.
    pub fn text(&self, key: &str, args: &[Value]) -> String {
        self.resolver.resolve(self.active.as_str(), key, args)
    }

    /// Unformatted template text in the active locale.
    pub fn message(&self, key: &str) -> String {
        self.resolver.message(self.active.as_str(), key)
    }
}
