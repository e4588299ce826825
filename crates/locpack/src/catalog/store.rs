//! The locale pack store.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, info};

use crate::builtin::BUILTIN_PACKS;
use crate::catalog::error::{LoadError, StoreError, compute_suggestions};
use crate::catalog::resolver::Resolver;
use crate::parser::parse_pack_file;
use crate::types::{LocaleCode, LocaleInfo, LocalePack};

/// Locale code used as the fallback when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// File extensions recognised by [`PackStore::load_dir`].
pub const PACK_EXTENSIONS: &[&str] = &["js", "pack"];

/// Owns the set of loaded locale packs.
///
/// The store is the loading phase: packs are registered with `&mut self`
/// and then the store is frozen into a [`Resolver`] with
/// [`PackStore::into_resolver`]. No pack can be added after that.
///
/// # Example
///
/// ```
/// use locpack::PackStore;
///
/// let mut store = PackStore::builder().default_locale("en").build();
/// store.register_str("en", r#"{ 'languageName': 'English', 'ui.cancel': 'Cancel' }"#).unwrap();
///
/// let resolver = store.into_resolver().unwrap();
/// assert_eq!(resolver.resolve("en", "ui.cancel", &[]), "Cancel");
/// ```
#[derive(Debug, Builder)]
pub struct PackStore {
    /// Locale used as the universal fallback. Must be registered before
    /// the store is turned into a resolver.
    #[builder(into, default = LocaleCode::new(DEFAULT_LOCALE))]
    default_locale: LocaleCode,

    /// Packs in registration order.
    #[builder(skip)]
    packs: Vec<Arc<LocalePack>>,

    /// Locale code -> index into `packs`.
    #[builder(skip)]
    index: HashMap<LocaleCode, usize>,
}

impl Default for PackStore {
    fn default() -> Self {
        PackStore::builder().build()
    }
}

impl PackStore {
    /// Create an empty store whose default locale is `en`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given default locale.
    pub fn with_default_locale(code: impl Into<LocaleCode>) -> Self {
        PackStore::builder().default_locale(code).build()
    }

    /// Create a store holding the packs shipped with the crate.
    pub fn builtin() -> Result<Self, LoadError> {
        let mut store = PackStore::new();
        for (code, content) in BUILTIN_PACKS {
            store.register_str(code, content)?;
        }
        Ok(store)
    }

    pub fn default_locale(&self) -> &LocaleCode {
        &self.default_locale
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Add a pack.
    ///
    /// Fails with [`StoreError::DuplicateLocale`] if the code is already
    /// registered; the store is left unchanged in that case.
    pub fn register(&mut self, pack: LocalePack) -> Result<(), StoreError> {
        if self.index.contains_key(pack.code()) {
            return Err(StoreError::DuplicateLocale {
                code: pack.code().clone(),
            });
        }

        debug!(
            locale = %pack.code(),
            messages = pack.len(),
            "registered locale pack"
        );
        self.index.insert(pack.code().clone(), self.packs.len());
        self.packs.push(Arc::new(pack));
        Ok(())
    }

    /// Parse pack file content and register it under `code`.
    ///
    /// Returns the number of messages loaded.
    pub fn register_str(&mut self, code: &str, content: &str) -> Result<usize, LoadError> {
        let pack = parse_pack(code, content, Path::new(&format!("<{code}>")))?;
        let count = pack.len();
        self.register(pack)?;
        Ok(count)
    }

    /// Load one pack file; the locale code is the file stem
    /// (`assets/languages/zh-Hans.js` registers `zh-Hans`).
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LocaleCode, LoadError> {
        let path = path.as_ref();
        let pack = read_pack(path)?;
        let code = pack.code().clone();
        self.register(pack)?;
        Ok(code)
    }

    /// Load every pack file in a directory, in file-name order.
    ///
    /// Loading is all-or-nothing: every file is read and parsed, and every
    /// code checked for duplicates, before any pack is registered.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<LocaleCode>, LoadError> {
        let dir = dir.as_ref();
        let packs = pack_files(dir)?
            .iter()
            .map(|path| read_pack(path))
            .collect::<Result<Vec<_>, _>>()?;

        let mut incoming: HashSet<&LocaleCode> = HashSet::new();
        for pack in &packs {
            if self.index.contains_key(pack.code()) || !incoming.insert(pack.code()) {
                return Err(StoreError::DuplicateLocale {
                    code: pack.code().clone(),
                }
                .into());
            }
        }

        let codes: Vec<LocaleCode> = packs.iter().map(|pack| pack.code().clone()).collect();
        for pack in packs {
            self.register(pack)?;
        }
        info!(dir = %dir.display(), locales = codes.len(), "loaded locale packs");
        Ok(codes)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get the pack for a locale code.
    pub fn get(&self, code: &str) -> Result<&LocalePack, StoreError> {
        self.find(code).ok_or_else(|| self.unknown_locale(code))
    }

    /// Get the shared handle for a locale's pack.
    pub fn get_shared(&self, code: &str) -> Result<Arc<LocalePack>, StoreError> {
        self.index
            .get(code)
            .map(|&i| Arc::clone(&self.packs[i]))
            .ok_or_else(|| self.unknown_locale(code))
    }

    fn unknown_locale(&self, code: &str) -> StoreError {
        StoreError::UnknownLocale {
            code: code.to_string(),
            suggestions: compute_suggestions(code, self.codes().map(LocaleCode::as_str)),
        }
    }

    pub(crate) fn find(&self, code: &str) -> Option<&LocalePack> {
        self.index.get(code).map(|&i| self.packs[i].as_ref())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Locale codes in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &LocaleCode> {
        self.packs.iter().map(|pack| pack.code())
    }

    /// Packs in registration order.
    pub fn packs(&self) -> impl Iterator<Item = &LocalePack> {
        self.packs.iter().map(|pack| pack.as_ref())
    }

    /// Listing for a language-selection UI, in registration order.
    ///
    /// The iterator borrows the store, so it can be created again at any
    /// time and always yields the same sequence.
    pub fn list_locales(&self) -> impl Iterator<Item = LocaleInfo> + '_ {
        self.packs.iter().map(|pack| pack.info())
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Freeze the store into a resolver.
    ///
    /// Fails if the default locale has not been registered.
    pub fn into_resolver(self) -> Result<Resolver, LoadError> {
        if !self.contains(self.default_locale.as_str()) {
            return Err(LoadError::MissingDefaultLocale {
                code: self.default_locale,
            });
        }
        Ok(Resolver::new(self))
    }
}

fn parse_pack(code: &str, content: &str, path: &Path) -> Result<LocalePack, LoadError> {
    let document = parse_pack_file(content).map_err(|e| LoadError::from_parse(path, e))?;
    Ok(LocalePack::from_document(code, document))
}

fn read_pack(path: &Path) -> Result<LocalePack, LoadError> {
    let code = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| LoadError::Parse {
            path: path.to_path_buf(),
            line: 0,
            column: 0,
            message: "file name is not a valid locale code".to_string(),
        })?;

    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_pack(code, &content, path)
}

/// Pack files directly inside `dir`, sorted by file name.
fn pack_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let is_pack = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| PACK_EXTENSIONS.contains(&ext));
        if is_pack && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
