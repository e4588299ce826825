//! Packs shipped with the crate.
//!
//! The pack files are embedded at compile time, so
//! [`PackStore::builtin`](crate::PackStore::builtin) needs no file system.

/// English, the default locale.
pub const EN: &str = include_str!("../locales/en.js");

/// Simplified Chinese.
pub const ZH_HANS: &str = include_str!("../locales/zh-Hans.js");

/// `(locale code, pack file)` pairs in registration order.
pub const BUILTIN_PACKS: &[(&str, &str)] = &[("en", EN), ("zh-Hans", ZH_HANS)];
