//! Pack store and message resolver.
//!
//! Packs are loaded into a [`PackStore`], which is then frozen into a
//! [`Resolver`]. The resolver walks a fixed fallback chain (requested
//! locale, default locale, raw key) and substitutes positional arguments.

mod diagnostic;
mod error;
mod fallback;
mod format;
mod localizer;
mod resolver;
mod store;
mod validate;

pub use diagnostic::Diagnostic;
pub use error::{LoadError, StoreError};
pub use fallback::FallbackStage;
pub use format::{Rendered, format_message, render};
pub use localizer::Localizer;
pub use resolver::{Resolution, Resolver};
pub use store::{DEFAULT_LOCALE, PACK_EXTENSIONS, PackStore};
pub use validate::{PackWarning, compare_packs};
