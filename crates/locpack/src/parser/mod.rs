//! Pack file and template parser.
//!
//! This module parses locale pack files into a [`PackDocument`] and message
//! text into [`Template`]s. The AST is public for external tooling.

pub mod ast;
pub mod error;
mod file;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use file::{DISPLAY_NAME_KEY, HTML_LANG_KEY, LOCALIZED_NAME_KEY, parse_pack_file};
pub use template::parse_template;
