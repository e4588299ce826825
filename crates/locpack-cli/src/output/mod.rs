//! Output formatting for the CLI.

pub mod diagnostic;
pub mod table;

pub use diagnostic::{load_error_report, PackDiagnostic};
