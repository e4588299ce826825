//! CLI command implementations.

mod check;
mod coverage;
mod list;
mod resolve;

use std::path::Path;

use locpack::builtin::BUILTIN_PACKS;
use locpack::PackStore;
use tracing::debug;

use crate::output::load_error_report;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use list::{run_list, ListArgs};
pub use resolve::{run_resolve, ResolveArgs};

/// Load packs from `dir`, or the built-in packs when no directory is given.
fn load_store(dir: Option<&Path>, default_locale: &str) -> miette::Result<PackStore> {
    let mut store = PackStore::with_default_locale(default_locale);
    match dir {
        Some(dir) => {
            store.load_dir(dir).map_err(load_error_report)?;
        }
        None => {
            debug!("no pack directory given, using built-in packs");
            for (code, content) in BUILTIN_PACKS {
                store.register_str(code, content).map_err(load_error_report)?;
            }
        }
    }
    Ok(store)
}
