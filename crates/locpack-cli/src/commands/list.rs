//! Implementation of the `locpack list` command.

use std::path::PathBuf;

use locpack::{LocaleInfo, DEFAULT_LOCALE};
use miette::IntoDiagnostic;

use super::load_store;
use crate::output::table::format_locale_table;

/// Arguments for the list command.
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Directory containing pack files. Defaults to the built-in packs.
    #[arg(long, env = "LOCPACK_DIR")]
    pub dir: Option<PathBuf>,

    /// Locale marked as the default in the listing.
    #[arg(long = "default", default_value = DEFAULT_LOCALE)]
    pub default_locale: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> miette::Result<i32> {
    let store = load_store(args.dir.as_deref(), &args.default_locale)?;
    let locales: Vec<LocaleInfo> = store.list_locales().collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&locales).into_diagnostic()?);
    } else {
        let table = format_locale_table(&locales, store.default_locale().as_str());
        println!("{}", table);
    }

    Ok(exitcode::OK)
}
