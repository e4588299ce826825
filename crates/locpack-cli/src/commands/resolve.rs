//! Implementation of the `locpack resolve` command.

use std::path::PathBuf;

use locpack::{Diagnostic, FallbackStage, Value, DEFAULT_LOCALE};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::load_store;
use crate::output::load_error_report;

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Locale to resolve in
    #[arg(short, long)]
    pub lang: String,

    /// Message key
    pub key: String,

    /// Positional arguments for `{0}`, `{1}`, ... inserted verbatim. Put
    /// `--` before arguments that start with '-'.
    pub args: Vec<String>,

    /// Directory containing pack files. Defaults to the built-in packs.
    #[arg(long, env = "LOCPACK_DIR")]
    pub dir: Option<PathBuf>,

    /// Locale used when the requested one lacks the key.
    #[arg(long = "default", default_value = DEFAULT_LOCALE)]
    pub default_locale: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for resolve results.
#[derive(Debug, Serialize)]
struct ResolveResult<'a> {
    result: &'a str,
    stage: FallbackStage,
    diagnostics: &'a [Diagnostic],
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let store = load_store(args.dir.as_deref(), &args.default_locale)?;
    let resolver = store.into_resolver().map_err(load_error_report)?;

    let values: Vec<Value> = args.args.iter().map(Value::from).collect();
    let resolution = resolver.resolve_detailed(&args.lang, &args.key, &values);

    if args.json {
        let output = ResolveResult {
            result: &resolution.text,
            stage: resolution.stage,
            diagnostics: &resolution.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", resolution.text);
        for diagnostic in &resolution.diagnostics {
            eprintln!(
                "{}: {}",
                "note".if_supports_color(Stream::Stderr, |t| t.yellow()),
                diagnostic
            );
        }
    }

    Ok(exitcode::OK)
}
