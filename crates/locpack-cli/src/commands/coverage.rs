//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use locpack::{PackWarning, DEFAULT_LOCALE};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::load_store;
use crate::output::load_error_report;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Directory containing pack files. Defaults to the built-in packs.
    #[arg(long, env = "LOCPACK_DIR")]
    pub dir: Option<PathBuf>,

    /// Reference locale that other packs are compared against.
    #[arg(long = "default", default_value = DEFAULT_LOCALE)]
    pub default_locale: String,

    /// Exit with non-zero code if any pack has a warning.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    locale: &'a str,
    translated: usize,
    total: usize,
    missing: &'a [String],
    unknown: &'a [String],
    mismatched: &'a [String],
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let store = load_store(args.dir.as_deref(), &args.default_locale)?;
    let resolver = store.into_resolver().map_err(load_error_report)?;

    let reference = resolver.get(resolver.default_locale().as_str()).into_diagnostic()?;
    let source_count = reference.len();

    let mut coverage_data: Vec<LocaleCoverage> = Vec::new();
    for pack in resolver.store().packs() {
        if pack.code() == reference.code() {
            continue;
        }
        let mut coverage = LocaleCoverage {
            locale: pack.code().to_string(),
            translated: source_count,
            missing: Vec::new(),
            unknown: Vec::new(),
            mismatched: Vec::new(),
        };
        for warning in resolver.validate(pack.code().as_str()).into_diagnostic()? {
            let key = warning.key().to_string();
            match warning {
                PackWarning::MissingKey { .. } => coverage.missing.push(key),
                PackWarning::UnknownKey { .. } => coverage.unknown.push(key),
                PackWarning::PlaceholderMismatch { .. } => coverage.mismatched.push(key),
            }
        }
        coverage.translated -= coverage.missing.len();
        coverage_data.push(coverage);
    }

    let any_warning = coverage_data
        .iter()
        .any(|c| !c.missing.is_empty() || !c.unknown.is_empty() || !c.mismatched.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson<'_>> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: &c.locale,
                translated: c.translated,
                total: source_count,
                missing: &c.missing,
                unknown: &c.unknown,
                mismatched: &c.mismatched,
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for coverage in &coverage_data {
            print_keys("Missing in", &coverage.locale, &coverage.missing);
            print_keys("Unknown in", &coverage.locale, &coverage.unknown);
            print_keys("Placeholder mismatch in", &coverage.locale, &coverage.mismatched);
        }
    }

    if args.strict && any_warning {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn print_keys(heading: &str, locale: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    println!("\n{} {}:", heading, locale);
    for key in keys {
        println!("  - {}", key);
    }
}
