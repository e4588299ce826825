//! Implementation of the `locpack check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use locpack::parser::parse_pack_file;
use miette::{miette, IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::PackDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Pack files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    messages: Option<usize>,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Cannot read {}: {}", path.display(), e))?;

        match parse_pack_file(&content) {
            Ok(document) => {
                if !args.json {
                    println!(
                        "{} {} ({} messages)",
                        "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                        path.display(),
                        document.messages.len()
                    );
                }
                results.push(CheckResult {
                    file: path.display().to_string(),
                    ok: true,
                    messages: Some(document.messages.len()),
                    error: None,
                });
            }
            Err(e) => {
                if !args.json {
                    let diagnostic = PackDiagnostic::from_parse_error(path, &content, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(CheckResult {
                    file: path.display().to_string(),
                    ok: false,
                    messages: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    }

    if results.iter().all(|r| r.ok) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
