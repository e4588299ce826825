//! locpack CLI entry point.
//!
//! Provides command-line tools for working with locale pack files:
//! - `locpack check` - Validate pack file syntax
//! - `locpack coverage` - Report missing translations per locale
//! - `locpack list` - List available locales
//! - `locpack resolve` - Render a message

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_list, run_resolve, CheckArgs, CoverageArgs, ListArgs,
    ResolveArgs,
};
use tracing_subscriber::EnvFilter;

/// Locale pack tools.
#[derive(Debug, Parser)]
#[command(name = "locpack")]
#[command(about = "Locale pack tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check pack file syntax
    Check(CheckArgs),
    /// Report translation coverage against the default locale
    Coverage(CoverageArgs),
    /// List available locales
    List(ListArgs),
    /// Resolve and format a message
    Resolve(ResolveArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Route library diagnostics to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool, color_when: ColorWhen) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .with_ansi(!matches!(color_when, ColorWhen::Never))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose, cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::List(args) => run_list(args),
        Commands::Resolve(args) => run_resolve(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
