//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use locpack::LocaleInfo;

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale code (e.g., "zh-Hans").
    pub locale: String,
    /// Number of default-pack keys the locale translates.
    pub translated: usize,
    /// Keys present in the default pack but not in this one.
    pub missing: Vec<String>,
    /// Keys the default pack does not know about.
    pub unknown: Vec<String>,
    /// Keys whose placeholders differ from the default pack.
    pub mismatched: Vec<String>,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Locale", "Coverage", "Missing", "Unknown", "Mismatched"]);

    for locale in coverage {
        table.add_row(vec![
            locale.locale.clone(),
            format!("{}/{}", locale.translated, source_count),
            locale.missing.len().to_string(),
            locale.unknown.len().to_string(),
            locale.mismatched.len().to_string(),
        ]);
    }

    table
}

/// Format the locale listing, marking the default locale.
pub fn format_locale_table(locales: &[LocaleInfo], default_locale: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Code", "Name", "Native name", ""]);

    for info in locales {
        let marker = if info.code == default_locale { "default" } else { "" };
        table.add_row(vec![
            info.code.to_string(),
            info.name.clone(),
            info.localized_name.clone().unwrap_or_default(),
            marker.to_string(),
        ]);
    }

    table
}
