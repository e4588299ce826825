//! Miette diagnostic wrapper for pack parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use locpack::parser::ParseError;
use locpack::LoadError;
use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for pack parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid pack file: {message}")]
#[diagnostic(code(locpack::syntax))]
pub struct PackDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PackDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position().unwrap_or((1, 1));
        let (message, help) = match err {
            ParseError::Syntax { message, .. } => (message.clone(), None),
            ParseError::UnexpectedEof { .. } => (
                "unexpected end of file".to_string(),
                Some("check for an unterminated string or a missing '}'".to_string()),
            ),
            ParseError::DuplicateKey { .. } => (
                err.to_string(),
                Some("each key may appear only once per pack".to_string()),
            ),
            ParseError::MissingMetadata { key } => (
                err.to_string(),
                Some(format!("add a '{key}' entry to the pack")),
            ),
            ParseError::NullValue { .. } => (err.to_string(), None),
        };
        Self::at(path, content, line, column, message, help)
    }

    fn at(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        let offset = byte_offset(content, line, column);
        // Label one whole character, or nothing at end of input.
        let len = content[offset..].chars().next().map_or(0, char::len_utf8);

        PackDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }
}

/// Convert a 1-based line and character column into a byte offset, clamped
/// to the end of that line.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let text = content[line_start..].split_inclusive('\n').next().unwrap_or("");
    let within = text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(text.len(), |(index, _)| index);
    line_start + within
}

/// Turn a load failure into a report, with source context when the file
/// can still be read.
pub fn load_error_report(err: LoadError) -> Report {
    if let LoadError::Parse {
        path,
        line,
        column,
        message,
    } = &err
    {
        if let Ok(content) = read_to_string(path) {
            let diagnostic =
                PackDiagnostic::at(path, &content, *line, *column, message.clone(), None);
            return Report::new(diagnostic);
        }
    }
    miette!("{err}")
}

#[cfg(test)]
mod tests {
    use locpack::parser::parse_pack_file;

    use super::*;

    #[test]
    fn offset_counts_columns_in_characters() {
        let content = "{ 'languageName': '简体中文', 'k' 'v' }";
        let err = parse_pack_file(content).unwrap_err();
        let (line, column) = err.position().unwrap();
        assert_eq!(byte_offset(content, line, column), content.find("'v'").unwrap());
    }

    #[test]
    fn offset_on_later_line_after_crlf() {
        let content = "{\r\n  '名': 'x',\r\n  'k' 'v'\r\n}";
        let err = parse_pack_file(content).unwrap_err();
        let (line, column) = err.position().unwrap();
        assert_eq!(line, 3);
        assert_eq!(byte_offset(content, line, column), content.find("'v'").unwrap());
    }

    #[test]
    fn offset_is_clamped_to_content() {
        assert_eq!(byte_offset("ab", 1, 10), 2);
        assert_eq!(byte_offset("ab\ncd", 1, 10), 3);
        assert_eq!(byte_offset("ab", 5, 1), 2);
    }

    #[test]
    fn span_covers_one_multibyte_character() {
        let content = "{ 'languageName': '简' 键 }";
        let err = parse_pack_file(content).unwrap_err();
        let diagnostic = PackDiagnostic::from_parse_error(Path::new("zh.js"), content, &err);
        assert_eq!(diagnostic.span.offset(), content.find('键').unwrap());
        assert_eq!(diagnostic.span.len(), '键'.len_utf8());
    }
}
