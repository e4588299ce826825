//! Pack file parser.
//!
//! A pack file is a flat object literal of quoted keys and values:
//!
//! ```text
//! var lang_en = {
//!     // metadata
//!     'languageName': 'English',
//!     'localizedLanguageName': null,
//!     'htmlLang': 'en',
//!
//!     'status.processing': 'Processing: {0}/{1} ({2})',
//! };
//! ```
//!
//! The `var name =` prefix and the trailing `;` are optional. Strings may
//! use single or double quotes and the usual backslash escapes.

use std::collections::HashSet;

use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat, separated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::Range;
use winnow::token::{any, take_until, take_while};

use super::ast::{MessageEntry, PackDocument, Template};
use super::error::ParseError;

/// Metadata key holding the pack's display name. Required.
pub const DISPLAY_NAME_KEY: &str = "languageName";
/// Metadata key holding the pack's self-name. May be `null`.
pub const LOCALIZED_NAME_KEY: &str = "localizedLanguageName";
/// Metadata key holding the HTML language tag. Optional.
pub const HTML_LANG_KEY: &str = "htmlLang";

/// An entry before metadata is split out. `rest_len` is the length of the
/// input remaining at the start of the key, used to recover its position.
struct RawEntry {
    key: String,
    value: Option<String>,
    rest_len: usize,
}

/// Parse an entire pack file.
pub fn parse_pack_file(input: &str) -> Result<PackDocument, ParseError> {
    let mut remaining = input;
    match pack(&mut remaining) {
        Ok(entries) => {
            if remaining.is_empty() {
                build_document(input, entries)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: error_message(&e),
                })
            }
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

fn error_message(error: &ErrMode<ContextError>) -> String {
    let rendered = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.to_string(),
        ErrMode::Incomplete(_) => String::new(),
    };
    let rendered = rendered.replace('\n', "; ");
    if rendered.is_empty() {
        "malformed pack file".to_string()
    } else {
        rendered
    }
}

/// Split metadata from messages and enforce key uniqueness.
fn build_document(input: &str, entries: Vec<RawEntry>) -> Result<PackDocument, ParseError> {
    let mut seen = HashSet::new();
    let mut display_name = None;
    let mut localized_display_name = None;
    let mut html_lang = None;
    let mut messages = Vec::with_capacity(entries.len());

    for entry in entries {
        let (line, column) = calculate_position(input, &input[input.len() - entry.rest_len..]);
        if !seen.insert(entry.key.clone()) {
            return Err(ParseError::DuplicateKey {
                key: entry.key,
                line,
                column,
            });
        }

        match (entry.key.as_str(), entry.value) {
            (LOCALIZED_NAME_KEY, value) => localized_display_name = value,
            (_, None) => {
                return Err(ParseError::NullValue {
                    key: entry.key,
                    line,
                    column,
                });
            }
            (DISPLAY_NAME_KEY, Some(value)) => display_name = Some(value),
            (HTML_LANG_KEY, Some(value)) => html_lang = Some(value),
            (_, Some(value)) => messages.push(MessageEntry {
                template: Template::parse(&value),
                key: entry.key,
                line,
                column,
            }),
        }
    }

    let display_name = display_name.ok_or_else(|| ParseError::MissingMetadata {
        key: DISPLAY_NAME_KEY.to_string(),
    })?;

    Ok(PackDocument {
        display_name,
        localized_display_name,
        html_lang,
        messages,
    })
}

/// Parse the whole file: optional declaration, the object, optional `;`.
fn pack(input: &mut &str) -> ModalResult<Vec<RawEntry>> {
    skip_ws_and_comments(input)?;
    opt(declaration).parse_next(input)?;
    skip_ws_and_comments(input)?;
    let entries = object(input)?;
    skip_ws_and_comments(input)?;
    opt(';').parse_next(input)?;
    skip_ws_and_comments(input)?;
    Ok(entries)
}

/// Parse `var name =` (also `let` / `const`).
fn declaration(input: &mut &str) -> ModalResult<()> {
    alt(("var", "let", "const")).parse_next(input)?;
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)?;
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        .context(StrContext::Label("variable name"))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    Ok(())
}

/// Parse `{ entry, entry, ... }` with an optional trailing comma.
fn object(input: &mut &str) -> ModalResult<Vec<RawEntry>> {
    '{'.context(StrContext::Expected(StrContextValue::CharLiteral('{')))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    let entries: Vec<RawEntry> = separated(
        0..,
        entry,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;
    let _ = opt((skip_ws_and_comments, ',')).parse_next(input)?;
    skip_ws_and_comments(input)?;
    '}'.context(StrContext::Expected(StrContextValue::CharLiteral('}')))
        .parse_next(input)?;
    Ok(entries)
}

/// Parse `'key': 'value'` or `'key': null`.
fn entry(input: &mut &str) -> ModalResult<RawEntry> {
    let rest_len = input.len();
    let key = quoted_string
        .context(StrContext::Label("key"))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    cut_err(':'.context(StrContext::Expected(StrContextValue::CharLiteral(':'))))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = cut_err(
        alt(("null".value(None), quoted_string.map(Some)))
            .context(StrContext::Label("value"))
            .context(StrContext::Expected(StrContextValue::Description(
                "quoted string or null",
            ))),
    )
    .parse_next(input)?;
    Ok(RawEntry {
        key,
        value,
        rest_len,
    })
}

/// Parse a single- or double-quoted string, decoding escapes. Once the
/// opening quote is seen the string must be closed.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    let quote = alt(('\'', '"')).parse_next(input)?;
    let mut out = String::new();
    loop {
        match cut_err(any).parse_next(input)? {
            c if c == quote => return Ok(out),
            '\\' => {
                if let Some(c) = escape(input)? {
                    out.push(c);
                }
            }
            c => out.push(c),
        }
    }
}

/// Decode the character after a backslash. A backslash before a line break
/// continues the string on the next line and yields nothing.
fn escape(input: &mut &str) -> ModalResult<Option<char>> {
    let c = cut_err(any).parse_next(input)?;
    Ok(match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        '0' => Some('\0'),
        'x' => Some(
            cut_err(hex_digits(2).verify_map(char::from_u32))
                .context(StrContext::Label("\\x escape"))
                .context(StrContext::Expected(StrContextValue::Description(
                    "two hex digits",
                )))
                .parse_next(input)?,
        ),
        'u' => Some(
            cut_err(unicode_escape)
                .context(StrContext::Label("\\u escape"))
                .context(StrContext::Expected(StrContextValue::Description(
                    "four hex digits or {hex}",
                )))
                .parse_next(input)?,
        ),
        '\n' => None,
        other => Some(other),
    })
}

/// Body of a `\u` escape: `{1F600}`, a UTF-16 surrogate pair written as
/// `D83D\uDE00`, or a single `00E7`. Lone surrogates are rejected.
fn unicode_escape(input: &mut &str) -> ModalResult<char> {
    alt((
        delimited('{', hex_digits(1..=6), '}'),
        surrogate_pair,
        hex_digits(4),
    ))
    .verify_map(char::from_u32)
    .parse_next(input)
}

fn surrogate_pair(input: &mut &str) -> ModalResult<u32> {
    let high = hex_digits(4)
        .verify(|unit: &u32| (0xD800..0xDC00).contains(unit))
        .parse_next(input)?;
    "\\u".parse_next(input)?;
    let low = hex_digits(4)
        .verify(|unit: &u32| (0xDC00..0xE000).contains(unit))
        .parse_next(input)?;
    Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}

fn hex_digits<'i>(
    count: impl Into<Range>,
) -> impl Parser<&'i str, u32, ErrMode<ContextError>> {
    take_while(count, |c: char| c.is_ascii_hexdigit())
        .try_map(|digits: &str| u32::from_str_radix(digits, 16))
}

/// Skip whitespace, line comments and block comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(
        0..,
        alt((ws_only.void(), line_comment.void(), block_comment.void())),
    )
    .parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., char::is_whitespace).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse a block comment: /* ... */
fn block_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let body = preceded("/*", take_until(0.., "*/")).parse_next(input)?;
    "*/".parse_next(input)?;
    Ok(body)
}
