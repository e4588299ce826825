//! Template string scanner.
//!
//! A template is literal text with `{n}` placeholders. There is no escape
//! syntax: a brace that does not start a well-formed placeholder is plain
//! text, so `"{name}"`, `"{}"` and `"{-1}"` all render unchanged.

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Parse a template string into segments.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let parsed: ModalResult<Vec<Segment>> = repeat(0.., segment).parse_next(&mut remaining);

    let mut segments = match parsed {
        Ok(segments) => segments,
        Err(_) => {
            remaining = "";
            vec![Segment::Literal(input.to_string())]
        }
    };
    if !remaining.is_empty() {
        segments.push(Segment::Literal(remaining.to_string()));
    }

    Template::from_parts(input, merge_literals(segments))
}

/// Parse a single segment: a placeholder, a run of plain text, or a stray
/// brace taken literally.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        placeholder,
        literal_run,
        any.map(|c: char| Segment::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Parse `{n}` where `n` is a canonical decimal index (no leading zeros),
/// so an unsubstituted placeholder prints back exactly as written.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', digit1, '}')
        .verify(|digits: &str| digits == "0" || !digits.starts_with('0'))
        .try_map(str::parse::<usize>)
        .map(Segment::Placeholder)
        .parse_next(input)
}

fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            Segment::Placeholder(index) => result.push(Segment::Placeholder(index)),
        }
    }

    result
}
