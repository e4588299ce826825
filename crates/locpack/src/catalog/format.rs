//! Positional placeholder substitution.

use std::fmt::Write as _;

use crate::parser::{Segment, Template};
use crate::types::Value;

/// Output of rendering a template against arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Placeholder indices with no matching argument, in template order.
    /// Each occurrence is listed, so `{1} {1}` with no arguments gives `[1, 1]`.
    pub unmatched: Vec<usize>,
}

/// Substitute `{n}` placeholders with `args[n]`.
///
/// A placeholder whose index is past the end of `args` is written back
/// literally. Unused arguments are ignored.
pub fn render(template: &Template, args: &[Value]) -> Rendered {
    let mut text = String::with_capacity(template.source().len());
    let mut unmatched = Vec::new();

    for segment in template.segments() {
        match segment {
            Segment::Literal(literal) => text.push_str(literal),
            Segment::Placeholder(index) => match args.get(*index) {
                Some(value) => {
                    let _ = write!(text, "{value}");
                }
                None => {
                    let _ = write!(text, "{{{index}}}");
                    unmatched.push(*index);
                }
            },
        }
    }

    Rendered { text, unmatched }
}

/// Render template text directly, without a pack.
///
/// # Example
///
/// ```
/// use locpack::{args, format_message};
///
/// let text = format_message("Processing: {0}/{1} ({2})", &args![3, 10, "30%"]);
/// assert_eq!(text, "Processing: 3/10 (30%)");
/// ```
pub fn format_message(template: &str, args: &[Value]) -> String {
    render(&Template::parse(template), args).text
}
