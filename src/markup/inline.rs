//! Inline emphasis parsing.
//!
//! Emphasis is resolved by ordered passes over a span tree. Each pass only
//! splits [`Span::Text`] leaves, so a delimiter can never pair with another
//! one on the far side of a span formed by an earlier pass. That keeps every
//! emitted tag balanced for arbitrary input, at the cost of bold inside
//! italic (`*a **b** c*`) keeping its outer asterisks literally.

use maud::{Markup, Render, html};

/// Inline content of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(Vec<Span>),
    Emphasis(Vec<Span>),
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Strong,
    Emphasis,
}

impl Style {
    fn wrap(self, children: Vec<Span>) -> Span {
        match self {
            Style::Strong => Span::Strong(children),
            Style::Emphasis => Span::Emphasis(children),
        }
    }
}

/// Delimiter passes in application order. Bold runs before italic so a
/// `**` pair is never split by the single `*` rule.
const PASSES: [(&str, Style); 4] = [
    ("**", Style::Strong),
    ("__", Style::Strong),
    ("*", Style::Emphasis),
    ("_", Style::Emphasis),
];

/// Parses inline emphasis in one line of text.
///
/// Matching is shortest span: an opening delimiter pairs with the nearest
/// following occurrence of the same delimiter. Empty spans are not formed,
/// and delimiters without a partner stay in the text literally.
///
/// # Arguments
///
/// * `text`: Text content of a heading, list item or paragraph
///
/// # Returns
///
/// Span tree in reading order
pub fn parse(text: &str) -> Vec<Span> {
    PASSES
        .iter()
        .fold(vec![Span::Text(text.to_owned())], |spans, &(delim, style)| {
            apply(spans, delim, style)
        })
}

fn apply(spans: Vec<Span>, delim: &str, style: Style) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Span::Text(text) => split_delimited(&text, delim, style, &mut out),
            Span::Strong(children) => out.push(Span::Strong(apply(children, delim, style))),
            Span::Emphasis(children) => out.push(Span::Emphasis(apply(children, delim, style))),
        }
    }
    out
}

/// Splits `text` on `delim` pairs, pushing literal and wrapped spans.
///
/// The cursor only moves forward and every byte is scanned a bounded number
/// of times, so long runs of unmatched delimiters stay linear.
fn split_delimited(text: &str, delim: &str, style: Style, out: &mut Vec<Span>) {
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(open) = text[cursor..].find(delim).map(|i| cursor + i) {
        let body_start = open + delim.len();
        let Some(close) = text[body_start..].find(delim).map(|i| body_start + i) else {
            // No partner from here on, so no later opener has one either.
            break;
        };

        if close == body_start {
            // Delimiters are ASCII, so stepping one byte stays on a char boundary.
            cursor = open + 1;
            continue;
        }

        push_text(out, &text[literal_start..open]);
        out.push(style.wrap(vec![Span::Text(text[body_start..close].to_owned())]));
        cursor = close + delim.len();
        literal_start = cursor;
    }

    push_text(out, &text[literal_start..]);
}

fn push_text(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::Text(text.to_owned()));
    }
}

impl Render for Span {
    fn render(&self) -> Markup {
        html! {
            @match self {
                Span::Text(text) => { (text) }
                Span::Strong(children) => { strong { @for child in children { (child) } } }
                Span::Emphasis(children) => { em { @for child in children { (child) } } }
            }
        }
    }
}
