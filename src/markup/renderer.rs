//! Note markup to HTML fragment rendering.

use maud::{Markup, Render, html};

use super::block::{self, Block};
use super::inline;

/// Class of the element wrapping every rendered fragment.
pub const DEFAULT_CONTAINER_CLASS: &str = "notes-content";

/// Renders lecture note markup to HTML fragments.
///
/// Output is always one container element holding headings (`h1` to
/// `h3`), unordered lists and paragraphs. Text content is escaped, so the
/// fragment can be inserted into a page without disturbing sibling markup.
/// The renderer holds no mutable state; a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct NotesRenderer {
    container_class: String,
}

impl NotesRenderer {
    /// Creates renderer wrapping output in `div.notes-content`.
    pub fn new() -> Self {
        Self::with_container_class(DEFAULT_CONTAINER_CLASS)
    }

    /// Creates renderer with a custom container class.
    ///
    /// # Arguments
    ///
    /// * `class`: Class attribute value for the wrapping `div`
    pub fn with_container_class(class: impl Into<String>) -> Self {
        Self {
            container_class: class.into(),
        }
    }

    /// Returns the container class used for rendered fragments.
    pub fn container_class(&self) -> &str {
        &self.container_class
    }

    /// Renders note source to an HTML fragment string.
    ///
    /// Total over all inputs: empty input yields an empty container and
    /// malformed markup degrades to literal text.
    ///
    /// # Arguments
    ///
    /// * `source`: Note markup, lines separated by `\n`
    ///
    /// # Returns
    ///
    /// HTML fragment string
    pub fn render(&self, source: &str) -> String {
        self.render_markup(source).into_string()
    }

    /// Renders note source as maud markup for embedding in page templates.
    pub fn render_markup(&self, source: &str) -> Markup {
        let blocks = block::group(source);

        html! {
            div class=(self.container_class) {
                @for block in &blocks {
                    (block)
                }
            }
        }
    }
}

impl Default for NotesRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Block<'_> {
    fn render(&self) -> Markup {
        match self {
            Block::Heading { level, text } => {
                let content = inline_markup(text);
                match *level {
                    1 => html! { h1 { (content) } },
                    2 => html! { h2 { (content) } },
                    _ => html! { h3 { (content) } },
                }
            }
            Block::List(items) => html! {
                ul {
                    @for item in items {
                        li { (inline_markup(item)) }
                    }
                }
            },
            Block::Paragraph(text) => html! { p { (inline_markup(text)) } },
        }
    }
}

fn inline_markup(text: &str) -> Markup {
    let spans = inline::parse(text);
    html! {
        @for span in &spans {
            (span)
        }
    }
}

/// Renders note source with the default renderer.
///
/// # Examples
///
/// ```
/// let html = lectern::render("# Week 1\n* **cells**\n* *atoms*");
/// assert_eq!(
///     html,
///     "<div class=\"notes-content\"><h1>Week 1</h1><ul><li><strong>cells</strong></li>\
///      <li><em>atoms</em></li></ul></div>"
/// );
/// ```
pub fn render(source: &str) -> String {
    NotesRenderer::new().render(source)
}
