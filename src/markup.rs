//! Lecture note markup rendering.
//!
//! Notes are written in a deliberately small markdown dialect: `#` to `###`
//! headings, `* ` list items, `**bold**`/`__bold__` and `*italic*`/`_italic_`
//! emphasis, and plain lines as paragraphs. Rendering runs as a pipeline of
//! pure stages (line classification, block grouping, inline span parsing,
//! HTML serialisation), so it holds no state between calls and can be used
//! from any number of threads at once.

mod block;
mod inline;
mod renderer;

pub use block::{Block, Line, MAX_HEADING_LEVEL, classify, group};
pub use inline::{Span, parse as parse_inline};
pub use renderer::{DEFAULT_CONTAINER_CLASS, NotesRenderer, render};
