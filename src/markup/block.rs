//! Block level classification of note lines.

/// Deepest heading level the dialect recognises.
///
/// Lines with more leading `#` characters are plain paragraph text.
pub const MAX_HEADING_LEVEL: usize = 3;

/// Physical line of note source after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `#`, `##` or `###` followed by a space.
    Heading { level: u8, text: &'a str },
    /// `* ` followed by the item text.
    Item(&'a str),
    /// Any other non-blank line.
    Text(&'a str),
    /// Empty or whitespace only.
    Blank,
}

/// Block level construct produced from one or more lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    /// Contiguous run of item lines, never empty.
    List(Vec<&'a str>),
    Paragraph(&'a str),
}

/// Classifies a single source line.
///
/// A trailing carriage return is ignored so notes saved with CRLF endings
/// classify the same way as LF notes.
///
/// # Arguments
///
/// * `line`: One line of note source without its newline
///
/// # Returns
///
/// Line kind borrowing its text content from `line`
pub fn classify(line: &str) -> Line<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.trim().is_empty() {
        return Line::Blank;
    }

    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=MAX_HEADING_LEVEL).contains(&hashes)
        && let Some(text) = line[hashes..].strip_prefix(' ')
    {
        return Line::Heading {
            level: hashes as u8,
            text,
        };
    }

    if let Some(text) = line.strip_prefix("* ") {
        return Line::Item(text);
    }

    Line::Text(line)
}

/// Groups classified lines into blocks.
///
/// Every contiguous run of item lines becomes exactly one list block.
/// Blank lines end a run and otherwise produce nothing, and every other
/// text line is a paragraph of its own.
///
/// # Arguments
///
/// * `source`: Complete note source, lines separated by `\n`
///
/// # Returns
///
/// Blocks in source order
pub fn group(source: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut items = Vec::new();

    for line in source.split('\n').map(classify) {
        if let Line::Item(text) = line {
            items.push(text);
            continue;
        }

        if !items.is_empty() {
            blocks.push(Block::List(std::mem::take(&mut items)));
        }

        match line {
            Line::Heading { level, text } => blocks.push(Block::Heading { level, text }),
            Line::Text(text) => blocks.push(Block::Paragraph(text)),
            Line::Blank | Line::Item(_) => {}
        }
    }

    if !items.is_empty() {
        blocks.push(Block::List(items));
    }

    blocks
}
