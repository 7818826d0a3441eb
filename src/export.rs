//! Notes export as standalone markdown documents.

use crate::lecture::Lecture;

/// Longest file stem offered for download, in bytes. Common filesystems
/// cap a name at 255 bytes.
pub const MAX_STEM_BYTES: usize = 200;

/// Device names Windows refuses as a file stem, whatever the extension.
const RESERVED_STEMS: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Builds the downloadable notes document: the title as a level one
/// heading, a blank line, then the notes source unchanged.
pub fn notes_document(lecture: &Lecture) -> String {
    format!("# {}\n\n{}", lecture.display_title(), lecture.notes)
}

/// Returns the file name offered when downloading a lecture's notes.
///
/// The title is kept readable; only characters that would break it as a
/// single file name (path separators, control and reserved characters)
/// are replaced with `_`. The stem is cut on a char boundary to at most
/// [`MAX_STEM_BYTES`] and Windows device names get a leading `_`.
pub fn export_file_name(lecture: &Lecture) -> String {
    let mut budget = MAX_STEM_BYTES;
    let stem: String = lecture
        .display_title()
        .trim()
        .chars()
        .take_while(|c| match budget.checked_sub(c.len_utf8()) {
            Some(rest) => {
                budget = rest;
                true
            }
            None => false,
        })
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = stem.trim_matches('.').trim_end();
    if stem.is_empty() {
        return "notes.md".to_string();
    }

    let device = stem.split('.').next().unwrap_or(stem).trim_end();
    if RESERVED_STEMS.iter().any(|r| r.eq_ignore_ascii_case(device)) {
        format!("_{}.md", stem)
    } else {
        format!("{}.md", stem)
    }
}
