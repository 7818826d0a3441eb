//! Shared test utilities for integration tests.
//!
//! Provides helpers for building temporary lecture record directories used
//! across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Biology lecture with every study panel filled in.
pub const CELL_BIOLOGY: &str = r##"{
    "id": "bio-1",
    "userId": "user-1",
    "title": "Cell Biology",
    "subject": "Biology",
    "duration": 3125,
    "createdAt": "2024-02-12T09:00:00Z",
    "audioUrl": "https://cdn.example.com/audio/bio-1.webm",
    "notes": "# Cells\n\nThe **cell** is the *basic unit* of life.\n\n## Organelles\n* nucleus\n* mitochondria\n* ribosomes\n\n#### not a heading",
    "keyIdeas": ["All living things are made of cells", "Cells come from cells"],
    "vocabularyList": [
        {"term": "Organelle", "definition": "Specialised structure within a cell"},
        {"term": "Cytoplasm", "definition": ""}
    ],
    "deepDives": [
        {"topic": "Mitochondria", "content": "Known as the __powerhouse__", "examples": ["ATP"]}
    ]
}"##;

/// Chemistry lecture recorded after the biology one.
pub const ATOMIC_STRUCTURE: &str = r#"{
    "title": "Atomic Structure",
    "subject": "Chemistry",
    "duration": 2700,
    "createdAt": "2024-03-01T14:30:00Z",
    "notes": "Protons, neutrons and electrons"
}"#;

/// Lecture without subject, date or notes.
pub const UNSORTED: &str = r#"{"id": "loose", "title": "Guest talk"}"#;

/// Creates temporary directory holding lecture records.
///
/// # Arguments
///
/// * `records`: File names paired with JSON document content
///
/// # Returns
///
/// Temporary directory containing one file per record
///
/// # Errors
///
/// Returns error if directory creation or a file write fails
pub fn create_record_dir(records: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (name, content) in records {
        write_file(dir.path(), name, content)?;
    }
    Ok(dir)
}

/// Creates temporary directory with the three sample lectures.
pub fn create_sample_library() -> Result<TempDir> {
    create_record_dir(&[
        ("bio-1.json", CELL_BIOLOGY),
        ("atoms.json", ATOMIC_STRUCTURE),
        ("loose.json", UNSORTED),
    ])
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
