//! Access to stored lecture records.
//!
//! Generators never reach for a global database handle; they receive a
//! [`LectureStore`] and ask it for records. The app's document store is
//! mirrored on disk as one JSON document per lecture, read by
//! [`DirectoryStore`]. [`MemoryStore`] serves callers that already hold the
//! records.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::lecture::Lecture;

/// Source of lecture records.
pub trait LectureStore {
    /// Returns every available lecture record.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying storage cannot be read at all.
    fn lectures(&self) -> Result<Vec<Lecture>>;
}

/// Lecture records stored as `*.json` documents in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Creates store reading documents from `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads and parses one record, filling a missing id from the file stem.
    fn read_record(path: &Path) -> Result<Lecture> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut lecture = Lecture::from_json(&json)
            .with_context(|| format!("Invalid lecture record {}", path.display()))?;

        if lecture.id.trim().is_empty() {
            lecture.id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("Cannot derive lecture id from {}", path.display()))?
                .to_string();
        }

        Ok(lecture)
    }
}

impl LectureStore for DirectoryStore {
    /// Reads records in file name order.
    ///
    /// Records that cannot be read or parsed are skipped with a warning so
    /// one damaged document does not hide the rest of the library.
    fn lectures(&self) -> Result<Vec<Lecture>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read lecture directory {}", self.root.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list {}", self.root.display()))?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut lectures = Vec::with_capacity(paths.len());
        for path in &paths {
            match Self::read_record(path) {
                Ok(lecture) => {
                    debug!(id = %lecture.id, path = %path.display(), "loaded lecture");
                    lectures.push(lecture);
                }
                Err(e) => warn!("Skipping lecture record: {:#}", e),
            }
        }

        Ok(lectures)
    }
}

/// Lecture records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lectures: Vec<Lecture>,
}

impl MemoryStore {
    pub fn new(lectures: Vec<Lecture>) -> Self {
        Self { lectures }
    }
}

impl LectureStore for MemoryStore {
    fn lectures(&self) -> Result<Vec<Lecture>> {
        Ok(self.lectures.clone())
    }
}
