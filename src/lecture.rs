//! Lecture records and the study material attached to them.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::{format_date, format_duration};

/// Answer text shown on flashcards until the student writes one.
pub const FLASHCARD_ANSWER_PLACEHOLDER: &str = "Add your answer or explanation";

/// Lecture record as stored by the note-taking app.
///
/// Field names follow the stored JSON documents (`createdAt`,
/// `vocabularyList`, ...). Every field is optional in the document; missing
/// values deserialize to empty defaults and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lecture {
    pub id: String,
    pub title: Option<String>,
    pub subject: Option<String>,
    /// Recording length in seconds.
    pub duration: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub audio_url: Option<String>,
    /// Note source in the lectern markup dialect.
    pub notes: String,
    pub key_ideas: Vec<String>,
    #[serde(rename = "vocabularyList")]
    pub vocabulary: Vec<VocabTerm>,
    pub deep_dives: Vec<DeepDive>,
}

/// Vocabulary entry; definitions are often filled in after the lecture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabTerm {
    pub term: String,
    pub definition: String,
}

/// Topic explored beyond the lecture itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepDive {
    pub topic: String,
    /// Explanation in the lectern markup dialect.
    pub content: String,
    pub examples: Vec<String>,
}

/// Question card derived from a key idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

impl Lecture {
    /// Parses a lecture record from its JSON document.
    ///
    /// # Errors
    ///
    /// Returns error if the document is not valid JSON or a field has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse lecture record")
    }

    /// Returns the title, or "Untitled" when missing or blank.
    pub fn display_title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or("Untitled")
    }

    /// Returns the subject name if the lecture has a non blank one.
    pub fn subject_name(&self) -> Option<&str> {
        non_blank(self.subject.as_deref())
    }

    /// Returns the subject, or "No subject" when missing or blank.
    pub fn display_subject(&self) -> &str {
        self.subject_name().unwrap_or("No subject")
    }

    /// Returns recording length formatted as `M:SS`.
    pub fn display_duration(&self) -> String {
        format_duration(self.duration)
    }

    /// Returns recording date, or "Unknown date" for undated records.
    pub fn display_date(&self) -> String {
        self.created_at
            .as_ref()
            .map(format_date)
            .unwrap_or_else(|| "Unknown date".to_string())
    }

    /// Returns the metadata line shown under the lecture title.
    ///
    /// Format: `Duration: 1:05 | Recorded: Mar 4, 2024`
    pub fn metadata_line(&self) -> String {
        format!(
            "Duration: {} | Recorded: {}",
            self.display_duration(),
            self.display_date()
        )
    }

    /// Returns true when the notes contain anything besides whitespace.
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }

    /// Returns the lowercased text searched by [`Lecture::matches`]:
    /// title, subject, recording date and notes, one per line.
    pub fn search_text(&self) -> String {
        let date = self.created_at.as_ref().map(format_date).unwrap_or_default();
        format!(
            "{}\n{}\n{}\n{}",
            self.display_title(),
            self.subject_name().unwrap_or_default(),
            date,
            self.notes
        )
        .to_lowercase()
    }

    /// Returns true when `query` occurs in the title, subject, date or
    /// notes, ignoring case. A blank query matches every lecture.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.search_text().contains(&query)
    }

    /// Builds one flashcard per key idea, in order.
    pub fn flashcards(&self) -> Vec<Flashcard<'_>> {
        self.key_ideas
            .iter()
            .map(|idea| Flashcard {
                question: idea,
                answer: FLASHCARD_ANSWER_PLACEHOLDER,
            })
            .collect()
    }
}

impl VocabTerm {
    /// Returns the definition, or "No definition" when blank.
    pub fn display_definition(&self) -> &str {
        non_blank(Some(self.definition.as_str())).unwrap_or("No definition")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
