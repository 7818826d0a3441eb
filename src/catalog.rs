//! Dashboard queries over a lecture library.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::lecture::Lecture;

/// Number of lectures shown in the dashboard's recent list.
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Lecture library ordered newest first.
///
/// Dated lectures come before undated ones; ties are broken by title and
/// then id, so ordering is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lectures: Vec<Lecture>,
}

/// Subject name with the number of lectures filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSummary {
    pub name: String,
    pub lecture_count: usize,
}

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub lecture_count: usize,
    /// Lectures with non blank notes.
    pub noted_count: usize,
    /// Total recording length in seconds.
    pub total_duration: f64,
    /// Half of the recorded hours, rounded: time saved by reviewing notes
    /// instead of replaying recordings.
    pub hours_saved: u64,
}

impl Catalog {
    /// Builds catalog from lectures in any order.
    pub fn new(mut lectures: Vec<Lecture>) -> Self {
        lectures.sort_by(newest_first);
        Self { lectures }
    }

    /// Returns all lectures, newest first.
    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    /// Returns at most `limit` most recent lectures.
    pub fn recent(&self, limit: usize) -> &[Lecture] {
        &self.lectures[..limit.min(self.lectures.len())]
    }

    /// Returns subjects sorted by name with their lecture counts.
    ///
    /// Lectures without a subject are not counted under any name.
    pub fn subjects(&self) -> Vec<SubjectSummary> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for subject in self.lectures.iter().filter_map(Lecture::subject_name) {
            *counts.entry(subject).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(name, lecture_count)| SubjectSummary {
                name: name.to_string(),
                lecture_count,
            })
            .collect()
    }

    /// Returns lectures filed under `subject`, newest first.
    pub fn by_subject(&self, subject: &str) -> Vec<&Lecture> {
        self.lectures
            .iter()
            .filter(|l| l.subject_name() == Some(subject))
            .collect()
    }

    /// Returns lectures matching `query`, newest first.
    ///
    /// Matching is a case insensitive substring test over title, subject,
    /// recording date and notes. A blank query returns every lecture.
    pub fn search(&self, query: &str) -> Vec<&Lecture> {
        self.lectures.iter().filter(|l| l.matches(query)).collect()
    }

    /// Computes dashboard statistics.
    pub fn stats(&self) -> Stats {
        let total_duration: f64 = self
            .lectures
            .iter()
            .map(|l| l.duration)
            .filter(|d| d.is_finite() && *d > 0.0)
            .sum();

        Stats {
            lecture_count: self.lectures.len(),
            noted_count: self.lectures.iter().filter(|l| l.has_notes()).count(),
            total_duration,
            hours_saved: (total_duration / 3600.0 * 0.5).round() as u64,
        }
    }
}

fn newest_first(a: &Lecture, b: &Lecture) -> Ordering {
    let by_date = match (&a.created_at, &b.created_at) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_date
        .then_with(|| a.display_title().cmp(b.display_title()))
        .then_with(|| a.id.cmp(&b.id))
}
