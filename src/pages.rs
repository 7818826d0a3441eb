//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (dashboard,
//! library, lecture, subject). Each page module handles its specific view
//! logic and utilizes shared components from the components module.

pub mod dashboard;
pub mod lecture;
pub mod library;
pub mod subject;

use crate::catalog::SubjectSummary;
use crate::lecture::Lecture;

/// Lecture paired with the link to its page, relative to the linking page.
#[derive(Debug, Clone)]
pub struct LectureLink<'a> {
    pub lecture: &'a Lecture,
    pub href: String,
}

/// Subject summary paired with the link to its page.
#[derive(Debug, Clone)]
pub struct SubjectLink {
    pub summary: SubjectSummary,
    pub href: String,
}
