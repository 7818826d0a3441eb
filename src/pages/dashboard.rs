//! Dashboard page generation

use maud::{Markup, html};

use super::{LectureLink, SubjectLink};
use crate::catalog::Stats;
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::lecture_card::{lecture_card, lecture_grid};
use crate::components::metadata::{empty_state, site_header, stat_tile};
use crate::path::{LIBRARY_PAGE, asset_href};

/// Data container for dashboard generation
pub struct DashboardData<'a> {
    pub site_name: &'a str,
    pub stats: Stats,
    pub recent: &'a [LectureLink<'a>],
    pub subjects: &'a [SubjectLink],
}

/// Generates the dashboard (site index) page
///
/// Shows library statistics, the most recent lectures and the subject
/// grid. Empty libraries get the same empty states the note-taking app
/// shows to new users.
///
/// # Arguments
///
/// * `data`: Dashboard data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for the dashboard
pub fn generate(data: DashboardData<'_>) -> Markup {
    let css = asset_href(0, "dashboard.css");

    page_wrapper(
        PageHead::new("Dashboard", data.site_name, "dashboard").with_stylesheets(&[css.as_str()]),
        html! {
            (site_header(data.site_name, Some("Lecture notes and study material")))

            section class="stats" {
                (stat_tile(data.stats.lecture_count, "Lectures"))
                (stat_tile(data.stats.noted_count, "With notes"))
                (stat_tile(data.stats.hours_saved, "Hours saved"))
            }

            section class="recent-lectures" {
                div class="section-heading" {
                    h2 class="section-title" { "Recent lectures" }
                    @if !data.recent.is_empty() {
                        a class="section-link" href=(LIBRARY_PAGE) {
                            "View all lectures"
                        }
                    }
                }
                @if data.recent.is_empty() {
                    (empty_state("No lectures yet.", false))
                } @else {
                    (lecture_grid(html! {
                        @for link in data.recent {
                            (lecture_card(link.lecture, &link.href))
                        }
                    }))
                }
            }

            section class="subjects" {
                h2 class="section-title" { "Subjects" }
                @if data.subjects.is_empty() {
                    (empty_state("No subjects yet.", false))
                } @else {
                    div class="subjects-grid" {
                        @for subject in data.subjects {
                            a class="subject-card" href=(subject.href) {
                                div class="subject-name" { (subject.summary.name) }
                                div class="subject-count" {
                                    (subject.summary.lecture_count)
                                    @if subject.summary.lecture_count == 1 { " lecture" } @else { " lectures" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
