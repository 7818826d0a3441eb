//! Subject page generation

use maud::{Markup, html};

use super::LectureLink;
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::lecture_card::{lecture_card, lecture_grid};
use crate::components::metadata::empty_state;
use crate::components::nav::breadcrumb;
use crate::path::{NESTED_DEPTH, asset_href, root_prefix};

/// Generates the page listing every lecture of one subject
///
/// # Arguments
///
/// * `site_name`: Site name for title and breadcrumb
/// * `subject`: Subject name
/// * `lectures`: Lectures of the subject with hrefs relative to `subjects/`
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site_name: &str, subject: &str, lectures: &[LectureLink<'_>]) -> Markup {
    let css = asset_href(NESTED_DEPTH, "dashboard.css");
    let index_path = format!("{}index.html", root_prefix(NESTED_DEPTH));

    page_wrapper(
        PageHead::new(subject, site_name, "subject").with_stylesheets(&[css.as_str()]),
        html! {
            (breadcrumb(site_name, &index_path, &[(subject, None)]))

            main class="subject-page" {
                div class="page-controls" {
                    h1 class="page-title" { (subject) }
                    span class="badge" {
                        (lectures.len())
                        @if lectures.len() == 1 { " lecture" } @else { " lectures" }
                    }
                }

                @if lectures.is_empty() {
                    (empty_state("No lectures in this subject yet.", false))
                } @else {
                    (lecture_grid(html! {
                        @for link in lectures {
                            (lecture_card(link.lecture, &link.href))
                        }
                    }))
                }
            }
        },
    )
}
