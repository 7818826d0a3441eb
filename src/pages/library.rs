//! Lecture library page generation

use maud::{Markup, html};

use super::LectureLink;
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::lecture_card::{lecture_card, lecture_grid};
use crate::components::metadata::empty_state;
use crate::components::nav::breadcrumb;
use crate::path::asset_href;

/// Generates the page listing every lecture, with a search box
///
/// Cards carry the lecture's search text so `search.js` can filter them
/// with the same matching as [`crate::catalog::Catalog::search`]. Without
/// script the page is still a complete list.
///
/// # Arguments
///
/// * `site_name`: Site name for title and breadcrumb
/// * `lectures`: Every lecture, newest first, with hrefs relative to the
///   site root
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site_name: &str, lectures: &[LectureLink<'_>]) -> Markup {
    let css = asset_href(0, "dashboard.css");
    let script = asset_href(0, "search.js");

    page_wrapper(
        PageHead::new("All lectures", site_name, "library")
            .with_stylesheets(&[css.as_str()])
            .with_scripts(&[script.as_str()]),
        html! {
            (breadcrumb(site_name, "index.html", &[("All lectures", None)]))

            main class="library-page" {
                div class="page-controls" {
                    h1 class="page-title" { "All lectures" }
                    span class="badge" {
                        (lectures.len())
                        @if lectures.len() == 1 { " lecture" } @else { " lectures" }
                    }
                }

                @if lectures.is_empty() {
                    (empty_state("No lectures yet.", false))
                } @else {
                    div class="search-bar" {
                        input id="lecture-search" class="search-input" type="search"
                            placeholder="Search by title, subject, date or notes"
                            aria-label="Search lectures";
                    }
                    (lecture_grid(html! {
                        @for link in lectures {
                            div class="search-item" data-search=(link.lecture.search_text()) {
                                (lecture_card(link.lecture, &link.href))
                            }
                        }
                    }))
                    div id="no-search-results" class="empty-state" hidden {
                        p { "No lectures found" }
                    }
                }
            }
        },
    )
}
