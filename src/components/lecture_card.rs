//! Lecture listing components

use maud::{Markup, html};

use crate::lecture::Lecture;

/// Wraps lecture cards in grid container
///
/// # Arguments
///
/// * `cards`: Markup containing individual card elements
///
/// # Returns
///
/// Lecture grid wrapper with cards
pub fn lecture_grid(cards: Markup) -> Markup {
    html! {
        div class="lecture-grid" {
            (cards)
        }
    }
}

/// Renders single lecture card
///
/// Shows title, subject, recording date and duration, with a link to the
/// lecture page.
///
/// # Arguments
///
/// * `lecture`: Lecture to summarise
/// * `href`: Link to the lecture page, relative to the current page
///
/// # Returns
///
/// Lecture card markup
pub fn lecture_card(lecture: &Lecture, href: &str) -> Markup {
    html! {
        div class="lecture-card" {
            div class="lecture-card-header" {
                div class="lecture-card-title" { (lecture.display_title()) }
                div class="lecture-card-subject" { (lecture.display_subject()) }
            }
            div class="lecture-card-body" {
                div class="lecture-meta" {
                    span { (lecture.display_date()) }
                    span class="lecture-duration" { (lecture.display_duration()) }
                }
                div class="lecture-card-actions" {
                    a class="btn btn-primary btn-small" href=(href) { "View" }
                }
            }
        }
    }
}
