//! Lecture workspace page generation

use maud::{Markup, html};

use crate::components::layout::{PageHead, page_wrapper};
use crate::components::metadata::empty_state;
use crate::components::nav::breadcrumb;
use crate::export::export_file_name;
use crate::lecture::{DeepDive, Lecture};
use crate::markup::NotesRenderer;
use crate::path::{NESTED_DEPTH, asset_href, root_prefix};

/// Container class for rendered deep dive explanations.
const DEEP_DIVE_CONTAINER_CLASS: &str = "deep-dive-content";

/// Data container for lecture page generation
pub struct LecturePageData<'a> {
    pub site_name: &'a str,
    pub lecture: &'a Lecture,
    /// Link to the lecture's subject page, if it has a subject.
    pub subject_href: Option<String>,
    /// Link to the exported notes document.
    pub export_href: String,
    pub renderer: &'a NotesRenderer,
}

/// Generates the lecture workspace page
///
/// Layout follows the note-taking app's lecture view: title and recording
/// metadata, the audio player, rendered notes, then the study panels (key
/// ideas, vocabulary, deep dives) and the review tools built from them
/// (quick review, flashcards).
///
/// # Arguments
///
/// * `data`: Lecture page data container
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(data: LecturePageData<'_>) -> Markup {
    let lecture = data.lecture;
    let title = lecture.display_title();
    let stylesheets = [
        asset_href(NESTED_DEPTH, "lecture.css"),
        asset_href(NESTED_DEPTH, "notes.css"),
    ];
    let stylesheet_refs: Vec<&str> = stylesheets.iter().map(|s| s.as_str()).collect();
    let index_path = format!("{}index.html", root_prefix(NESTED_DEPTH));

    let mut trail: Vec<(&str, Option<String>)> = Vec::new();
    if let (Some(subject), Some(href)) = (lecture.subject_name(), &data.subject_href) {
        trail.push((subject, Some(href.clone())));
    }
    trail.push((title, None));

    page_wrapper(
        PageHead::new(title, data.site_name, "lecture").with_stylesheets(&stylesheet_refs),
        html! {
            (breadcrumb(data.site_name, &index_path, &trail))

            main class="lecture-workspace" {
                div class="lecture-header" {
                    h1 class="lecture-title" { (title) }
                    p class="lecture-metadata" { (lecture.metadata_line()) }
                    @if let Some(url) = &lecture.audio_url {
                        audio class="lecture-audio" controls src=(url) {}
                    }
                    div class="lecture-actions" {
                        a class="btn btn-secondary" href=(data.export_href) download=(export_file_name(lecture)) {
                            "Download notes"
                        }
                    }
                }

                div class="workspace-columns" {
                    section class="notes-panel" {
                        h2 class="panel-title" { "Notes" }
                        @if lecture.has_notes() {
                            (data.renderer.render_markup(&lecture.notes))
                        } @else {
                            (empty_state("Start adding your notes", false))
                        }
                    }

                    aside class="study-panels" {
                        (key_ideas_panel(&lecture.key_ideas))
                        (vocabulary_panel(lecture))
                        (deep_dives_panel(&lecture.deep_dives))
                    }
                }

                (quick_review(lecture))
                (flashcards(lecture))
            }
        },
    )
}

fn key_ideas_panel(ideas: &[String]) -> Markup {
    html! {
        section class="study-panel key-ideas" {
            h2 class="panel-title" { "Key ideas" }
            @if ideas.is_empty() {
                (empty_state("Click + to add ideas", true))
            } @else {
                @for idea in ideas {
                    div class="idea-item" { span { (idea) } }
                }
            }
        }
    }
}

fn vocabulary_panel(lecture: &Lecture) -> Markup {
    html! {
        section class="study-panel vocabulary" {
            h2 class="panel-title" { "Vocabulary" }
            @if lecture.vocabulary.is_empty() {
                (empty_state("Click + to add terms", true))
            } @else {
                @for item in &lecture.vocabulary {
                    div class="vocab-item" {
                        span { strong { (item.term) } ": " (item.display_definition()) }
                    }
                }
            }
        }
    }
}

fn deep_dives_panel(dives: &[DeepDive]) -> Markup {
    let renderer = NotesRenderer::with_container_class(DEEP_DIVE_CONTAINER_CLASS);

    html! {
        section class="study-panel deep-dives" {
            h2 class="panel-title" { "Deep dives" }
            @if dives.is_empty() {
                (empty_state("Click + to add deep dives", true))
            } @else {
                @for dive in dives {
                    details class="deep-dive-item" {
                        summary { (dive.topic) }
                        (renderer.render_markup(&dive.content))
                        @if !dive.examples.is_empty() {
                            ul class="deep-dive-examples" {
                                @for example in &dive.examples {
                                    li { (example) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Quick review lists the key ideas for a last look before an exam.
fn quick_review(lecture: &Lecture) -> Markup {
    html! {
        section class="quick-review" {
            h2 class="panel-title" { "Quick review" }
            @if !lecture.has_notes() && lecture.key_ideas.is_empty() {
                (empty_state("Add notes or key ideas first", true))
            } @else if lecture.key_ideas.is_empty() {
                (empty_state("Add key ideas to build a review list", true))
            } @else {
                ul {
                    @for idea in &lecture.key_ideas {
                        li { (idea) }
                    }
                }
            }
        }
    }
}

/// Flashcards reveal their answer on click through `details`, without script.
fn flashcards(lecture: &Lecture) -> Markup {
    let cards = lecture.flashcards();

    html! {
        section class="flashcards" {
            h2 class="panel-title" { "Flashcards" }
            @if cards.is_empty() {
                (empty_state("Add some key ideas first to create flashcards", true))
            } @else {
                div class="flashcard-display" {
                    @for card in &cards {
                        details class="flashcard" {
                            summary class="flashcard-question" { (card.question) }
                            div class="flashcard-answer" { (card.answer) }
                        }
                    }
                }
            }
        }
    }
}
