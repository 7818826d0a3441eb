//! Lecture notes renderer and static site generator.

mod assets;
pub mod catalog;
pub mod components;
mod config;
pub mod export;
pub mod lecture;
pub mod markup;
pub mod pages;
pub mod path;
mod site;
pub mod store;
mod util;

pub use assets::{write_css_assets, write_script_assets};
pub use catalog::{Catalog, Stats, SubjectSummary};
pub use config::Config;
pub use export::{export_file_name, notes_document};
pub use lecture::{DeepDive, Flashcard, Lecture, VocabTerm};
pub use markup::{NotesRenderer, render};
pub use site::{SiteOptions, SiteReport, generate_site};
pub use store::{DirectoryStore, LectureStore, MemoryStore};
pub use util::{format_date, format_duration, slugify};
