//! Static site generation for a lecture library.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::{write_css_assets, write_script_assets};
use crate::catalog::{Catalog, DEFAULT_RECENT_LIMIT};
use crate::export::notes_document;
use crate::lecture::Lecture;
use crate::markup::NotesRenderer;
use crate::pages::{self, LectureLink, SubjectLink};
use crate::path::{
    ASSETS_DIR, LECTURES_DIR, LIBRARY_PAGE, NESTED_DEPTH, SUBJECTS_DIR, lecture_export,
    lecture_page, root_prefix, subject_page, unique_slugs,
};
use crate::store::LectureStore;

/// Options controlling site generation.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Name shown in page titles and the dashboard header.
    pub site_name: String,
    /// Number of lectures in the dashboard's recent list.
    pub recent_limit: usize,
}

impl SiteOptions {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub index_path: PathBuf,
    pub lecture_pages: usize,
    pub subject_pages: usize,
    pub exports: usize,
}

/// Generates the complete static site for every lecture in `store`.
///
/// Writes the dashboard, the searchable library of all lectures, one page
/// and one notes export per lecture, one page per subject, the stylesheet
/// bundles and the search script. Existing files at the same
/// paths are overwritten; other files in `output` are left alone.
///
/// # Arguments
///
/// * `store`: Source of lecture records
/// * `options`: Site name and dashboard settings
/// * `output`: Output directory, created if missing
///
/// # Returns
///
/// Report with the number of generated pages
///
/// # Errors
///
/// Returns error if the store cannot be read or any file cannot be written
pub fn generate_site(
    store: &dyn LectureStore,
    options: &SiteOptions,
    output: &Path,
) -> Result<SiteReport> {
    let catalog = Catalog::new(store.lectures().context("Failed to load lectures")?);
    info!("Loaded {} lectures", catalog.lectures().len());

    for dir in [ASSETS_DIR, LECTURES_DIR, SUBJECTS_DIR] {
        let path = output.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    write_css_assets(&output.join(ASSETS_DIR)).context("Failed to write CSS assets")?;
    write_script_assets(&output.join(ASSETS_DIR)).context("Failed to write script assets")?;

    // Pair each lecture with its slug once; ids are not trusted to be unique.
    let lecture_slugs = unique_slugs(catalog.lectures().iter().map(|l| l.id.as_str()));
    let entries: Vec<(&Lecture, &str)> = catalog
        .lectures()
        .iter()
        .zip(lecture_slugs.iter().map(String::as_str))
        .collect();

    let subjects = catalog.subjects();
    let subject_slugs = unique_slugs(subjects.iter().map(|s| s.name.as_str()));
    let subject_slug_by_name: HashMap<&str, &str> = subjects
        .iter()
        .zip(&subject_slugs)
        .map(|(s, slug)| (s.name.as_str(), slug.as_str()))
        .collect();

    let prefix = root_prefix(NESTED_DEPTH);
    let renderer = NotesRenderer::new();

    for &(lecture, slug) in &entries {
        let export_rel = lecture_export(slug);
        write_file(&output.join(&export_rel), &notes_document(lecture))?;

        let subject_href = lecture
            .subject_name()
            .and_then(|name| subject_slug_by_name.get(name))
            .map(|slug| format!("{}{}", prefix, subject_page(slug)));

        let html = pages::lecture::generate(pages::lecture::LecturePageData {
            site_name: &options.site_name,
            lecture,
            subject_href,
            export_href: format!("{}{}", prefix, export_rel),
            renderer: &renderer,
        });
        write_file(&output.join(lecture_page(slug)), &html.into_string())?;
        debug!(id = %lecture.id, slug = %slug, "generated lecture page");
    }
    info!("Generated {} lecture pages", entries.len());

    for (summary, slug) in subjects.iter().zip(&subject_slugs) {
        let links: Vec<LectureLink<'_>> = entries
            .iter()
            .filter(|(lecture, _)| lecture.subject_name() == Some(summary.name.as_str()))
            .map(|entry| lecture_link(entry, NESTED_DEPTH))
            .collect();

        let html = pages::subject::generate(&options.site_name, &summary.name, &links);
        write_file(&output.join(subject_page(slug)), &html.into_string())?;
    }
    info!("Generated {} subject pages", subjects.len());

    // Every lecture page is reachable from here, whatever its subject or age.
    let all: Vec<LectureLink<'_>> = entries.iter().map(|entry| lecture_link(entry, 0)).collect();
    let html = pages::library::generate(&options.site_name, &all);
    write_file(&output.join(LIBRARY_PAGE), &html.into_string())?;

    // Catalog order is newest first, so the recent list is a prefix.
    let recent_count = catalog.recent(options.recent_limit).len();
    let recent: Vec<LectureLink<'_>> = entries[..recent_count]
        .iter()
        .map(|entry| lecture_link(entry, 0))
        .collect();
    let subject_links: Vec<SubjectLink> = subjects
        .iter()
        .zip(&subject_slugs)
        .map(|(summary, slug)| SubjectLink {
            summary: summary.clone(),
            href: subject_page(slug),
        })
        .collect();

    let html = pages::dashboard::generate(pages::dashboard::DashboardData {
        site_name: &options.site_name,
        stats: catalog.stats(),
        recent: &recent,
        subjects: &subject_links,
    });
    let index_path = output.join("index.html");
    write_file(&index_path, &html.into_string())?;
    info!("Generated: {}", index_path.display());

    Ok(SiteReport {
        index_path,
        lecture_pages: entries.len(),
        subject_pages: subjects.len(),
        exports: entries.len(),
    })
}

/// Links a lecture page from a page at `depth`.
fn lecture_link<'a>(&(lecture, slug): &(&'a Lecture, &str), depth: usize) -> LectureLink<'a> {
    LectureLink {
        lecture,
        href: format!("{}{}", root_prefix(depth), lecture_page(slug)),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
