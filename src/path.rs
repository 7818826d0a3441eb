//! Path utilities for HTML generation
//!
//! The generated site has a fixed two level layout:
//!
//! ```text
//! index.html
//! library.html
//! assets/*.css, assets/search.js
//! lectures/{slug}.html, lectures/{slug}.md
//! subjects/{slug}.html
//! ```

use std::collections::HashSet;

use crate::util::slugify;

pub const ASSETS_DIR: &str = "assets";
pub const LECTURES_DIR: &str = "lectures";
pub const SUBJECTS_DIR: &str = "subjects";

/// Searchable list of every lecture, next to `index.html`.
pub const LIBRARY_PAGE: &str = "library.html";

/// Depth of pages inside `lectures/` and `subjects/`.
pub const NESTED_DEPTH: usize = 1;

/// Returns the `../` prefix leading from a page at `depth` to the site root.
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Returns the href of a stylesheet from a page at `depth`.
pub fn asset_href(depth: usize, name: &str) -> String {
    format!("{}{}/{}", root_prefix(depth), ASSETS_DIR, name)
}

/// Returns a lecture page path relative to the site root.
pub fn lecture_page(slug: &str) -> String {
    format!("{}/{}.html", LECTURES_DIR, slug)
}

/// Returns a lecture notes export path relative to the site root.
pub fn lecture_export(slug: &str) -> String {
    format!("{}/{}.md", LECTURES_DIR, slug)
}

/// Returns a subject page path relative to the site root.
pub fn subject_page(slug: &str) -> String {
    format!("{}/{}.html", SUBJECTS_DIR, slug)
}

/// Assigns a distinct slug to each name, in order.
///
/// Names that slugify to an already taken slug get a numeric suffix
/// (`intro`, `intro-2`, `intro-3`), so two records can never overwrite
/// each other's page.
///
/// # Arguments
///
/// * `names`: Lecture ids or subject names
///
/// # Returns
///
/// One slug per input name, in input order
pub fn unique_slugs<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    let mut slugs = Vec::new();

    for name in names {
        let base = slugify(name);
        let mut slug = base.clone();
        let mut n = 2;
        while !taken.insert(slug.clone()) {
            slug = format!("{}-{}", base, n);
            n += 1;
        }
        slugs.push(slug);
    }

    slugs
}
