//! End-to-end library workflow tests.
//!
//! Reads record directories through the public store API and generates
//! complete sites, checking the files a student would actually open.

mod common;

use anyhow::Result;
use common::{ATOMIC_STRUCTURE, CELL_BIOLOGY, create_record_dir, create_sample_library};
use lectern::{
    Catalog, DirectoryStore, LectureStore, SiteOptions, generate_site, notes_document,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns every generated page with the prefix its links to lecture pages use.
fn linking_pages(output: &Path) -> Result<Vec<(String, &'static str)>> {
    let mut pages = vec![
        (fs::read_to_string(output.join("index.html"))?, ""),
        (fs::read_to_string(output.join("library.html"))?, ""),
    ];
    for dir in ["subjects", "lectures"] {
        for entry in fs::read_dir(output.join(dir))? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "html") {
                pages.push((fs::read_to_string(&path)?, "../"));
            }
        }
    }
    Ok(pages)
}

#[test]
fn test_directory_store_reads_sample_library() -> Result<()> {
    // Arrange
    let library = create_sample_library()?;
    let store = DirectoryStore::new(library.path());

    // Act
    let lectures = store.lectures()?;

    // Assert
    assert_eq!(lectures.len(), 3, "All three records should load");
    let ids: Vec<&str> = lectures.iter().map(|l| l.id.as_str()).collect();
    assert!(ids.contains(&"bio-1"));
    assert!(ids.contains(&"atoms"), "Missing id should come from file stem");
    assert!(ids.contains(&"loose"));

    Ok(())
}

#[test]
fn test_broken_records_are_skipped() -> Result<()> {
    // Arrange
    let library = create_record_dir(&[
        ("bio-1.json", CELL_BIOLOGY),
        ("broken.json", "{ not json"),
        ("readme.txt", "ignored"),
    ])?;

    // Act
    let lectures = DirectoryStore::new(library.path()).lectures()?;

    // Assert
    assert_eq!(lectures.len(), 1);
    assert_eq!(lectures[0].id, "bio-1");

    Ok(())
}

#[test]
fn test_catalog_orders_and_groups_sample_library() -> Result<()> {
    // Arrange
    let library = create_sample_library()?;
    let catalog = Catalog::new(DirectoryStore::new(library.path()).lectures()?);

    // Act
    let order: Vec<&str> = catalog.lectures().iter().map(|l| l.id.as_str()).collect();
    let subjects = catalog.subjects();
    let stats = catalog.stats();

    // Assert
    assert_eq!(order, ["atoms", "bio-1", "loose"], "Newest first, undated last");
    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Biology", "Chemistry"]);
    assert_eq!(stats.lecture_count, 3);
    assert_eq!(stats.noted_count, 2);
    assert_eq!(catalog.by_subject("Biology").len(), 1);

    Ok(())
}

#[test]
fn test_generate_site_from_sample_library() -> Result<()> {
    // Arrange
    let library = create_sample_library()?;
    let output = TempDir::new()?;
    let store = DirectoryStore::new(library.path());

    // Act
    let report = generate_site(&store, &SiteOptions::new("Spring Term"), output.path())?;

    // Assert
    assert_eq!(report.lecture_pages, 3);
    assert_eq!(report.subject_pages, 2);
    assert_eq!(report.exports, 3);

    for path in [
        "index.html",
        "lectures/bio-1.html",
        "lectures/atoms.html",
        "lectures/loose.html",
        "lectures/bio-1.md",
        "subjects/biology.html",
        "subjects/chemistry.html",
        "assets/dashboard.css",
        "assets/lecture.css",
        "assets/notes.css",
    ] {
        assert!(output.path().join(path).exists(), "{} should exist", path);
    }

    Ok(())
}

#[test]
fn test_lecture_page_shows_rendered_notes_and_panels() -> Result<()> {
    // Arrange
    let library = create_sample_library()?;
    let output = TempDir::new()?;
    generate_site(
        &DirectoryStore::new(library.path()),
        &SiteOptions::new("Spring Term"),
        output.path(),
    )?;

    // Act
    let page = fs::read_to_string(output.path().join("lectures/bio-1.html"))?;

    // Assert
    assert!(page.contains("<title>Cell Biology - Spring Term</title>"), "{}", page);
    assert!(page.contains("Duration: 52:05 | Recorded: Feb 12, 2024"), "{}", page);
    assert!(page.contains("<div class=\"notes-content\"><h1>Cells</h1>"), "{}", page);
    assert!(page.contains("The <strong>cell</strong> is the <em>basic unit</em> of life."));
    assert!(page.contains("<ul><li>nucleus</li><li>mitochondria</li><li>ribosomes</li></ul>"));
    assert!(page.contains("<p>#### not a heading</p>"));
    assert!(page.contains("All living things are made of cells"));
    assert!(page.contains("No definition"), "Empty definition should show placeholder");
    assert!(page.contains("Known as the <strong>powerhouse</strong>"));
    assert!(page.contains("href=\"../subjects/biology.html\""));
    assert!(page.contains("src=\"https://cdn.example.com/audio/bio-1.webm\""));

    Ok(())
}

#[test]
fn test_lecture_without_notes_shows_empty_states() -> Result<()> {
    // Arrange
    let library = create_sample_library()?;
    let output = TempDir::new()?;
    generate_site(
        &DirectoryStore::new(library.path()),
        &SiteOptions::new("Spring Term"),
        output.path(),
    )?;

    // Act
    let page = fs::read_to_string(output.path().join("lectures/loose.html"))?;

    // Assert
    assert!(page.contains("Start adding your notes"), "{}", page);
    assert!(page.contains("Click + to add ideas"));
    assert!(page.contains("Recorded: Unknown date"));
    assert!(!page.contains("notes-content"), "No notes means no notes fragment");

    Ok(())
}

#[test]
fn test_exported_notes_match_lecture() -> Result<()> {
    // Arrange
    let library = create_record_dir(&[("atoms.json", ATOMIC_STRUCTURE)])?;
    let output = TempDir::new()?;
    let store = DirectoryStore::new(library.path());
    generate_site(&store, &SiteOptions::new("Chem"), output.path())?;

    // Act
    let exported = fs::read_to_string(output.path().join("lectures/atoms.md"))?;

    // Assert
    assert_eq!(exported, "# Atomic Structure\n\nProtons, neutrons and electrons");
    let lectures = store.lectures()?;
    assert_eq!(exported, notes_document(&lectures[0]));

    Ok(())
}

#[test]
fn test_dashboard_and_subject_pages_link_lectures() -> Result<()> {
    // Arrange
    let library = create_sample_library()?;
    let output = TempDir::new()?;
    generate_site(
        &DirectoryStore::new(library.path()),
        &SiteOptions::new("Spring Term"),
        output.path(),
    )?;

    // Act
    let index = fs::read_to_string(output.path().join("index.html"))?;
    let subject = fs::read_to_string(output.path().join("subjects/chemistry.html"))?;

    // Assert
    assert!(index.contains("href=\"lectures/bio-1.html\""), "{}", index);
    assert!(index.contains("href=\"subjects/chemistry.html\""));
    assert!(index.contains("Spring Term"));
    assert!(subject.contains("href=\"../lectures/atoms.html\""), "{}", subject);
    assert!(!subject.contains("lectures/bio-1.html"), "Biology lecture is not chemistry");

    Ok(())
}

#[test]
fn test_empty_library_generates_empty_dashboard() -> Result<()> {
    // Arrange
    let library = TempDir::new()?;
    let output = TempDir::new()?;

    // Act
    let report = generate_site(
        &DirectoryStore::new(library.path()),
        &SiteOptions::new("Empty"),
        output.path(),
    )?;

    // Assert
    assert_eq!(report.lecture_pages, 0);
    assert_eq!(report.subject_pages, 0);
    let index = fs::read_to_string(output.path().join("index.html"))?;
    assert!(index.contains("No lectures yet."), "{}", index);
    assert!(index.contains("No subjects yet."));

    Ok(())
}

#[test]
fn test_every_lecture_page_is_linked() -> Result<()> {
    // Arrange
    let mut records: Vec<(String, String)> = (0..8)
        .map(|i| {
            (
                format!("talk-{}.json", i),
                format!(r#"{{"title": "Talk {}", "createdAt": "2024-01-{:02}T09:00:00Z"}}"#, i, i + 1),
            )
        })
        .collect();
    records.push(("bio-1.json".to_string(), CELL_BIOLOGY.to_string()));
    let refs: Vec<(&str, &str)> = records
        .iter()
        .map(|(name, json)| (name.as_str(), json.as_str()))
        .collect();
    let library = create_record_dir(&refs)?;
    let output = TempDir::new()?;

    // Act
    generate_site(
        &DirectoryStore::new(library.path()),
        &SiteOptions::new("Term"),
        output.path(),
    )?;

    // Assert
    let pages = linking_pages(output.path())?;
    let mut checked = 0;
    for entry in fs::read_dir(output.path().join("lectures"))? {
        let path = entry?.path();
        if !path.extension().is_some_and(|ext| ext == "html") {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("Generated file names are UTF8");
        let linked = pages.iter().any(|(html, prefix)| {
            html.contains(&format!("href=\"{}lectures/{}\"", prefix, name))
        });
        assert!(linked, "lectures/{} is not linked from any page", name);
        checked += 1;
    }
    assert_eq!(checked, 9);

    let index = fs::read_to_string(output.path().join("index.html"))?;
    assert!(index.contains("href=\"library.html\""), "Dashboard links the library");

    Ok(())
}

#[test]
fn test_library_search_text_matches_catalog_search() -> Result<()> {
    // Arrange
    let library = create_sample_library()?;
    let output = TempDir::new()?;
    let store = DirectoryStore::new(library.path());
    generate_site(&store, &SiteOptions::new("Term"), output.path())?;
    let catalog = Catalog::new(store.lectures()?);

    // Act
    let page = fs::read_to_string(output.path().join("library.html"))?;
    let hits: Vec<&str> = catalog
        .search("MITOCHONDRIA")
        .iter()
        .map(|l| l.id.as_str())
        .collect();

    // Assert
    assert_eq!(hits, ["bio-1"]);
    assert_eq!(page.matches("data-search=").count(), 3, "{}", page);
    assert!(page.contains("No lectures found"));
    assert!(output.path().join("assets/search.js").exists());

    Ok(())
}
