//! CSS and script assets

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const LECTURE_CARD: &str = include_str!("../assets/components/lecture-card.css");

const DASHBOARD_PAGE: &str = include_str!("../assets/page-dashboard.css");
const LECTURE_PAGE: &str = include_str!("../assets/page-lecture.css");
const NOTES: &str = include_str!("../assets/notes.css");

const SEARCH: &str = include_str!("../assets/search.js");

/// Stylesheet bundles written to the assets directory.
pub const BUNDLES: [&str; 3] = ["dashboard.css", "lecture.css", "notes.css"];

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "dashboard.css",
        &[BASE, LAYOUT, NAV, LECTURE_CARD, DASHBOARD_PAGE],
    )?;
    write_bundled(assets_dir, "lecture.css", &[BASE, LAYOUT, NAV, LECTURE_PAGE])?;
    write_bundled(assets_dir, "notes.css", &[NOTES])?;
    Ok(())
}

/// Scripts written to the assets directory.
pub const SCRIPTS: [&str; 1] = ["search.js"];

/// Writes the library search script to output directory
pub fn write_script_assets(assets_dir: &Path) -> Result<()> {
    fs::write(assets_dir.join("search.js"), SEARCH)
        .context("Failed to write script asset: search.js")
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
