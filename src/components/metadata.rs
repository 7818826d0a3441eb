//! Site and lecture header components

use maud::{Markup, html};

/// Renders site header with name and optional tagline
///
/// Displays the site name prominently with the tagline underneath.
/// Used at top of the dashboard.
///
/// # Arguments
///
/// * `name`: Site name
/// * `tagline`: Optional line shown below the name
///
/// # Returns
///
/// Site header markup
pub fn site_header(name: &str, tagline: Option<&str>) -> Markup {
    html! {
        header class="site-header" {
            h1 class="site-name" { (name) }
            @if let Some(text) = tagline {
                p class="site-tagline" { (text) }
            }
        }
    }
}

/// Renders a labelled statistic tile.
pub fn stat_tile(value: impl std::fmt::Display, label: &str) -> Markup {
    html! {
        div class="stat-tile" {
            span class="stat-value" { (value.to_string()) }
            span class="stat-label" { (label) }
        }
    }
}

/// Renders an empty state box.
///
/// `small` selects the compact variant used inside sidebar panels.
pub fn empty_state(message: &str, small: bool) -> Markup {
    html! {
        @if small {
            div class="empty-state-small" { (message) }
        } @else {
            div class="empty-state" {
                p { (message) }
            }
        }
    }
}
