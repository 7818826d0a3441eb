//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Displays hierarchical navigation with the site name as root link and
/// the trail below it (subject, lecture). Used on lecture and subject pages
/// to show the current location and lead back to the dashboard.
///
/// # Arguments
///
/// * `site_name`: Site name for root breadcrumb link
/// * `index_path`: Relative path back to index.html
/// * `components`: Trail entries with optional link targets (None for current)
///
/// # Returns
///
/// Breadcrumb navigation markup with links and separators
pub fn breadcrumb(
    site_name: &str,
    index_path: &str,
    components: &[(&str, Option<String>)],
) -> Markup {
    html! {
        header {
            div class="breadcrumb" {
                a href=(index_path) class="breadcrumb-link" { (site_name) }
                @for (component, href) in components {
                    span class="breadcrumb-separator" { "/" }
                    @if let Some(link) = href {
                        a href=(link) class="breadcrumb-link" { (*component) }
                    } @else {
                        span class="breadcrumb-current" { (*component) }
                    }
                }
            }
        }
    }
}
