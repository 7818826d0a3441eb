//! Page footer component

use maud::{Markup, html};

/// Renders the footer shared by every generated page.
pub fn footer() -> Markup {
    html! {
        footer {
            p { "Generated by " strong { "Lectern" } }
        }
    }
}
