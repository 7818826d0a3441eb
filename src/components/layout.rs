//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Head section settings for one generated page.
#[derive(Debug, Clone, Copy)]
pub struct PageHead<'a> {
    /// Page title text, shown before the site name.
    pub title: &'a str,
    pub site_name: &'a str,
    /// Class on `body`, one per page kind (`dashboard`, `lecture`, ...).
    pub page_class: &'a str,
    /// Stylesheet hrefs relative to the page.
    pub stylesheets: &'a [&'a str],
    /// Deferred script hrefs relative to the page.
    pub scripts: &'a [&'a str],
}

impl<'a> PageHead<'a> {
    /// Creates head settings with no stylesheets or scripts.
    pub fn new(title: &'a str, site_name: &'a str, page_class: &'a str) -> Self {
        Self {
            title,
            site_name,
            page_class,
            stylesheets: &[],
            scripts: &[],
        }
    }

    pub fn with_stylesheets(mut self, stylesheets: &'a [&'a str]) -> Self {
        self.stylesheets = stylesheets;
        self
    }

    pub fn with_scripts(mut self, scripts: &'a [&'a str]) -> Self {
        self.scripts = scripts;
        self
    }
}

/// Wraps page content with standard HTML structure
///
/// Every page shares the document shell: charset, viewport, a description
/// naming the site, the page's stylesheets and scripts, the content
/// container and the footer. The `body` class lets stylesheets target one
/// page kind.
///
/// # Arguments
///
/// * `head`: Title, site name, page class and linked assets
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(head: PageHead<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content={ "Lecture notes and study material from " (head.site_name) };
                title { (head.title) " - " (head.site_name) }
                @for stylesheet in head.stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                @for script in head.scripts {
                    script src=(script) defer {}
                }
            }
            body class=(head.page_class) {
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
