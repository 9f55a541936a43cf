//! Full HTML document shell.
//!
//! Wraps a page body with the resolved head tags and the site footer. The body
//! itself is whatever the caller renders; this module only owns the frame.

use crate::footer::FooterView;
use crate::seo::{ResolvedMetadata, render_head};
use maud::{DOCTYPE, Markup, html};

/// Render a complete document for one page.
pub fn render_document(meta: &ResolvedMetadata, body: Markup, footer: &FooterView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (render_head(meta))
            }
            body {
                main { (body) }
                (footer.render())
            }
        }
    }
}
