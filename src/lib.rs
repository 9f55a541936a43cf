//! # Folio
//!
//! Head metadata and footer rendering for a static portfolio site.
//!
//! A portfolio has a handful of site-wide facts (title, tagline, description,
//! base URL, share image, social handles) and many pages that each override a
//! few of them. Folio resolves what each page's `<head>` should say, renders
//! the tags, and renders the footer every page shares.
//!
//! # Data Flow
//!
//! ```text
//! site.toml    → SiteDefaults ─┐
//! page.toml    → PageOverride ─┴→ seo::resolve   → ResolvedMetadata → seo::render_head
//! package.json → PackageMeta  ──→ footer::render_footer (+ date) → FooterView → render
//! ```
//!
//! Everything past loading is pure: records go in as parameters, markup comes
//! out. Nothing reaches for global state or the clock, so every render is
//! reproducible from its inputs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` and `package.json` loading, merging and validation |
//! | [`seo`] | Page metadata resolution and head tag rendering |
//! | [`text`] | Word-boundary truncation for descriptions |
//! | [`footer`] | Footer view: logo, network links, bug link, copyright |
//! | [`document`] | Full HTML document shell |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fallbacks, Not Errors
//!
//! A page that sets nothing is the home page, not a broken page. Every page
//! field has a site-wide fallback, so resolution can't fail; the only errors
//! live at the edges, in loading and validating the site data.
//!
//! ## Maud for Markup
//!
//! Tags are generated with [Maud](https://maud.lambda.xyz/): templates are
//! checked at compile time and every interpolated value is escaped, which
//! matters here because titles and descriptions are author-supplied text.

pub mod config;
pub mod document;
pub mod footer;
pub mod output;
pub mod seo;
pub mod text;

#[cfg(test)]
pub(crate) mod test_helpers;
