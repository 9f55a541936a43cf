//! Page metadata resolution and head tags.
//!
//! Every page carries the same set of head metadata: a title, a description,
//! a share image and a canonical URL. Most pages only set a few of these
//! themselves (a project page has a title, a description and a screenshot, the
//! home page has nothing), so each field is resolved independently from two
//! sources:
//!
//! ```text
//! title:        page title       → site title
//! tagline:                          site tagline
//! description:  page description → site description    (then truncated)
//! image:        page image       → site image          (then made absolute)
//! canonical:    site url + slug  → site url
//! ```
//!
//! A page value wins when it is present and not empty. Values are used exactly
//! as written: no trimming, so a padded description is measured with its
//! padding. Missing values are the normal case, not an error, so [`resolve`]
//! is infallible.
//!
//! [`render_head`] turns the resolved record into `<head>` tags: the document
//! title, description, image, canonical link and the Open Graph set.

use crate::config::{ConfigError, SiteDefaults};
use crate::text::truncate;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

/// Descriptions longer than this are cut at a word boundary.
pub const DESCRIPTION_LIMIT: usize = 320;

/// Per-page metadata supplied by the page author. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Share image, relative to the site URL or absolute.
    pub image: Option<String>,
    /// Path of the page below the site URL, e.g. `/projects/atlas/`.
    pub slug: Option<String>,
}

/// Head metadata for one page, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMetadata {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub image_url: String,
    pub canonical_url: String,
}

/// Resolve a field from sources in priority order.
///
/// Returns the first value that isn't `None` or empty, unchanged.
fn first_non_empty(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| opt.filter(|s| !s.is_empty()).map(String::from))
        .next()
}

/// Join a site-relative path onto the base URL with exactly one `/` between.
fn join_base(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Make `value` absolute against the site base URL.
///
/// `http` and `https` URLs are returned as is. Protocol-relative values
/// (`//cdn.example/a.png`) take the base URL's scheme. Anything else, including
/// names with a colon such as `photo:1.png`, is a path below the base URL.
pub fn absolute_url(base: &str, value: &str) -> String {
    let is_web_url = Url::parse(value).is_ok_and(|u| matches!(u.scheme(), "http" | "https"));
    if is_web_url {
        return value.to_string();
    }
    if value.starts_with("//") {
        let scheme = Url::parse(base)
            .map(|u| u.scheme().to_string())
            .unwrap_or_else(|_| "https".to_string());
        return format!("{scheme}:{value}");
    }
    join_base(base, value)
}

/// Resolve a page's head metadata against the site defaults.
///
/// ```
/// use folio::config::SiteDefaults;
/// use folio::seo::{PageOverride, resolve};
///
/// let site = SiteDefaults {
///     url: "https://ada.example".into(),
///     ..Default::default()
/// };
/// let page = PageOverride {
///     title: Some("Atlas".into()),
///     slug: Some("/atlas/".into()),
///     ..Default::default()
/// };
///
/// let meta = resolve(&page, &site);
/// assert_eq!(meta.title, "Atlas");
/// assert_eq!(meta.canonical_url, "https://ada.example/atlas/");
/// assert_eq!(meta.image_url, "https://ada.example/og-image.png");
/// ```
pub fn resolve(page: &PageOverride, site: &SiteDefaults) -> ResolvedMetadata {
    let title =
        first_non_empty(&[page.title.as_deref(), Some(site.title.as_str())]).unwrap_or_default();

    let description =
        first_non_empty(&[page.description.as_deref(), Some(site.description.as_str())])
            .map(|d| truncate(&d, DESCRIPTION_LIMIT, true))
            .unwrap_or_default();

    let image =
        first_non_empty(&[page.image.as_deref(), Some(site.image.as_str())]).unwrap_or_default();

    let canonical_url = match first_non_empty(&[page.slug.as_deref()]) {
        Some(slug) => join_base(&site.url, &slug),
        None => site.url.clone(),
    };

    ResolvedMetadata {
        title,
        tagline: site.tagline.clone(),
        description,
        image_url: absolute_url(&site.url, &image),
        canonical_url,
    }
}

/// Load a page override from a TOML file.
///
/// ```toml
/// title = "Atlas"
/// description = "A mapping tool for hiking trails."
/// image = "/projects/atlas/share.png"
/// slug = "/atlas/"
/// ```
pub fn load_page_override(path: &Path) -> Result<PageOverride, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// The bare site title: `"{title} { {tagline} }"`, lowercased.
pub fn default_title(meta: &ResolvedMetadata) -> String {
    format!(
        "{} {{ {} }}",
        meta.title.to_lowercase(),
        meta.tagline.to_lowercase()
    )
}

/// The `<title>` text: the page title followed by the default title.
///
/// ```text
/// Atlas // atlas { designer & developer }
/// ```
pub fn document_title(meta: &ResolvedMetadata) -> String {
    format!("{} // {}", meta.title, default_title(meta))
}

/// Render the head tags for a page. Goes inside `<head>`.
pub fn render_head(meta: &ResolvedMetadata) -> Markup {
    html! {
        title { (document_title(meta)) }

        // General tags
        meta name="description" content=(meta.description);
        meta name="image" content=(meta.image_url);
        link rel="canonical" href=(meta.canonical_url);

        // Open Graph
        meta property="og:url" content=(meta.canonical_url);
        meta property="og:title" content=(meta.title);
        meta property="og:description" content=(meta.description);
        meta property="og:image" content=(meta.image_url);
    }
}
