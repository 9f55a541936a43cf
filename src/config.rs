//! Build-time site data.
//!
//! Two records feed every render, both loaded once and then passed around by
//! reference:
//!
//! - [`SiteDefaults`] from `site.toml`: the site-wide title, tagline,
//!   description, base URL, share image and social handles. Every page falls
//!   back to these when it doesn't say otherwise.
//! - [`PackageMeta`] from the project's `package.json`: name, homepage,
//!   repository and the issue tracker the footer links to.
//!
//! ## `site.toml`
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Portfolio"
//! tagline = "Selected Work"
//! description = ""
//! url = "http://localhost:8000"   # Absolute, no trailing slash
//! email = ""
//! image = "/og-image.png"          # Relative to url, or absolute
//!
//! [social]
//! email = "mailto:me@example.com"
//! blog = "https://example.com/blog"
//! github = "https://github.com/me"
//! ```
//!
//! The file is sparse: values it sets are merged over the stock defaults, the
//! rest keep their default. Unknown keys are rejected to catch typos early.
//!
//! ## `package.json`
//!
//! Only `name`, `homepage`, `repository` and `bugs` are read; everything else
//! in the file is ignored. `repository` and `bugs` may be plain strings or
//! npm's object form (`{ "type": "git", "url": "..." }`). Without `bugs`, the
//! tracker is derived from a GitHub-style repository URL (`<repo>/issues`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site-wide fallback metadata loaded from `site.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDefaults {
    /// Site title, used when a page has no title of its own.
    pub title: String,
    /// Short subtitle shown next to the title in the document title.
    pub tagline: String,
    /// Site description. May be empty.
    pub description: String,
    /// Absolute base URL without trailing slash. Canonical URL of the home page.
    pub url: String,
    /// Contact address.
    pub email: String,
    /// Default share image, relative to `url` or absolute.
    pub image: String,
    /// Social network handles rendered by the footer's network links.
    pub social: SocialConfig,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            tagline: "Selected Work".to_string(),
            description: String::new(),
            url: "http://localhost:8000".to_string(),
            email: String::new(),
            image: "/og-image.png".to_string(),
            social: SocialConfig::default(),
        }
    }
}

impl SiteDefaults {
    /// Validate that every field pages fall back to is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("title", &self.title),
            ("tagline", &self.tagline),
            ("image", &self.image),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }

        let url = Url::parse(&self.url)
            .map_err(|e| ConfigError::Validation(format!("url '{}': {e}", self.url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.url.ends_with('/') {
            return Err(ConfigError::Validation(
                "url must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

/// Social network handles. Each value is the full link target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub email: Option<String>,
    pub blog: Option<String>,
    pub github: Option<String>,
}

impl SocialConfig {
    /// Configured handles as `(label, href)` pairs, in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Email", &self.email),
            ("Blog", &self.blog),
            ("GitHub", &self.github),
        ]
        .into_iter()
        .filter_map(|(label, href)| {
            href.as_deref()
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(|h| (label, h))
        })
        .collect()
    }
}

// =============================================================================
// site.toml loading, merging, and validation
// =============================================================================

/// Returns the stock defaults as a `toml::Value::Table`.
///
/// This is the base layer user values are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteDefaults::default()).expect("default site config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, deserialize and validate.
pub fn resolve_site(overlay: Option<toml::Value>) -> Result<SiteDefaults, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let site: SiteDefaults = merged.try_into()?;
    site.validate()?;
    Ok(site)
}

/// Load `SiteDefaults` from a `site.toml` file.
///
/// A missing file is not an error: the stock defaults are used.
pub fn load_site(path: &Path) -> Result<SiteDefaults, ConfigError> {
    if !path.exists() {
        return resolve_site(None);
    }
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_site(Some(overlay))
}

// =============================================================================
// package.json
// =============================================================================

/// Project metadata read from `package.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageMeta {
    pub name: String,
    pub homepage: String,
    pub repository_url: String,
    /// Issue tracker the footer's bug-report link points at.
    pub bugs_url: String,
}

/// The slice of `package.json` we care about.
#[derive(Deserialize)]
struct PackageJson {
    name: String,
    #[serde(default)]
    homepage: String,
    #[serde(default)]
    repository: Option<UrlField>,
    #[serde(default)]
    bugs: Option<UrlField>,
}

/// npm accepts both `"url"` and `{ "url": "..." }` for these fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum UrlField {
    Plain(String),
    Object {
        #[serde(default)]
        url: String,
    },
}

impl UrlField {
    fn into_url(self) -> String {
        match self {
            UrlField::Plain(url) | UrlField::Object { url } => url.trim().to_string(),
        }
    }
}

/// Turn a repository field into a browsable URL.
///
/// Strips the `git+` transport prefix and `.git` suffix npm allows.
fn normalize_repository(raw: &str) -> String {
    let url = raw.strip_prefix("git+").unwrap_or(raw);
    let url = url.strip_suffix(".git").unwrap_or(url);
    url.to_string()
}

/// Parse `package.json` content into `PackageMeta`.
pub fn parse_package(json: &str) -> Result<PackageMeta, ConfigError> {
    let pkg: PackageJson = serde_json::from_str(json)?;

    let repository_url = pkg
        .repository
        .map(|r| normalize_repository(&r.into_url()))
        .unwrap_or_default();
    let bugs_url = match pkg.bugs.map(UrlField::into_url) {
        Some(url) if !url.is_empty() => url,
        _ if !repository_url.is_empty() => format!("{repository_url}/issues"),
        _ => {
            return Err(ConfigError::Validation(
                "package.json needs a bugs or repository url".into(),
            ));
        }
    };

    Ok(PackageMeta {
        name: pkg.name,
        homepage: pkg.homepage,
        repository_url,
        bugs_url,
    })
}

/// Load `PackageMeta` from a `package.json` file. The file must exist.
pub fn load_package(path: &Path) -> Result<PackageMeta, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_package(&content)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Site Configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Pages fall back to these values when they don't set their own.
# Unknown keys will cause an error.

# Site title. Pages without a title use this one.
title = "Portfolio"

# Short subtitle, shown in the document title as "title { tagline }".
tagline = "Selected Work"

# Site description for search engines and share cards.
# Long descriptions are cut at a word boundary around 320 characters.
description = ""

# Absolute base URL of the deployed site, without trailing slash.
# Canonical URLs and share image URLs are built from it.
url = "http://localhost:8000"

# Contact address.
email = ""

# Default share image. A relative path is resolved against url.
image = "/og-image.png"

# ---------------------------------------------------------------------------
# Social networks (shown as links in the footer, in this order)
# ---------------------------------------------------------------------------
[social]
# email = "mailto:me@example.com"
# blog = "https://example.com/blog"
# github = "https://github.com/me"
"##
}
