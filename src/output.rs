//! CLI output formatting.
//!
//! Output is information-first: each entity leads with what it is (the site,
//! the package, a page by position and title) and shows details as indented
//! context lines underneath.
//!
//! ```text
//! Site
//!     Source: site.toml
//!     Title: Ada Lovelace
//!     Tagline: Analyst & Engineer
//!     URL: https://ada.example
//!     Image: https://ada.example/media/share.png
//!     Description: Portfolio of Ada Lovelace, analyst and...
//!     Networks: Email, Blog, GitHub
//!
//! Package
//!     Source: package.json
//!     Name: portfolio
//!     Bugs: https://github.com/ada/portfolio/issues
//!
//! Pages
//! 001 Atlas
//!     Source: pages/atlas.toml
//!     Canonical: https://ada.example/atlas/
//!     Image: https://ada.example/media/atlas.png
//! ```
//!
//! Each `format_*` function is pure and returns `Vec<String>` for testability;
//! the `print_*` wrappers write the lines to stdout.

use crate::config::{PackageMeta, SiteDefaults};
use crate::seo::{ResolvedMetadata, absolute_url};
use crate::text::truncate;
use std::path::Path;

/// Descriptions are previewed, not printed in full.
const PREVIEW_LEN: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// A `Label: value` context line at `depth`.
fn detail(depth: usize, label: &str, value: &str) -> String {
    format!("{}{}: {}", indent(depth), label, value)
}

/// Source line: the file path, or a note that stock defaults are in use.
fn source_line(path: &Path) -> String {
    if path.exists() {
        detail(1, "Source", &path.display().to_string())
    } else {
        detail(1, "Source", "stock defaults")
    }
}

/// Format the site defaults and package metadata `check` validated.
pub fn format_check_output(
    site: &SiteDefaults,
    site_path: &Path,
    pkg: &PackageMeta,
    pkg_path: &Path,
) -> Vec<String> {
    let mut lines = vec!["Site".to_string(), source_line(site_path)];
    lines.push(detail(1, "Title", &site.title));
    lines.push(detail(1, "Tagline", &site.tagline));
    lines.push(detail(1, "URL", &site.url));
    lines.push(detail(1, "Image", &absolute_url(&site.url, &site.image)));
    if !site.description.trim().is_empty() {
        let preview = truncate(site.description.trim(), PREVIEW_LEN, true);
        lines.push(detail(1, "Description", &preview));
    }
    let networks: Vec<&str> = site.social.links().into_iter().map(|(l, _)| l).collect();
    if !networks.is_empty() {
        lines.push(detail(1, "Networks", &networks.join(", ")));
    }

    lines.push(String::new());
    lines.push("Package".to_string());
    lines.push(detail(1, "Source", &pkg_path.display().to_string()));
    lines.push(detail(1, "Name", &pkg.name));
    if !pkg.homepage.is_empty() {
        lines.push(detail(1, "Homepage", &pkg.homepage));
    }
    lines.push(detail(1, "Bugs", &pkg.bugs_url));

    lines
}

/// Format resolved metadata for a list of `(source file, metadata)` pages.
pub fn format_pages_output(pages: &[(&Path, ResolvedMetadata)]) -> Vec<String> {
    if pages.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Pages".to_string()];
    for (i, (path, meta)) in pages.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), meta.title));
        lines.push(detail(1, "Source", &path.display().to_string()));
        lines.push(detail(1, "Canonical", &meta.canonical_url));
        lines.push(detail(1, "Image", &meta.image_url));
        if !meta.description.is_empty() {
            let preview = truncate(&meta.description, PREVIEW_LEN, true);
            lines.push(detail(1, "Description", &preview));
        }
    }
    lines
}

/// Print `check` output to stdout.
pub fn print_check_output(
    site: &SiteDefaults,
    site_path: &Path,
    pkg: &PackageMeta,
    pkg_path: &Path,
) {
    for line in format_check_output(site, site_path, pkg, pkg_path) {
        println!("{}", line);
    }
}

/// Print per-page resolution results to stdout.
pub fn print_pages_output(pages: &[(&Path, ResolvedMetadata)]) {
    for line in format_pages_output(pages) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{PageOverride, resolve};
    use crate::test_helpers::*;

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "    ");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn check_output_lists_site_and_package() {
        let lines = format_check_output(
            &sample_site(),
            Path::new("/nonexistent/site.toml"),
            &sample_package(),
            Path::new("package.json"),
        );
        assert_eq!(lines[0], "Site");
        assert_eq!(lines[1], "    Source: stock defaults");
        assert_eq!(lines[2], "    Title: Ada Lovelace");
        assert!(lines.contains(&"    Image: https://ada.example/media/share.png".to_string()));
        assert!(lines.contains(&"    Networks: Email, Blog, GitHub".to_string()));
        assert!(lines.contains(&"Package".to_string()));
        assert!(lines.contains(&"    Source: package.json".to_string()));
        assert!(
            lines.contains(&"    Bugs: https://github.com/ada/portfolio/issues".to_string())
        );
    }

    #[test]
    fn check_output_previews_long_description() {
        let mut site = sample_site();
        site.description = "a very long description ".repeat(10);
        let lines = format_check_output(
            &site,
            Path::new("site.toml"),
            &sample_package(),
            Path::new("package.json"),
        );
        let desc = lines
            .iter()
            .find(|l| l.starts_with("    Description: "))
            .unwrap();
        assert!(desc.ends_with("..."));
    }

    #[test]
    fn check_output_skips_empty_description_and_networks() {
        let mut site = sample_site();
        site.description = String::new();
        site.social = Default::default();
        let lines = format_check_output(
            &site,
            Path::new("site.toml"),
            &sample_package(),
            Path::new("package.json"),
        );
        assert!(!lines.iter().any(|l| l.contains("Description:")));
        assert!(!lines.iter().any(|l| l.contains("Networks:")));
    }

    #[test]
    fn pages_output_empty_is_empty() {
        assert!(format_pages_output(&[]).is_empty());
    }

    #[test]
    fn pages_output_lists_each_page() {
        let site = sample_site();
        let atlas = resolve(
            &PageOverride {
                title: Some("Atlas".into()),
                slug: Some("/atlas/".into()),
                ..Default::default()
            },
            &site,
        );
        let home = resolve(&PageOverride::default(), &site);
        let pages = vec![
            (Path::new("pages/atlas.toml"), atlas),
            (Path::new("pages/home.toml"), home),
        ];

        let lines = format_pages_output(&pages);
        assert_eq!(lines[1], "Pages");
        assert_eq!(lines[2], "001 Atlas");
        assert_eq!(lines[3], "    Source: pages/atlas.toml");
        assert_eq!(lines[4], "    Canonical: https://ada.example/atlas/");
        assert!(lines.contains(&"002 Ada Lovelace".to_string()));
    }
}
