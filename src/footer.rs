//! Site footer.
//!
//! The footer is the same on every page:
//!
//! ```text
//! [logo]                  → home link
//! [Email] [Blog] [GitHub] → network links
//! Found a bug?            → the project's issue tracker
//! © 2024 Ada Lovelace — All Rights Reserved
//! ```
//!
//! [`render_footer`] builds a [`FooterView`] from the package metadata, the
//! site title and a date. The date is a parameter so the copyright year never
//! depends on the machine clock inside this module; the binary passes today.

use crate::config::{PackageMeta, SocialConfig};
use chrono::Datelike;
use maud::{Markup, html};

/// Minimal logo unit: the site title as a wordmark, without tagline.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoUnit {
    pub title: String,
}

impl LogoUnit {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            div.logounit."logounit--minimal" {
                span.logounit__title { (self.title) }
            }
        }
    }
}

/// One social network link.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkLink {
    pub label: String,
    pub href: String,
}

/// Minimal row of social network links.
///
/// Links carry their label only as `aria-label` and `title`, leaving the
/// visible part to an icon in CSS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Networks {
    pub links: Vec<NetworkLink>,
}

impl Networks {
    pub fn from_social(social: &SocialConfig) -> Self {
        Self {
            links: social
                .links()
                .into_iter()
                .map(|(label, href)| NetworkLink {
                    label: label.to_string(),
                    href: href.to_string(),
                })
                .collect(),
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            @if !self.links.is_empty() {
                aside.networks."networks--minimal" {
                    @for link in &self.links {
                        a.networks__link
                            href=(link.href)
                            title=(link.label)
                            aria-label=(link.label)
                        {}
                    }
                }
            }
        }
    }
}

/// Everything the footer shows, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub home_href: String,
    pub logo: LogoUnit,
    pub networks: Networks,
    pub bugs_url: String,
    pub year: i32,
    /// `© {year} {site title} — All Rights Reserved`
    pub copyright: String,
}

/// Format the copyright line.
pub fn copyright_line(year: i32, site_title: &str) -> String {
    format!("© {year} {site_title} — All Rights Reserved")
}

/// Build the footer for `site_title`, dated `now`.
///
/// The network unit starts empty; add links with [`FooterView::with_networks`].
///
/// ```
/// use chrono::NaiveDate;
/// use folio::footer::render_footer;
/// # use folio::config::parse_package;
/// # let pkg = parse_package(r#"{"name":"p","bugs":"https://bugs.example"}"#).unwrap();
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let footer = render_footer(&pkg, "MySite", now);
/// assert!(footer.copyright.contains("© 2024 MySite"));
/// ```
pub fn render_footer(pkg: &PackageMeta, site_title: &str, now: impl Datelike) -> FooterView {
    let year = now.year();
    FooterView {
        home_href: "/".to_string(),
        logo: LogoUnit::new(site_title),
        networks: Networks::default(),
        bugs_url: pkg.bugs_url.clone(),
        year,
        copyright: copyright_line(year, site_title),
    }
}

impl FooterView {
    /// Fill the network unit from the site's social handles.
    pub fn with_networks(mut self, social: &SocialConfig) -> Self {
        self.networks = Networks::from_social(social);
        self
    }

    pub fn render(&self) -> Markup {
        html! {
            footer.footer {
                a href=(self.home_href) {
                    (self.logo.render())
                }

                (self.networks.render())

                p.footer__actions {
                    a href=(self.bugs_url) { "Found a bug?" }
                }
                p.footer__copyright {
                    small { (self.copyright) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn copyright_uses_year_of_now() {
        let footer = render_footer(&sample_package(), "MySite", date(2024, 1, 1));
        assert_eq!(footer.year, 2024);
        assert!(footer.copyright.contains("© 2024 MySite"));
        assert_eq!(footer.copyright, "© 2024 MySite — All Rights Reserved");
    }

    #[test]
    fn year_boundary_uses_calendar_year() {
        let footer = render_footer(&sample_package(), "MySite", date(2023, 12, 31));
        assert_eq!(footer.year, 2023);
    }

    #[test]
    fn bug_link_points_at_package_bugs() {
        let pkg = sample_package();
        let footer = render_footer(&pkg, "MySite", date(2024, 6, 1));
        assert_eq!(footer.bugs_url, pkg.bugs_url);

        let html = footer.render().into_string();
        assert!(html.contains(&format!(r#"<a href="{}">Found a bug?</a>"#, pkg.bugs_url)));
    }

    #[test]
    fn footer_links_home_with_minimal_logo() {
        let footer = render_footer(&sample_package(), "MySite", date(2024, 6, 1));
        assert_eq!(footer.home_href, "/");
        assert_eq!(footer.logo.title, "MySite");

        let html = footer.render().into_string();
        assert!(html.contains(r#"<a href="/">"#));
        assert!(html.contains("logounit--minimal"));
        assert!(html.contains("MySite"));
    }

    #[test]
    fn footer_renders_copyright() {
        let html = render_footer(&sample_package(), "MySite", date(2024, 6, 1))
            .render()
            .into_string();
        assert!(html.contains("<small>© 2024 MySite — All Rights Reserved</small>"));
    }

    #[test]
    fn footer_without_networks_renders_no_aside() {
        let html = render_footer(&sample_package(), "MySite", date(2024, 6, 1))
            .render()
            .into_string();
        assert!(!html.contains("networks"));
    }

    #[test]
    fn with_networks_adds_social_links_in_order() {
        let site = sample_site();
        let footer = render_footer(&sample_package(), &site.title, date(2024, 6, 1))
            .with_networks(&site.social);

        let labels: Vec<&str> = footer
            .networks
            .links
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Email", "Blog", "GitHub"]);

        let html = footer.render().into_string();
        assert!(html.contains(r#"aria-label="GitHub""#));
        assert!(html.contains(r#"href="https://github.com/ada""#));
        assert!(html.contains("networks--minimal"));
        // labels are not rendered as visible text
        assert!(!html.contains(">GitHub<"));
    }

    #[test]
    fn logo_renders_title_only() {
        let html = LogoUnit::new("Ada").render().into_string();
        assert_eq!(
            html,
            r#"<div class="logounit logounit--minimal"><span class="logounit__title">Ada</span></div>"#
        );
    }

    #[test]
    fn footer_escapes_site_title() {
        let html = render_footer(&sample_package(), "<b>Ada</b>", date(2024, 6, 1))
            .render()
            .into_string();
        assert!(!html.contains("<b>Ada</b>"));
        assert!(html.contains("&lt;b&gt;Ada&lt;/b&gt;"));
    }
}
