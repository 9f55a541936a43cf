//! Shared fixtures for the folio test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = sample_site();
//! let meta = resolve(&PageOverride::default(), &site);
//! let footer = render_footer(&sample_package(), &site.title, sample_date());
//! ```

use chrono::NaiveDate;

use crate::config::{PackageMeta, SiteDefaults, SocialConfig};

/// A fully-populated, valid site config.
pub fn sample_site() -> SiteDefaults {
    SiteDefaults {
        title: "Ada Lovelace".to_string(),
        tagline: "Analyst & Engineer".to_string(),
        description: "Portfolio of Ada Lovelace, analyst and engineer.".to_string(),
        url: "https://ada.example".to_string(),
        email: "ada@ada.example".to_string(),
        image: "/media/share.png".to_string(),
        social: SocialConfig {
            email: Some("mailto:ada@ada.example".to_string()),
            blog: Some("https://ada.example/blog".to_string()),
            github: Some("https://github.com/ada".to_string()),
        },
    }
}

/// Package metadata as `package.json` would yield it.
pub fn sample_package() -> PackageMeta {
    PackageMeta {
        name: "portfolio".to_string(),
        homepage: "https://ada.example".to_string(),
        repository_url: "https://github.com/ada/portfolio".to_string(),
        bugs_url: "https://github.com/ada/portfolio/issues".to_string(),
    }
}

/// A fixed render date, 2024-01-01.
pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}
