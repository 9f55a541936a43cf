use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use folio::config::{self, PackageMeta, SiteDefaults};
use folio::document::render_document;
use folio::footer::{FooterView, render_footer};
use folio::output;
use folio::seo::{self, PageOverride, render_head, resolve};
use maud::html;
use std::path::{Path, PathBuf};

/// Page override flags shared by commands that resolve a page.
#[derive(clap::Args, Clone)]
struct PageArgs {
    /// Page override file (TOML with title, description, image, slug)
    #[arg(long)]
    page: Option<PathBuf>,

    /// Page title (overrides the file)
    #[arg(long)]
    title: Option<String>,

    /// Page description (overrides the file)
    #[arg(long)]
    description: Option<String>,

    /// Share image, relative to the site URL or absolute (overrides the file)
    #[arg(long)]
    image: Option<String>,

    /// Page path below the site URL, e.g. /projects/atlas/ (overrides the file)
    #[arg(long)]
    slug: Option<String>,
}

impl PageArgs {
    /// Load the override file, if any, then apply flags on top.
    fn to_override(&self) -> Result<PageOverride, config::ConfigError> {
        let mut page = match &self.page {
            Some(path) => seo::load_page_override(path)?,
            None => PageOverride::default(),
        };
        if self.title.is_some() {
            page.title = self.title.clone();
        }
        if self.description.is_some() {
            page.description = self.description.clone();
        }
        if self.image.is_some() {
            page.image = self.image.clone();
        }
        if self.slug.is_some() {
            page.slug = self.slug.clone();
        }
        Ok(page)
    }
}

/// Copyright year flag shared by commands that render the footer.
#[derive(clap::Args, Clone)]
struct YearArgs {
    /// Copyright year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,
}

impl YearArgs {
    fn date(&self) -> Result<NaiveDate, Box<dyn std::error::Error>> {
        match self.year {
            None => Ok(Local::now().date_naive()),
            Some(year) => NaiveDate::from_ymd_opt(year, 1, 1)
                .ok_or_else(|| format!("year {year} is out of range").into()),
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Head metadata and footer for a static portfolio site")]
#[command(long_about = "\
Head metadata and footer for a static portfolio site

Site-wide defaults come from site.toml, project metadata from package.json.
Each page may override title, description, image and slug; anything it
leaves out falls back to the site defaults.

Resolution (first available wins):
  Title:       page title → site title
  Description: page description → site description (cut at ~320 chars)
  Image:       page image → site image (made absolute against url)
  Canonical:   url + page slug → url

Run 'folio gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site defaults file
    #[arg(long, default_value = "site.toml", global = true)]
    site: PathBuf,

    /// Project package.json (name, homepage, repository, bugs)
    #[arg(long, default_value = "package.json", global = true)]
    package: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the head tags for a page
    Head {
        #[command(flatten)]
        page: PageArgs,

        /// Print the resolved metadata as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Print the site footer
    Footer(YearArgs),
    /// Render a complete document (head, empty main, footer) for a page
    Render {
        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        year: YearArgs,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate site.toml, package.json and page override files
    Check {
        /// Page override files to resolve
        pages: Vec<PathBuf>,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Head { page, json } => {
            let site = config::load_site(&cli.site)?;
            let meta = resolve(&page.to_override()?, &site);
            if json {
                println!("{}", serde_json::to_string_pretty(&meta)?);
            } else {
                println!("{}", render_head(&meta).into_string());
            }
        }
        Command::Footer(year) => {
            let site = config::load_site(&cli.site)?;
            let pkg = config::load_package(&cli.package)?;
            let footer = build_footer(&pkg, &site, year.date()?);
            println!("{}", footer.render().into_string());
        }
        Command::Render { page, year, out } => {
            let site = config::load_site(&cli.site)?;
            let pkg = config::load_package(&cli.package)?;
            let meta = resolve(&page.to_override()?, &site);
            let footer = build_footer(&pkg, &site, year.date()?);
            let doc = render_document(&meta, html! {}, &footer).into_string();
            match out {
                Some(path) => {
                    write_output(&path, &doc)?;
                    println!("Generated {}", path.display());
                }
                None => println!("{}", doc),
            }
        }
        Command::Check { pages } => {
            println!("==> Checking {}", cli.site.display());
            let site = config::load_site(&cli.site)?;
            let pkg = config::load_package(&cli.package)?;
            output::print_check_output(&site, &cli.site, &pkg, &cli.package);

            let mut resolved = Vec::with_capacity(pages.len());
            for path in &pages {
                let page = seo::load_page_override(path)?;
                resolved.push((path.as_path(), resolve(&page, &site)));
            }
            output::print_pages_output(&resolved);
            println!("==> Site data is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Footer with the site's network links, dated `now`.
fn build_footer(pkg: &PackageMeta, site: &SiteDefaults, now: impl Datelike) -> FooterView {
    render_footer(pkg, &site.title, now).with_networks(&site.social)
}

fn write_output(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
