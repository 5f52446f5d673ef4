use anyhow::{Context, Result};
use saber_tudo_core::query::by_category;
use saber_tudo_core::{Article, Category, Config};
use saber_tudo_corpus::build_library;
use std::fs;
use std::path::{Path, PathBuf};

use super::load_config;
use super::template::{RenderMode, render_article, render_category, render_home};

/// Counts of what an export wrote
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub categories: usize,
    pub tutorials: usize,
}

/// Build the static site
pub async fn run(config_path: Option<PathBuf>, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Output: {}", output.display());
    println!();

    let config = load_config(config_path.as_deref())?;
    let articles = build_library(&config.images.host);
    println!("✓ Loaded: {} articles", articles.len());
    println!();

    let summary = export_site(&config, &articles, &output)?;

    println!("   ✓ Generated index.html");
    println!("   ✓ Generated {} category pages", summary.categories);
    println!("   ✓ Generated {} tutorial pages", summary.tutorials);
    println!("   ✓ Generated articles.json");
    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Write every page of the site under `output`.
///
/// Layout mirrors the server's paths: `categoria/<name>/index.html` and
/// `tutorial/<id>/index.html`, so a static file server resolves the same
/// links the live site uses.
pub fn export_site(config: &Config, articles: &[Article], output: &Path) -> Result<ExportSummary> {
    let site = &config.site;
    let mut summary = ExportSummary::default();

    fs::create_dir_all(output).context("Failed to create output directory")?;

    fs::write(
        output.join("index.html"),
        render_home(site, articles, RenderMode::Static),
    )
    .context("Failed to write index.html")?;

    for category in Category::ALL {
        let found = by_category(articles, category.as_str());
        let html = render_category(site, category.as_str(), &found, RenderMode::Static);
        write_page(&output.join("categoria").join(category.as_str()), &html)?;
        summary.categories += 1;
    }

    for article in articles {
        if !is_safe_segment(&article.id) {
            tracing::warn!(id = %article.id, "skipping article with unsafe id");
            continue;
        }
        let html = render_article(site, article, RenderMode::Static);
        write_page(&output.join("tutorial").join(&article.id), &html)?;
        summary.tutorials += 1;
    }

    let json = serde_json::to_string_pretty(articles).context("Failed to serialize articles")?;
    fs::write(output.join("articles.json"), json).context("Failed to write articles.json")?;

    tracing::debug!(
        categories = summary.categories,
        tutorials = summary.tutorials,
        "static export finished"
    );
    Ok(summary)
}

fn write_page(dir: &Path, html: &str) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join("index.html");
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))
}

/// Ids become directory names, so they must stay a single plain segment
fn is_safe_segment(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}
