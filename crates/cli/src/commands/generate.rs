use anyhow::{Context, Result};
use saber_tudo_tutor::{GeminiClient, generate_article};
use std::path::PathBuf;

use super::load_config;

/// Generate one tutorial and print it as JSON on stdout
pub async fn run(config_path: Option<PathBuf>, topic: String) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let client = GeminiClient::from_settings(&config.generation)
        .context("Failed to create Gemini client")?;

    eprintln!("✨ Generating tutorial: {}", topic);
    let article = generate_article(
        &client,
        &topic,
        &config.images.host,
        config.generation.timeout(),
    )
    .await
    .context("Tutorial generation failed")?;

    println!("{}", serde_json::to_string_pretty(&article)?);
    eprintln!("✅ Generated {} ({} steps)", article.id, article.steps.len());
    Ok(())
}
