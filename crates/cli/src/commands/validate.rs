use saber_tudo_corpus::build_library;
use saber_tudo_validator::validate_library;
use std::path::PathBuf;

use super::load_config;

pub async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path.as_deref())?;
    println!("✓ Configuration valid");
    println!("  Site: {}", config.site.name);
    println!("  Images: {}", config.images.host);
    println!("  Model: {}", config.generation.model);

    let articles = build_library(&config.images.host);
    let report = validate_library(&articles);

    println!();
    for line in &report.info {
        println!("  {}", line);
    }
    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("  ✗ {}", error);
    }

    if !report.is_valid() {
        anyhow::bail!("Library has {} error(s)", report.errors.len());
    }

    println!("\n✅ Library valid");
    Ok(())
}
