pub mod build;
pub mod generate;
pub mod serve;
pub mod template;
pub mod validate;

use anyhow::{Context, Result};
use saber_tudo_core::{Config, parse_site_toml};
use std::path::Path;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Load the site configuration.
///
/// An explicit path must exist. Without one, `./site.toml` is used if
/// present, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(Config::default());
            }
            default
        }
    };

    let config = parse_site_toml(path)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_config_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[site]\nname = \"Como Faz\"\n\n[server]\nport = 9000\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.site.name, "Como Faz");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("absent.toml"));
    }

    #[test]
    fn test_invalid_config_reports_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[server]\nport = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("server.port"));
    }
}
