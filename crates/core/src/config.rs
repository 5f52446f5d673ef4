use crate::error::{Error, Result};
use crate::images::DEFAULT_IMAGE_HOST;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SITE_NAME: &str = "SaberTudo";
pub const DEFAULT_TAGLINE: &str = "Aprenda a fazer qualquer coisa.";
pub const DEFAULT_RECENT_COUNT: usize = 9;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Raw TOML configuration structure.
/// Every section and key is optional; missing values take the defaults above.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    images: RawImages,
    #[serde(default)]
    server: RawServer,
    #[serde(default)]
    generation: RawGeneration,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSite {
    name: Option<String>,
    tagline: Option<String>,
    recent_count: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawImages {
    host: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGeneration {
    endpoint: Option<String>,
    model: Option<String>,
    api_key_env: Option<String>,
    timeout_secs: Option<u64>,
}

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteSettings,
    pub images: ImageSettings,
    pub server: ServerSettings,
    pub generation: GenerationSettings,
}

/// Site identity and listing sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub name: String,
    pub tagline: String,
    /// How many articles the home page lists as "recently added"
    pub recent_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSettings {
    /// Placeholder image service host, without scheme
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// External tutorial generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl GenerationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteSettings {
                name: DEFAULT_SITE_NAME.to_string(),
                tagline: DEFAULT_TAGLINE.to_string(),
                recent_count: DEFAULT_RECENT_COUNT,
            },
            images: ImageSettings {
                host: DEFAULT_IMAGE_HOST.to_string(),
            },
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            generation: GenerationSettings {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                model: DEFAULT_MODEL.to_string(),
                api_key_env: DEFAULT_API_KEY_ENV.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}

impl Config {
    fn from_raw(raw: RawConfig) -> Result<Self> {
        let site = SiteSettings {
            name: raw.site.name.unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            tagline: raw.site.tagline.unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
            recent_count: raw.site.recent_count.unwrap_or(DEFAULT_RECENT_COUNT),
        };
        if site.name.trim().is_empty() {
            return Err(Error::ConfigParse("site.name must not be empty".to_string()));
        }
        if site.recent_count == 0 {
            return Err(Error::ConfigParse(
                "site.recent_count must be at least 1".to_string(),
            ));
        }

        let images = ImageSettings {
            host: validate_image_host(
                raw.images.host.as_deref().unwrap_or(DEFAULT_IMAGE_HOST),
            )?,
        };

        let server = ServerSettings {
            host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: raw.server.port.unwrap_or(DEFAULT_PORT),
        };
        if server.port == 0 {
            return Err(Error::ConfigParse("server.port must not be 0".to_string()));
        }

        let generation = GenerationSettings {
            endpoint: validate_endpoint(
                raw.generation.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
            )?,
            model: raw
                .generation
                .model
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key_env: raw
                .generation
                .api_key_env
                .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
            timeout_secs: raw.generation.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if generation.model.trim().is_empty() {
            return Err(Error::ConfigParse(
                "generation.model must not be empty".to_string(),
            ));
        }
        if generation.api_key_env.trim().is_empty() {
            return Err(Error::ConfigParse(
                "generation.api_key_env must not be empty".to_string(),
            ));
        }
        if generation.timeout_secs == 0 {
            return Err(Error::ConfigParse(
                "generation.timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            site,
            images,
            server,
            generation,
        })
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)?;
    Config::from_raw(raw)
}

/// The image host is spliced into `https://{host}/...`, so it must be a bare host.
fn validate_image_host(host: &str) -> Result<String> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::ConfigParse("images.host must not be empty".to_string()));
    }
    if host.contains("://") || host.contains('/') {
        return Err(Error::ConfigParse(format!(
            "images.host must be a bare host name without scheme or path: '{}'",
            host
        )));
    }
    Ok(host.to_string())
}

fn validate_endpoint(endpoint: &str) -> Result<String> {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
        return Err(Error::ConfigParse(format!(
            "generation.endpoint must start with http:// or https://: '{}'",
            endpoint
        )));
    }
    Ok(endpoint.to_string())
}
