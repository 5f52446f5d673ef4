pub mod config;
pub mod error;
pub mod images;
pub mod library;
pub mod paths;
pub mod query;
pub mod types;

pub use config::{Config, parse_site_toml};
pub use error::{Error, Result};
pub use library::Library;
pub use types::*;
