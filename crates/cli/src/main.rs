mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saber-tudo")]
#[command(version, about = "How-to tutorial portal with AI-generated articles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Serve the site and its JSON API
    Serve {
        /// Path to site.toml (default: ./site.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind (overrides [server] host)
        #[arg(long)]
        host: Option<String>,

        /// Port to serve on (overrides [server] port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Export the built-in library as a static site
    Build {
        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,

        /// Path to site.toml (default: ./site.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate configuration and the built-in library
    Validate {
        /// Path to site.toml (default: ./site.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate one tutorial with the configured model and print it as JSON
    ///
    /// The API key is read from the environment variable named by
    /// [generation] api_key_env (default: API_KEY).
    Generate {
        /// What the tutorial should teach
        topic: String,

        /// Path to site.toml (default: ./site.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `RUST_LOG` directives when given and parseable, otherwise `info`
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => commands::serve::run(config, host, port).await,
        Command::Build { output, config } => commands::build::run(config, output).await,
        Command::Validate { config } => commands::validate::run(config).await,
        Command::Generate { topic, config } => commands::generate::run(config, topic).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "saber-tudo", &mut io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_rust_log_level() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_log_filter_keeps_target_directives() {
        let filter = log_filter(Some("saber_tudo=trace,tower_http=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
