use std::net::{IpAddr, SocketAddr};

use animals_server::ServerConfig;
use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// In-memory animals API.
#[derive(Parser)]
#[command(name = "animals-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Host advertised in /swagger.json (defaults to the bind address)
    #[arg(long, env = "PUBLIC_HOST")]
    public_host: Option<String>,

    /// Start with an empty store instead of the three startup animals
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        let config =
            ServerConfig::new(SocketAddr::new(self.host, self.port)).with_seed(!self.no_seed);
        match self.public_host {
            Some(host) => config.with_public_host(host),
            None => config,
        }
    }
}

/// `RUST_LOG` directives when set and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let config = Cli::parse().into_config();
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    animals_server::run(listener, config).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_keeps_the_requested_level() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn log_filter_falls_back_on_bad_directives() {
        let filter = log_filter(Some("animals_server=loudest"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn cli_maps_onto_config() {
        let cli = Cli::parse_from(["animals-server", "--port", "8080", "--no-seed"]);
        let config = cli.into_config();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.seed);
    }
}
