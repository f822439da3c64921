use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sqlgen::connector::adapter::{DEFAULT_BASE_URL, DEFAULT_CACHE_CAPACITY};
use sqlgen::connector::api::{Container, ContainerConfig, Router};
use sqlgen::connector::http;
use sqlgen::domain::{DEFAULT_DATASET_ID, DEFAULT_PROJECT_ID};
use sqlgen::{Commands, SqlDialect, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "sqlgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true, env = "SQLGEN_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, global = true, env = "SQLGEN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// SQL flavour requested from the model (bigquery or generic)
    #[arg(long, global = true, default_value = "bigquery")]
    dialect: SqlDialect,

    #[arg(long, global = true, default_value = DEFAULT_PROJECT_ID)]
    project_id: String,

    #[arg(long, global = true, default_value = DEFAULT_DATASET_ID)]
    dataset_id: String,

    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Pause after each successful model call, in milliseconds
    #[arg(long, global = true, default_value_t = 2000)]
    throttle_ms: u64,

    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Require every request to carry its own schema
    #[arg(long, global = true)]
    no_default_schema: bool,

    /// Answer with a local placeholder instead of calling the hosted model
    #[arg(long, global = true)]
    mock_inference: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        model: cli.model,
        base_url: cli.base_url,
        dialect: cli.dialect,
        project_id: cli.project_id,
        dataset_id: cli.dataset_id,
        max_tokens: cli.max_tokens,
        throttle_ms: cli.throttle_ms,
        cache_capacity: cli.cache_capacity,
        use_default_schema: !cli.no_default_schema,
        mock_inference: cli.mock_inference,
    })?;

    if let Commands::Serve { port, public } = cli.command {
        let ip = if public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        return http::serve(Arc::new(container), SocketAddr::new(ip, port)).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn generate_parses_with_global_flags() {
        let cli = Cli::try_parse_from([
            "sqlgen",
            "--mock-inference",
            "generate",
            "--condition",
            "tickets from today",
            "--api-key",
            "hf_x",
            "--dialect",
            "generic",
        ])
        .unwrap();
        assert!(cli.mock_inference);
        assert_eq!(cli.dialect, SqlDialect::Generic);
        assert!(matches!(cli.command, Commands::Generate { json: false, .. }));
    }

    #[test]
    fn serve_defaults_to_port_5000() {
        let cli = Cli::try_parse_from(["sqlgen", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: 5000,
                public: false
            }
        ));
        assert_eq!(cli.throttle_ms, 2000);
        assert_eq!(cli.cache_capacity, 10);
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let res = Cli::try_parse_from(["sqlgen", "--dialect", "oracle", "serve"]);
        assert!(res.is_err());
    }

    #[test]
    fn generate_requires_condition() {
        let res = Cli::try_parse_from(["sqlgen", "generate", "--api-key", "k"]);
        assert!(res.is_err());
    }
}
