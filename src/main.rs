//! Harvest CLI
//!
//! Renders the dashboard to a static HTML file or serves it over HTTP.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harvest::config::{generate_default_config, Config, LoggingConfig};
use harvest::page::{charts, render_dashboard};
use harvest::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ireland agri-food insights dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the dashboard as a self-contained HTML file
    Render {
        /// Output path (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the dashboard over HTTP
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print every chart artifact as JSON
    Charts {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    match cli.command {
        Commands::Render { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(&config.render.output));
            let html = render_dashboard(&config.render.options())?;

            std::fs::write(&path, html)
                .with_context(|| format!("writing dashboard to {}", path.display()))?;
            tracing::info!("Dashboard written to {}", path.display());
        }

        Commands::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            tracing::info!("Starting Harvest dashboard v{}", env!("CARGO_PKG_VERSION"));
            serve(AppState::new(config.render.options()), &server).await?;
        }

        Commands::Charts { pretty } => {
            let charts = charts()?;
            let json = if pretty {
                serde_json::to_string_pretty(&charts)?
            } else {
                serde_json::to_string(&charts)?
            };
            println!("{}", json);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` takes precedence
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("harvest={},tower_http={}", logging.level, logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
