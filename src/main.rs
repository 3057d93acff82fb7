// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cookbook::cookbook::{load_seed, Registry};
use cookbook::server::{self, CookbookConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author, version, about = "Recipe registry with ingredient and cook time summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the bind address from the configuration
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Normalize a handwritten recipe name
    Normalize {
        /// Raw recipe name
        input: String,
    },
    /// Print the summary of a recipe from a JSON file of entries
    Summarize {
        /// JSON array of entries, in creation order
        #[arg(short, long)]
        entries: PathBuf,
        /// Recipe to summarize
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { config, bind }) => {
            let file_config = match config {
                Some(path) => {
                    info!("Loading configuration from {}", path.display());
                    CookbookConfig::load(&path)?
                }
                None => CookbookConfig::default(),
            };

            let mut server_config = file_config.to_server_config()?;
            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }

            server::run_server(server_config).await
        }
        Some(Commands::Normalize { input }) => {
            let name = cookbook::normalize_name(&input)?;
            println!("{}", name);
            Ok(())
        }
        Some(Commands::Summarize { entries, name }) => {
            let registry = Registry::new();
            load_seed(&registry, &entries)
                .with_context(|| format!("Failed to load entries from {}", entries.display()))?;

            let summary = registry.summary(&name)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("Cookbook v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'cookbook --help' for usage information");
            Ok(())
        }
    }
}
