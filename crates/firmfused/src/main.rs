//! firmfuse daemon - company profile research service
//!
//! Serves the research endpoint, or researches companies once from the
//! command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use firmfused::config::Config;
use firmfused::server::{self, AppState};
use firmfused::{NetworkResearcher, OpenAiClient, ReconciliationEngine, Researcher, SearchResearcher};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "firmfused", version, about = "Company profile research service")]
struct Cli {
    /// Config file (default: /etc/firmfuse/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve {
        /// Address to bind, overrides config
        #[arg(long)]
        bind: Option<String>,
    },
    /// Research companies once and print JSON
    Research {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Wire collaborators, generative client and engine from config.
fn build_researcher(config: &Config) -> Result<Researcher> {
    let llm = OpenAiClient::new(config.llm.clone()).context("Failed to create LLM client")?;
    let engine = ReconciliationEngine::new(Arc::new(llm), &config.llm);
    let search = SearchResearcher::new(config.search.clone())?;
    let network = NetworkResearcher::new(config.network.clone())?;
    Ok(Researcher::new(Arc::new(search), Arc::new(network), engine))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("firmfused=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let researcher = build_researcher(&config)?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            info!("firmfused v{} starting", env!("CARGO_PKG_VERSION"));
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            server::run(AppState::new(researcher), &bind).await
        }
        Command::Research { names } => {
            let researcher = Arc::new(researcher);
            let results = researcher.research_many(names).await;
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
    }
}
