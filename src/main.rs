use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use socialeye::api::create_router;
use socialeye::config::CONFIG;
use socialeye::expansion::QueryExpansion;
use socialeye::platforms::PLATFORMS;
use socialeye::report::{render_failure, render_outcome, render_platforms};
use socialeye::search::{SearchError, SearchOutcome, SearchService};
use socialeye::selection::PlatformSelection;

#[derive(Parser)]
#[command(name = "socialeye", version, about = "Generate profile and search links for a name across social platforms")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the search page and JSON API
    Serve {
        /// Listen address, overrides BIND_ADDR
        #[arg(long)]
        addr: Option<String>,
    },
    /// Generate links for a name or username
    Search {
        query: String,
        /// Only search these platforms (repeatable)
        #[arg(short, long = "platform")]
        platforms: Vec<String>,
        /// Leave these platforms out (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported platforms
    Platforms,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .init();

    tracing::debug!(config = ?*CONFIG, "configuration loaded");
    if !CONFIG.has_google_api_key() {
        tracing::info!("GOOGLE_API_KEY not set, searches will run without AI query expansion");
    }

    let search_service = Arc::new(SearchService::new(QueryExpansion::from_config(&CONFIG)));

    match cli.command {
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| CONFIG.bind_addr.clone());
            let router = create_router(search_service, &CONFIG.static_dir);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            tracing::info!("listening on http://{addr}");
            axum::serve(listener, router).await?;
        }
        Command::Search {
            query,
            platforms,
            exclude,
            json,
        } => {
            let outcome = match run_search(&search_service, &query, &platforms, &exclude).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("{}", render_failure(&e));
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", render_outcome(&outcome));
            }
        }
        Command::Platforms => {
            println!("{}", render_platforms(PLATFORMS));
        }
    }
    Ok(())
}

async fn run_search(
    search_service: &SearchService,
    query: &str,
    platforms: &[String],
    exclude: &[String],
) -> Result<SearchOutcome, SearchError> {
    let mut selection = if platforms.is_empty() {
        PlatformSelection::all()
    } else {
        PlatformSelection::from_ids(platforms)?
    };
    for id in exclude {
        selection.deselect(id)?;
    }
    search_service.search(query, &selection).await
}
