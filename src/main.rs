//! Meteor CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use anyhow::{Context, Result};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "meteor")]
#[command(about = "☄️ Meteor - photo search tool for the Meteor agent")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the Meteor configuration
    Init,

    /// Print the agent manifest (profile and tool definitions) as JSON
    Manifest,

    /// Search for photos
    Search {
        /// Search term
        term: String,
    },

    /// Invoke a tool the way the agent host would
    Call {
        /// Tool name
        tool: String,

        /// JSON object of tool arguments
        #[arg(short, long, default_value = "{}")]
        params: String,
    },

    /// Show Meteor status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            meteor::config::onboard()?;
        }

        Commands::Manifest => {
            let config = meteor::config::load_or_default()?;
            let runner = meteor::tools::ToolRunner::with_defaults(&config)?;
            let manifest = meteor::agent::Manifest::new(&config.agent, &runner);
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }

        Commands::Search { term } => {
            let ok = run_tool("getPhotos", serde_json::json!({ "search": term })).await?;
            if !ok {
                std::process::exit(1);
            }
        }

        Commands::Call { tool, params } => {
            let params: Value = serde_json::from_str(&params)
                .context("--params must be a JSON object")?;
            let ok = run_tool(&tool, params).await?;
            if !ok {
                std::process::exit(1);
            }
        }

        Commands::Status => {
            use meteor::config::SourceConfig;
            use meteor::ui;

            let config = meteor::config::load_or_default()?;
            ui::print_meteor_header("Status", &config.agent.description);
            println!("Config: {:?}", meteor::config::config_path());
            println!("Agent: {}", config.agent.name);
            println!("Model: {}", config.agent.model);

            match &config.photos.source {
                SourceConfig::Nasa { base_url } => println!("Photo source: NASA ({})", base_url),
                SourceConfig::Local { catalog } => {
                    let state = if catalog.exists() { "✓" } else { "missing" };
                    println!("Photo source: local catalog {:?} ({})", catalog, state);
                }
            }
            println!(
                "Limits: {} chars per term, {} results, {}s timeout",
                config.photos.max_term_chars,
                config.photos.max_results,
                config.photos.timeout_secs
            );
        }
    }

    Ok(())
}

/// Run one tool and print its reply. Returns `false` when the reply is an error payload.
async fn run_tool(name: &str, params: Value) -> Result<bool> {
    let config = meteor::config::load_or_default()?;
    let runner = meteor::tools::ToolRunner::with_defaults(&config)?;

    let reply = runner.invoke(name, params).await;
    println!("{}", serde_json::to_string_pretty(&reply)?);

    match meteor::ErrorPayload::from_reply(&reply) {
        Some(payload) => {
            meteor::ui::print_error(&payload.message);
            Ok(false)
        }
        None => Ok(true),
    }
}
