use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use adlibrary::bootstrap::{build_directory, init_tracing_subscriber, resolve_config};
use adlibrary::{render_json, render_text, run_browse, BrowseOptions};
use adl_core::PageFilter;

#[derive(Parser)]
#[command(name = "adlibrary")]
#[command(about = "Browse ad-library pages ranked by EU reach", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pages for a filter
    Browse {
        /// Country code, or "All"
        #[arg(long, default_value = "All")]
        country: String,
        /// Case-insensitive substring of the page name
        #[arg(long, default_value = "")]
        search: String,
        /// Only show pages with at least 900 000 reach
        #[arg(long)]
        high_reach: bool,
        /// Number of windows to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        windows: u32,
        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config)?;
    init_tracing_subscriber(config.logging.dir.as_deref())?;

    match cli.command {
        Commands::Browse {
            country,
            search,
            high_reach,
            windows,
            json,
        } => {
            let options = BrowseOptions {
                country,
                search,
                high_reach_only: high_reach,
                windows,
            };
            let directory = build_directory(&config, PageFilter::all())?;
            let view = run_browse(&directory, &options).await;

            if json {
                println!("{}", render_json(&view)?);
            } else {
                print!("{}", render_text(&view));
            }

            if let Some(error) = view.error {
                return Err(anyhow!("failed to load pages: {error}"));
            }
        }
    }

    Ok(())
}
