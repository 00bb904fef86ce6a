//! wings-seo - grade the SEO metadata of Personal Wings pages

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use wings_seo::config::{OutputFormat, Settings};
use wings_seo::service::{compute_seo_score, create_client, PageReport};
use wings_seo::{input, lifecycle, reporter};

/// Score SEO metadata the way the admin dashboard does
#[derive(Parser, Debug)]
#[command(name = "wings-seo", version)]
#[command(after_help = "\
Examples:
  wings-seo score banner.json               Score one metadata object
  wings-seo page home.json --format json    Score every section of a page
  wings-seo fetch https://personalwings.com Score live pages")]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (default: ./wings-seo.toml if present)
    #[arg(long, global = true, env = "WINGS_SEO_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a JSON file holding one metadata object (or null)
    Score { file: PathBuf },

    /// Score a JSON object of named sections and roll them up
    Page { file: PathBuf },

    /// Fetch pages and score the metadata found in their HTML
    Fetch {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    lifecycle::init_logging(&cli.log_level);

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let format = cli.format.unwrap_or(settings.output.format);

    let output = match cli.command {
        Commands::Score { file } => {
            let seo = input::read_metadata(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            reporter::render_score(&compute_seo_score(seo.as_ref()), format)?
        }
        Commands::Page { file } => {
            let page = input::read_page(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            info!("Scoring {} sections from {}", page.len(), file.display());
            reporter::render_page(&page.build(), format)?
        }
        Commands::Fetch { urls } => {
            let client = create_client(&settings.http)?;
            info!("Fetching {} pages", urls.len());
            let page = PageReport::fetch(&client, &urls).await;
            reporter::render_page(&page.build(), format)?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
