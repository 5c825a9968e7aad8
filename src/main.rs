use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use queuekeeper::config::Config;
use queuekeeper::pipeline::scan::QueueScanner;
use queuekeeper::reddit::client::RedditClient;
use queuekeeper::rules::{RuleThresholds, APPROVED_LINK_DOMAINS};

/// QueueKeeper: auto-approve and auto-remove items in a subreddit's
/// moderation queue.
///
/// Meant to run on a schedule (cron, systemd timer). Each run scans the
/// queue once and exits.
#[derive(Parser)]
#[command(name = "queuekeeper", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the moderation queue once and act on matching items (default)
    Scan {
        /// Print what would happen without approving or removing anything
        #[arg(long)]
        dry_run: bool,

        /// Subreddit to scan (overrides `subreddit_name`)
        #[arg(long)]
        subreddit: Option<String>,
    },

    /// Show the rules the scanner applies
    Rules,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout is reserved for action lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("queuekeeper=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command.unwrap_or(Commands::Scan {
        dry_run: false,
        subreddit: None,
    }) {
        Commands::Scan { dry_run, subreddit } => {
            if dry_run {
                config.dry_run = true;
            }
            if let Some(subreddit) = subreddit {
                config.subreddit_name = subreddit;
            }
            run_scan(config).await?;
        }

        Commands::Rules => {
            queuekeeper::output::terminal::display_rules(
                &config.subreddit_name,
                &RuleThresholds::default(),
                APPROVED_LINK_DOMAINS,
            );
        }
    }

    Ok(())
}

async fn run_scan(config: Config) -> Result<()> {
    config.require_reddit()?;

    info!(
        subreddit = config.subreddit_name.as_str(),
        dry_run = config.dry_run,
        "Scanning moderation queue"
    );

    let client = RedditClient::connect(&config.reddit_credentials(), &config.subreddit_name).await?;
    let scanner = QueueScanner::new(&client, config.dry_run);
    scanner.scan().await?;

    Ok(())
}
