use anyhow::Result;
use clap::Parser;
use newsbrief::{Category, DigestService, HackerNewsClient, NewsbriefConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "HackerNews digest fetcher", long_about = None)]
struct Args {
    /// Story category (top, new, best, ask, jobs)
    category: Option<String>,

    /// Number of stories to fetch
    #[arg(short, long)]
    count: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// List available categories and exit
    #[arg(short, long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();

    // Handle list command
    if args.list {
        println!("Available categories:");
        for category in Category::all() {
            println!("  {}", category);
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => NewsbriefConfig::from_file(path)?,
        None => NewsbriefConfig::default(),
    };

    let category = match &args.category {
        Some(raw) => Category::parse(raw)?,
        None => *config.default_category(),
    };
    let count = args.count.unwrap_or(*config.story_count());

    info!(
        category = %category,
        count,
        ttl_seconds = config.cache().ttl_seconds(),
        "Fetching story digest"
    );

    let client = match config.request_timeout_seconds() {
        Some(seconds) => HackerNewsClient::with_timeout(Duration::from_secs(*seconds))?,
        None => HackerNewsClient::new(),
    };
    let service = DigestService::new(client, config.cache().clone());

    let digest = service.digest(category, count).await?;
    println!("{digest}");

    Ok(())
}
