use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use vaxbot::constants::{API_BASE_URL, STATE_FILE, VISIBILITY};
use vaxbot::mastodon::Mastodon;
use vaxbot::{fetch, report, state, Vaccinations};

/// Toot about the current COVID-19 vaccination status in Germany
#[derive(Parser)]
#[command(name = "vaxbot", version)]
struct Cli {
    /// Access token for the targeted Mastodon account
    access_token: String,

    /// If given only prints the content of the toot
    #[arg(long)]
    dry_run: bool,

    /// Leave out the percentage-change indicators
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);
    let state_path = Path::new(STATE_FILE);

    // 1. bail out early if we already posted today
    if !cli.dry_run {
        if let Some(marker) = state::load(state_path)? {
            if marker.last_post >= today {
                info!("already posted today");
                return Ok(());
            }
        }
    }

    // 2. download and index the dataset
    let client = reqwest::Client::new();
    let body = fetch::download(&client)
        .await
        .context("downloading the vaccination dataset")?;
    let mut data = Vaccinations::new();
    for day in fetch::parse(&body)? {
        data.add(day);
    }
    info!(days = data.len(), "dataset loaded");

    // 3. yesterday's numbers appear some time during the morning
    data.get(yesterday)
        .with_context(|| format!("data for {} is not yet published", yesterday))?;

    // 4. render and deliver
    let message = report::generate(&data, today, !cli.plain)?;
    if cli.dry_run {
        println!("{}", message);
        return Ok(());
    }

    let mastodon = Mastodon::new(API_BASE_URL, &cli.access_token);
    mastodon
        .post_status(&message, VISIBILITY)
        .await
        .context("posting the status")?;
    state::save(state_path, &state::State { last_post: today })?;
    info!("posted successfully");
    Ok(())
}
