use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_digest::accounts::load_accounts;
use portfolio_digest::config::Config;
use portfolio_digest::report::render_titled;
use portfolio_digest::watermark::Watermark;
use portfolio_digest::Collector;
use twitterapi::TwitterApiClient;

/// Summarize recent activity of a list of Twitter accounts as an HTML report
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Config file location
    #[clap(short, long, default_value_os_t = default_config_path(), value_parser)]
    config: PathBuf,

    /// Write the report here instead of the configured output path
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Read account handles from this file, 1 handle per line
    #[clap(short, long, value_parser)]
    accounts: Option<PathBuf>,

    /// Do not advance the last run timestamp
    #[clap(long)]
    no_save: bool,
}

fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "Portfolio Digest")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run().await {
        Ok(_) => process::exit(0),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let conf = Config::read_or_default(&args.config)?;

    let account_source = args.accounts.unwrap_or_else(|| conf.account_source.clone());
    let output_path = args.output.unwrap_or_else(|| conf.output_path.clone());
    let accounts = load_accounts(&account_source)?;
    let client = TwitterApiClient::with_base_url(&conf.api_key()?, &conf.base_url)?;
    let watermark = Watermark::new(&conf.watermark_path);

    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("PORTFOLIO WEEKLY UPDATE GENERATOR");
    println!("{}\n", rule);

    let collection = Collector::new(&client, conf.rate_limit_delay)
        .dry_run(args.no_save)
        .collect(&accounts, &watermark)
        .await?;

    println!("\n{}", rule);
    println!("GENERATING DASHBOARD");
    println!("{}", rule);

    let html = render_titled(
        &conf.title,
        &collection.dataset,
        collection.since,
        collection.until,
    );
    tokio::fs::write(&output_path, html)
        .await
        .with_context(|| format!("Unable to write report to {:?}", output_path))?;

    println!("\n✅ Dashboard generated: {}", output_path.display());
    println!("📊 {} active accounts", collection.dataset.len());
    println!("📝 {} total tweets", collection.total_tweets());

    Ok(())
}
