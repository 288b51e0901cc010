//! news-bot binary: loads `.env`, parses the CLI and runs the bot.

use anyhow::Result;
use clap::Parser;
use news_bot::{load_config, run_bot, run_once, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = load_config(args)?;
            run_bot(config).await
        }
        Commands::Once(args) => {
            let config = load_config(args)?;
            let report = run_once(config).await?;
            println!(
                "fetched: {}, fresh: {}, unseen: {}, delivered: {}, failed: {}",
                report.fetched, report.fresh, report.unseen, report.delivered, report.failed
            );
            Ok(())
        }
    }
}
