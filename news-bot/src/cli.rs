//! CLI parser and config loading.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{BotConfig, ConfigOverrides};

#[derive(Parser)]
#[command(name = "news-bot")]
#[command(about = "Republish BeeKuaiBao flash news to a Telegram channel", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the poll loop and the command REPL until Ctrl-C.
    Run(RunArgs),
    /// Run a single poll cycle and exit.
    Once(RunArgs),
}

/// Overrides for values otherwise read from env.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Bot token (overrides BOT_TOKEN).
    #[arg(short, long)]
    pub token: Option<String>,
    /// Channel handle, with or without `@` (overrides CHANNEL_ID).
    #[arg(short, long)]
    pub channel: Option<String>,
    /// Poll interval in seconds (overrides POLL_INTERVAL_SECS).
    #[arg(short, long)]
    pub interval: Option<u64>,
}

impl From<RunArgs> for ConfigOverrides {
    fn from(args: RunArgs) -> Self {
        ConfigOverrides {
            token: args.token,
            channel: args.channel,
            interval_secs: args.interval,
        }
    }
}

/// Load BotConfig from environment; CLI arguments override their env vars.
pub fn load_config(args: RunArgs) -> Result<BotConfig> {
    BotConfig::load(args.into())
}
