//! Wiring: builds the Telegram bot, feed client, handler chain and scheduler from [`BotConfig`], then
//! runs the poll loop next to the command REPL until Ctrl-C.

use std::sync::Arc;

use anyhow::{Context, Result};
use news_feed::{BeeKuaiBaoClient, FeedClient};
use newsbot_core::{init_tracing, Bot};
use tokio::sync::watch;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::{BotConfig, PollConfig};
use crate::handlers::{StartHandler, UnknownCommandHandler};
use crate::pipeline::{CycleReport, Deliverer, Pipeline};
use crate::scheduler::Scheduler;
use crate::telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter};

/// Transport and feed handles shared by the REPL and the poll loop.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub feed: Arc<dyn FeedClient>,
}

/// Builds the teloxide bot (honouring TELEGRAM_API_URL), its [`Bot`] adapter and the feed client.
pub fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url());
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let feed: Arc<dyn FeedClient> = Arc::new(BeeKuaiBaoClient::new(config.feed.clone())?);
    Ok(BotComponents {
        teloxide_bot,
        bot,
        feed,
    })
}

/// `/start` first, unknown-command fallback last.
pub fn build_handler_chain(bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(UnknownCommandHandler::new(bot)))
}

/// Scheduler with an empty delivery record.
pub fn build_scheduler(
    poll: &PollConfig,
    feed: Arc<dyn FeedClient>,
    bot: Arc<dyn Bot>,
) -> Scheduler {
    let deliverer = Deliverer::new(bot, poll.channel_target.clone(), poll.send_timeout);
    let pipeline = Pipeline::new(feed, deliverer, poll.interval_secs, poll.fetch_timeout);
    Scheduler::new(pipeline, poll.interval())
}

/// Main entry: validate config, init logging, start the poll loop, run the command REPL. When the REPL
/// stops (Ctrl-C) the poll loop is told to stop and awaited, letting an in-flight cycle finish.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        channel = %config.poll.channel_target,
        interval_secs = config.poll.interval_secs,
        feed_url = %config.feed.url,
        "Initializing bot"
    );

    let components = build_components(&config)?;
    let handler_chain = build_handler_chain(components.bot.clone());
    let mut scheduler =
        build_scheduler(&config.poll, components.feed.clone(), components.bot.clone());

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let poll_task = tokio::spawn(async move {
        scheduler
            .run(async move {
                let _ = shutdown_rx.wait_for(|stop| *stop).await;
            })
            .await
    });

    info!("Started Bot...");
    run_repl(components.teloxide_bot, handler_chain).await?;

    shutdown_tx.send_replace(true);
    let cycles = poll_task.await.context("Poll loop task failed")?;
    info!(cycles = cycles, "Bot stopped");
    Ok(())
}

/// Runs a single poll cycle and returns its report. No REPL.
#[instrument(skip(config))]
pub async fn run_once(config: BotConfig) -> Result<CycleReport> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let components = build_components(&config)?;
    let mut scheduler = build_scheduler(&config.poll, components.feed, components.bot);
    let report = scheduler.run_cycle().await;
    info!(report = ?report, "Single poll cycle done");
    Ok(report)
}
