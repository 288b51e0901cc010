//! # News channel bot
//!
//! Polls the BeeKuaiBao flash-news feed on a fixed interval and republishes fresh, unseen items to
//! one Telegram channel. Also answers `/start` and unknown commands through a handler chain on the
//! Telegram long-polling REPL.
//!
//! Layout: [`pipeline`] (freshness filter, dedup record, deliverer, one poll cycle), [`scheduler`]
//! (fixed-period loop with shutdown), [`telegram`] (teloxide adapter and REPL), [`chain`] and
//! [`handlers`] (command surface), [`config`] and [`cli`] (bootstrap), [`runner`] (wiring).

pub mod chain;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod pipeline;
pub mod runner;
pub mod scheduler;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{load_config, Cli, Commands, RunArgs};
pub use config::{BaseConfig, BotConfig, ConfigOverrides, PollConfig};
pub use handlers::{StartHandler, UnknownCommandHandler};
pub use pipeline::{select_recent, CycleReport, Deliverer, DeliveryRecord, Pipeline};
pub use runner::{
    build_components, build_handler_chain, build_scheduler, run_bot, run_once, BotComponents,
};
pub use scheduler::{Scheduler, SchedulerState};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper};
