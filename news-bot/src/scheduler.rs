//! Fixed-period poll loop.
//!
//! The first cycle runs immediately, then one per interval. Cycles are awaited inline, so at most
//! one runs at a time; an overrunning cycle pushes the next tick back instead of stacking ticks.
//! Shutdown is only checked while idle: a cycle in flight always finishes.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{info, instrument};

use crate::pipeline::{CycleReport, Pipeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the next tick.
    Idle,
    RunningCycle,
}

/// Owns the [`Pipeline`] (and with it the delivery record) for the life of the poll loop.
pub struct Scheduler {
    pipeline: Pipeline,
    interval: Duration,
    state: watch::Sender<SchedulerState>,
    cycles: u64,
}

impl Scheduler {
    pub fn new(pipeline: Pipeline, interval: Duration) -> Self {
        let (state, _) = watch::channel(SchedulerState::Idle);
        Self {
            pipeline,
            interval,
            state,
            cycles: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Receiver that observes every Idle/RunningCycle transition.
    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.state.subscribe()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Cycles completed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs one cycle now: Idle → RunningCycle → Idle, whatever the outcome.
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.state.send_replace(SchedulerState::RunningCycle);
        let report = self.pipeline.run_cycle(Utc::now().timestamp_millis()).await;
        self.cycles += 1;
        self.state.send_replace(SchedulerState::Idle);
        report
    }

    /// Ticks until `shutdown` resolves. Returns the number of cycles run by this call.
    #[instrument(skip(self, shutdown), fields(interval_secs = self.interval.as_secs()))]
    pub async fn run<S>(&mut self, shutdown: S) -> u64
    where
        S: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let start = self.cycles;
        info!("Scheduler started");
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = ticker.tick() => {}
            }
            self.run_cycle().await;
        }
        info!(cycles = self.cycles - start, "Scheduler stopped");
        self.cycles - start
    }
}
