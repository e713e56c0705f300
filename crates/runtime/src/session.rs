//! Async shell around the synchronous campaign.
//!
//! The simulation itself is single-threaded and blocking; a [`Session`] runs
//! it on a blocking task and publishes its events onto the bus so consumers
//! (a renderer, a recorder) can drain them concurrently.

use arena_core::ActionPolicy;
use tokio::sync::broadcast;

use crate::campaign::{Campaign, CampaignReport};
use crate::error::{Result, RuntimeError};
use crate::events::{ArenaEvent, BusSink, EventBus, Topic};

/// Fresh campaign seed from OS entropy, for sessions without a fixed seed.
pub fn random_seed() -> u64 {
    rand::random()
}

/// One client-facing run of the simulation: a bus plus the campaign driver.
pub struct Session {
    bus: EventBus,
}

impl Session {
    pub fn new() -> Self {
        Self {
            bus: EventBus::new(),
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe before calling [`run`](Self::run); events published with no
    /// subscriber are dropped.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<ArenaEvent> {
        self.bus.subscribe(topic)
    }

    /// Subscribe to every topic in global publish order.
    pub fn subscribe_all(&self) -> broadcast::Receiver<ArenaEvent> {
        self.bus.subscribe_all()
    }

    /// Runs the campaign to completion on a blocking worker, streaming its
    /// events through the bus.
    pub async fn run<P>(&self, campaign: Campaign, mut policy: P, seed: u64) -> Result<CampaignReport>
    where
        P: ActionPolicy + Send + 'static,
    {
        let mut sink = BusSink::new(self.bus.clone());

        tracing::info!(seed, "campaign starting");
        let report = tokio::task::spawn_blocking(move || {
            campaign.run(&mut policy, seed, &mut sink)
        })
        .await
        .map_err(RuntimeError::WorkerJoin)??;

        tracing::info!(
            survived = report.survived,
            encounters = report.encounters_fought,
            "campaign finished"
        );
        Ok(report)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
