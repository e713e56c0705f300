//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::ArenaEvent;

/// Topics for event routing.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Damage, healing, defeats, battle outcomes.
    Combat,
    /// Experience gains and level-ups.
    Progression,
    /// Encounter and campaign framing.
    Campaign,
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about and only receive those
/// events. Publishing is fire-and-forget: a topic with no subscribers drops
/// its events, which is normal, not an error.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<ArenaEvent>,
    progression: broadcast::Sender<ArenaEvent>,
    campaign: broadcast::Sender<ArenaEvent>,
    /// Firehose: every event in publish order, for consumers that need the
    /// global ordering (e.g. narration).
    all: broadcast::Sender<ArenaEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with the specified capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            combat: broadcast::channel(capacity).0,
            progression: broadcast::channel(capacity).0,
            campaign: broadcast::channel(capacity).0,
            all: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<ArenaEvent> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Progression => &self.progression,
            Topic::Campaign => &self.campaign,
        }
    }

    /// Publish an event to its corresponding topic and to the firehose.
    pub fn publish(&self, event: ArenaEvent) {
        let topic = event.topic();
        let _ = self.all.send(event.clone());
        if self.sender(topic).send(event).is_err() {
            tracing::trace!(%topic, "no subscribers for topic");
        }
    }

    /// Subscribe to a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<ArenaEvent> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to every topic at once, preserving global publish order.
    pub fn subscribe_all(&self) -> broadcast::Receiver<ArenaEvent> {
        self.all.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
