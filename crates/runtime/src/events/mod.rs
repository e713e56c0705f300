//! Runtime event routing.
//!
//! The core reports what happened inside a battle ([`CombatEvent`]); the
//! runtime adds campaign framing ([`CampaignEvent`]) and fans both out to
//! subscribers through a topic-based [`EventBus`].

mod bus;

pub use bus::{EventBus, Topic};

use arena_core::{BattleOutcome, CombatEvent, EventSink};
use serde::{Deserialize, Serialize};

/// Events framing a campaign around its battles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignEvent {
    EncounterStarted { index: usize, opponent: String },
    EncounterFinished { index: usize, outcome: BattleOutcome },
    CampaignFinished { survived: bool, encounters_fought: usize },
}

/// Event wrapper that carries everything the bus routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaEvent {
    Combat(CombatEvent),
    Campaign(CampaignEvent),
}

impl ArenaEvent {
    pub fn topic(&self) -> Topic {
        match self {
            ArenaEvent::Combat(
                CombatEvent::ExperienceGained { .. } | CombatEvent::LeveledUp { .. },
            ) => Topic::Progression,
            ArenaEvent::Combat(_) => Topic::Combat,
            ArenaEvent::Campaign(_) => Topic::Campaign,
        }
    }
}

/// Destination for the full runtime event stream (combat + campaign framing).
///
/// The campaign drives one of these; [`BusSink`] forwards onto the broadcast
/// bus and [`RecordingSink`] captures in memory for tests and replays.
pub trait ArenaSink {
    fn combat(&mut self, event: CombatEvent);
    fn campaign(&mut self, event: CampaignEvent);
}

/// Sink that publishes every event onto an [`EventBus`].
#[derive(Clone)]
pub struct BusSink {
    bus: EventBus,
}

impl BusSink {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl ArenaSink for BusSink {
    fn combat(&mut self, event: CombatEvent) {
        self.bus.publish(ArenaEvent::Combat(event));
    }

    fn campaign(&mut self, event: CampaignEvent) {
        self.bus.publish(ArenaEvent::Campaign(event));
    }
}

/// Sink that records the full ordered stream in memory.
///
/// Two deterministic runs produce equal recordings, which is what the
/// reproducibility tests compare.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<ArenaEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ArenaEvent] {
        &self.events
    }

    /// Just the combat events, in publish order.
    pub fn combat_events(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter().filter_map(|event| match event {
            ArenaEvent::Combat(combat) => Some(combat),
            ArenaEvent::Campaign(_) => None,
        })
    }
}

impl ArenaSink for RecordingSink {
    fn combat(&mut self, event: CombatEvent) {
        self.events.push(ArenaEvent::Combat(event));
    }

    fn campaign(&mut self, event: CampaignEvent) {
        self.events.push(ArenaEvent::Campaign(event));
    }
}

/// Adapter exposing an [`ArenaSink`] to the core, which only knows
/// [`EventSink`].
pub(crate) struct CoreBridge<'a>(pub &'a mut dyn ArenaSink);

impl EventSink for CoreBridge<'_> {
    fn publish(&mut self, event: CombatEvent) {
        self.0.combat(event);
    }
}
