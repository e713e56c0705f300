//! Structured combat events.
//!
//! The core emits an ordered, append-only sequence of events instead of
//! writing text; a presentation layer renders them to whatever medium it
//! likes. Event payloads are plain data (labels and integers) so two runs of
//! the same encounter can be compared field-for-field.

use crate::battle::BattleOutcome;
use crate::entity::StatBlock;

/// One observable effect produced by the combat core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// An attack landed (possibly fully mitigated to zero).
    Damaged {
        attacker: String,
        target: String,
        /// Damage after defense mitigation, never negative.
        mitigated: i32,
        remaining: i32,
    },

    /// Health was restored (possibly zero when already at the cap or defeated).
    Healed {
        target: String,
        restored: i32,
        health: i32,
    },

    /// The player banked experience (before any level-up processing).
    ExperienceGained {
        name: String,
        amount: i32,
        total: i32,
    },

    /// A level-up completed; `stats` is the post-level snapshot.
    LeveledUp {
        name: String,
        level: i32,
        stats: StatBlock,
    },

    /// A combatant's health reached zero.
    Defeated { name: String },

    /// The encounter reached its terminal state.
    BattleEnded { outcome: BattleOutcome },
}

/// Destination for the core's event stream.
///
/// Implementations must preserve publish order; the runtime bridges this
/// onto its broadcast bus, tests capture into an [`EventLog`].
pub trait EventSink {
    fn publish(&mut self, event: CombatEvent);
}

/// Append-only in-memory event log.
///
/// The reference sink: deterministic runs of the same encounter produce
/// equal logs, which is what the reproducibility tests compare.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter()
    }
}

impl EventSink for EventLog {
    fn publish(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: CombatEvent) {}
}
