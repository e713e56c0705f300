//! Deterministic combat rules shared across clients.
//!
//! `arena-core` defines the canonical combat model (entities, battle state
//! machine, events) and exposes pure APIs that can be reused by both the
//! runtime and offline tools. All state mutation flows through
//! [`battle::BattleEngine`] and the entity operations it drives; every
//! observable effect is published as a structured [`event::CombatEvent`]
//! rather than written to any output directly.
pub mod battle;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod rng;

pub use battle::{
    ActionPolicy, AlwaysAttack, BattleEngine, BattleError, BattleOutcome, BattleState, BattleView,
    PlayerAction,
};
pub use config::{BattleConfig, BattleTuning, ProgressionTuning};
pub use entity::{Combatant, HealthMeter, Opponent, Player, Progression, StatBlock};
pub use error::{CombatError, ConfigError};
pub use event::{CombatEvent, EventLog, EventSink, NullSink};
pub use rng::{MinimumRandom, PcgRandom, RandomSource, derive_seed};
