//! Combat entities: the shared combatant core plus its two variants.
//!
//! [`Player`] and [`Opponent`] share one capability set (damage, healing,
//! liveness, stat access) through composition over [`Combatant`] rather than
//! any dispatch hierarchy; each variant carries only its own extra state
//! (progression vs. reward).
mod combatant;
mod opponent;
mod player;

pub use combatant::{Combatant, HealthMeter, StatBlock};
pub use opponent::Opponent;
pub use player::{Player, Progression};
