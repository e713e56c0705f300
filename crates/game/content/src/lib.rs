//! Catalog content for the arena.
//!
//! Separates *what the combatants are* (templates, rosters) from *how combat
//! works* (`arena-core`). Templates are plain serde-friendly records that are
//! validated by building the core types; the built-in demo roster keeps the
//! workspace runnable without any data files.
mod roster;

#[cfg(feature = "loaders")]
mod loaders;

pub use roster::{OpponentTemplate, PlayerTemplate, Roster};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, RosterLoader};
