//! Runtime orchestration for the deterministic combat simulation.
//!
//! This crate wires the pure rules in `arena-core` into something a client
//! can run: the campaign sequencer that feeds opponents into successive
//! battles, the topic-based event bus that fans the core's event stream out
//! to subscribers, scripted action policies, and the async session shell.
//!
//! Modules are organized by responsibility:
//! - [`campaign`] drives a player through an ordered roster of opponents
//! - [`events`] provides the topic-based bus and the sinks that feed it
//! - [`policy`] hosts action policies beyond the core's always-attack default
//! - [`session`] runs a campaign on a blocking task while subscribers consume
pub mod campaign;
pub mod error;
pub mod events;
pub mod policy;
pub mod session;

pub use campaign::{Campaign, CampaignReport};
pub use error::{Result, RuntimeError};
pub use events::{ArenaEvent, ArenaSink, BusSink, CampaignEvent, EventBus, RecordingSink, Topic};
pub use policy::ScriptedPolicy;
pub use session::{Session, random_seed};
