//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core rules and worker coordination so clients can
//! bubble them up with consistent context.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] arena_core::ConfigError),

    #[error(transparent)]
    Battle(#[from] arena_core::BattleError),

    #[error("campaign worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
