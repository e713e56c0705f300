//! Error types shared across the combat core.
//!
//! Two classes exist and they never overlap: [`ConfigError`] rejects invalid
//! construction parameters and is fatal to the operation that surfaced it;
//! [`CombatError`] rejects invalid per-call arguments and leaves entity state
//! untouched. Defeat and victory are ordinary [`crate::BattleOutcome`] values,
//! never errors.

/// Errors raised while constructing combat entities or battles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("max health must be positive (got {0})")]
    NonPositiveMaxHealth(i32),

    #[error("attack power must be non-negative (got {0})")]
    NegativeAttackPower(i32),

    #[error("defense power must be non-negative (got {0})")]
    NegativeDefensePower(i32),

    #[error("experience reward must be non-negative (got {0})")]
    NegativeExperienceReward(i32),

    #[error("battle participant '{name}' must start alive")]
    ParticipantNotAlive { name: String },
}

/// Errors raised by combat operations on otherwise valid entities.
///
/// The operation validates before mutating, so entity state is unchanged
/// whenever one of these is returned. Callers must not retry with the same
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("amount must be non-negative (got {0})")]
    NegativeAmount(i32),
}
