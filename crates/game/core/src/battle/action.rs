//! Player intent and the policy seam that supplies it.

use crate::entity::{Opponent, Player};

/// One of the player's per-turn choices.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerAction {
    /// Attack power plus a bounded random component.
    #[strum(serialize = "attack", to_string = "basic_attack")]
    BasicAttack,
    /// Fixed multiple of attack power, no variance.
    Skill,
    /// Restore a fixed amount of the player's own health.
    Heal,
}

/// Read-only snapshot handed to the policy each player turn.
#[derive(Clone, Copy, Debug)]
pub struct BattleView<'a> {
    /// 1-based round number of the turn being decided.
    pub round: u32,
    pub player: &'a Player,
    pub opponent: &'a Opponent,
}

/// Decision source for the player's per-turn choice.
///
/// Implementations range from scripted fixtures to interactive input; the
/// engine calls this exactly once per round, synchronously.
pub trait ActionPolicy {
    fn select_action(&mut self, view: BattleView<'_>) -> PlayerAction;
}

/// Reference policy: always chooses the basic attack.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAttack;

impl ActionPolicy for AlwaysAttack {
    fn select_action(&mut self, _view: BattleView<'_>) -> PlayerAction {
        PlayerAction::BasicAttack
    }
}
