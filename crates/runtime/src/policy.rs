//! Action policies beyond the core's always-attack default.

use arena_core::{ActionPolicy, BattleView, PlayerAction};

/// Replays a fixed action sequence, then repeats its last entry.
///
/// An empty script degenerates to basic attacks, matching the reference
/// policy.
#[derive(Clone, Debug)]
pub struct ScriptedPolicy {
    script: Vec<PlayerAction>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(script: Vec<PlayerAction>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl ActionPolicy for ScriptedPolicy {
    fn select_action(&mut self, _view: BattleView<'_>) -> PlayerAction {
        let Some(&action) = self.script.get(self.cursor).or(self.script.last()) else {
            return PlayerAction::BasicAttack;
        };
        self.cursor += 1;
        action
    }
}
