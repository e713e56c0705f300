//! Tunable balance parameters.
//!
//! Every number the combat model depends on lives here rather than inline at
//! the call sites, so scripted fixtures and balance experiments can swap a
//! whole table at once.

/// Balance constants applied within a single encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleTuning {
    /// Exclusive upper bound on the random component of an opponent's attack.
    pub opponent_attack_variance: u32,
    /// Exclusive upper bound on the random component of the player's basic attack.
    pub player_attack_variance: u32,
    /// Multiplier applied to attack power by the player's skill (no variance).
    pub skill_multiplier: i32,
    /// Fixed amount restored by the player's heal action.
    pub heal_amount: i32,
}

impl BattleTuning {
    pub const DEFAULT_OPPONENT_ATTACK_VARIANCE: u32 = 10;
    pub const DEFAULT_PLAYER_ATTACK_VARIANCE: u32 = 15;
    pub const DEFAULT_SKILL_MULTIPLIER: i32 = 2;
    pub const DEFAULT_HEAL_AMOUNT: i32 = 30;

    pub fn new() -> Self {
        Self {
            opponent_attack_variance: Self::DEFAULT_OPPONENT_ATTACK_VARIANCE,
            player_attack_variance: Self::DEFAULT_PLAYER_ATTACK_VARIANCE,
            skill_multiplier: Self::DEFAULT_SKILL_MULTIPLIER,
            heal_amount: Self::DEFAULT_HEAL_AMOUNT,
        }
    }
}

impl Default for BattleTuning {
    fn default() -> Self {
        Self::new()
    }
}

/// Stat growth applied on each level-up.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionTuning {
    /// Added to the experience threshold after every level-up.
    pub experience_increment: i32,
    pub health_gain: i32,
    pub attack_gain: i32,
    pub defense_gain: i32,
}

impl ProgressionTuning {
    pub const DEFAULT_EXPERIENCE_INCREMENT: i32 = 50;
    pub const DEFAULT_HEALTH_GAIN: i32 = 20;
    pub const DEFAULT_ATTACK_GAIN: i32 = 5;
    pub const DEFAULT_DEFENSE_GAIN: i32 = 3;

    pub fn new() -> Self {
        Self {
            experience_increment: Self::DEFAULT_EXPERIENCE_INCREMENT,
            health_gain: Self::DEFAULT_HEALTH_GAIN,
            attack_gain: Self::DEFAULT_ATTACK_GAIN,
            defense_gain: Self::DEFAULT_DEFENSE_GAIN,
        }
    }
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete configuration for one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    pub tuning: BattleTuning,
    pub progression: ProgressionTuning,
    /// Safety valve: rounds after which a stalemated battle aborts.
    pub max_rounds: u32,
}

impl BattleConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

    pub fn new() -> Self {
        Self {
            tuning: BattleTuning::new(),
            progression: ProgressionTuning::new(),
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
