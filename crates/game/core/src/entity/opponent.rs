//! Scripted opponents with a randomized basic attack.

use crate::config::BattleTuning;
use crate::entity::Combatant;
use crate::error::{CombatError, ConfigError};
use crate::event::EventSink;
use crate::rng::RandomSource;

/// An opponent: a combatant consumed by exactly one encounter, carrying the
/// experience it is worth.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opponent {
    combatant: Combatant,
    experience_reward: i32,
}

impl Opponent {
    /// Creates an opponent at full health.
    ///
    /// # Errors
    ///
    /// Rejects the same parameters as [`Combatant::new`], plus a negative
    /// experience reward.
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        attack_power: i32,
        defense_power: i32,
        experience_reward: i32,
    ) -> Result<Self, ConfigError> {
        if experience_reward < 0 {
            return Err(ConfigError::NegativeExperienceReward(experience_reward));
        }
        Ok(Self {
            combatant: Combatant::new(name, max_health, attack_power, defense_power)?,
            experience_reward,
        })
    }

    pub fn name(&self) -> &str {
        self.combatant.name()
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    /// Experience granted to the player on victory. Fixed at construction.
    pub fn experience_reward(&self) -> i32 {
        self.experience_reward
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    /// The opponent's only behavior: attack power plus a bounded random
    /// component rolled from the injected source.
    pub fn perform_attack(
        &self,
        target: &mut Combatant,
        rng: &mut dyn RandomSource,
        tuning: &BattleTuning,
        events: &mut dyn EventSink,
    ) -> Result<(), CombatError> {
        let variance = rng.next_int(0, tuning.opponent_attack_variance) as i32;
        let damage = self.combatant.attack_power() + variance;
        target.take_damage(self.combatant.name(), damage, events)
    }
}
