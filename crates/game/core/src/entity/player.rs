//! The player-controlled combatant and its experience progression.

use crate::config::{BattleTuning, ProgressionTuning};
use crate::entity::Combatant;
use crate::error::{CombatError, ConfigError};
use crate::event::{CombatEvent, EventSink};

/// Experience and level state.
///
/// Invariant: `experience < to_next_level` holds whenever
/// [`Player::gain_experience`] returns, and `to_next_level` is positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    level: i32,
    experience: i32,
    to_next_level: i32,
}

impl Progression {
    /// Experience required for the first level-up when not overridden.
    pub const DEFAULT_TO_NEXT_LEVEL: i32 = 100;

    fn new(to_next_level: i32) -> Self {
        Self {
            level: 1,
            experience: 0,
            to_next_level,
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn to_next_level(&self) -> i32 {
        self.to_next_level
    }
}

/// The player: a combatant that levels up and carries across encounters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    combatant: Combatant,
    progression: Progression,
}

impl Player {
    /// Creates a level-1 player at full health with the default experience
    /// threshold.
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        attack_power: i32,
        defense_power: i32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            combatant: Combatant::new(name, max_health, attack_power, defense_power)?,
            progression: Progression::new(Progression::DEFAULT_TO_NEXT_LEVEL),
        })
    }

    /// Overrides the first level-up threshold. Values below 1 are clamped.
    pub fn with_experience_threshold(mut self, to_next_level: i32) -> Self {
        self.progression.to_next_level = to_next_level.max(1);
        self
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

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    /// Banks experience and processes any level-ups it triggers.
    ///
    /// Overflow past the threshold is carried into the next level rather
    /// than discarded, so one large grant can produce several level-ups.
    ///
    /// # Errors
    ///
    /// `CombatError::NegativeAmount` when `amount < 0`; state is untouched.
    pub fn gain_experience(
        &mut self,
        amount: i32,
        tuning: &ProgressionTuning,
        events: &mut dyn EventSink,
    ) -> Result<(), CombatError> {
        if amount < 0 {
            return Err(CombatError::NegativeAmount(amount));
        }

        self.progression.experience += amount;
        events.publish(CombatEvent::ExperienceGained {
            name: self.combatant.name().to_string(),
            amount,
            total: self.progression.experience,
        });

        while self.progression.experience >= self.progression.to_next_level {
            self.level_up(tuning, events);
        }

        Ok(())
    }

    fn level_up(&mut self, tuning: &ProgressionTuning, events: &mut dyn EventSink) {
        self.progression.level += 1;
        self.progression.experience -= self.progression.to_next_level;
        self.progression.to_next_level += tuning.experience_increment;

        self.combatant
            .apply_level_gains(tuning.health_gain, tuning.attack_gain, tuning.defense_gain);

        events.publish(CombatEvent::LeveledUp {
            name: self.combatant.name().to_string(),
            level: self.progression.level,
            stats: self.combatant.stat_block(),
        });
    }

    /// The player's high-damage special action: a fixed multiple of attack
    /// power with no random variance.
    pub fn use_skill(
        &self,
        target: &mut Combatant,
        tuning: &BattleTuning,
        events: &mut dyn EventSink,
    ) -> Result<(), CombatError> {
        let damage = self.combatant.attack_power() * tuning.skill_multiplier;
        target.take_damage(self.combatant.name(), damage, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventLog, NullSink};

    fn hero() -> Player {
        Player::new("Hero", 100, 20, 10).unwrap()
    }

    #[test]
    fn exact_threshold_triggers_one_level_up() {
        let mut player = hero();
        let tuning = ProgressionTuning::new();
        let mut log = EventLog::new();

        player.gain_experience(100, &tuning, &mut log).unwrap();

        assert_eq!(player.progression().level(), 2);
        assert_eq!(player.progression().experience(), 0);
        assert_eq!(player.progression().to_next_level(), 150);
        assert_eq!(player.combatant().max_health(), 120);
        assert_eq!(player.combatant().health(), 120);
        assert_eq!(player.combatant().attack_power(), 25);
        assert_eq!(player.combatant().defense_power(), 13);
    }

    #[test]
    fn overflow_is_carried_not_discarded() {
        let mut player = hero();
        let tuning = ProgressionTuning::new();
        let mut sink = NullSink;

        player.gain_experience(90, &tuning, &mut sink).unwrap();
        player.gain_experience(15, &tuning, &mut sink).unwrap();

        assert_eq!(player.progression().level(), 2);
        assert_eq!(player.progression().experience(), 5);
        assert_eq!(player.progression().to_next_level(), 150);
    }

    #[test]
    fn large_grant_produces_multiple_level_ups() {
        let mut player = hero();
        let tuning = ProgressionTuning::new();
        let mut log = EventLog::new();

        // 100 to reach level 2, 150 more to reach level 3, 10 left over
        player.gain_experience(260, &tuning, &mut log).unwrap();

        assert_eq!(player.progression().level(), 3);
        assert_eq!(player.progression().experience(), 10);
        assert_eq!(player.progression().to_next_level(), 200);

        let level_ups = log
            .iter()
            .filter(|event| matches!(event, CombatEvent::LeveledUp { .. }))
            .count();
        assert_eq!(level_ups, 2);
    }

    #[test]
    fn experience_stays_below_threshold_after_processing() {
        let mut player = hero();
        let tuning = ProgressionTuning::new();
        let mut sink = NullSink;

        for amount in [30, 170, 999, 42, 0, 88] {
            player.gain_experience(amount, &tuning, &mut sink).unwrap();
            assert!(
                player.progression().experience() < player.progression().to_next_level()
            );
        }
    }

    #[test]
    fn negative_experience_is_rejected_without_mutation() {
        let mut player = hero();
        let tuning = ProgressionTuning::new();
        let mut log = EventLog::new();

        assert_eq!(
            player.gain_experience(-10, &tuning, &mut log),
            Err(CombatError::NegativeAmount(-10))
        );
        assert_eq!(player.progression().experience(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn level_up_event_carries_stats_snapshot() {
        let mut player = hero();
        let tuning = ProgressionTuning::new();
        let mut log = EventLog::new();

        player.gain_experience(100, &tuning, &mut log).unwrap();

        let stats = log
            .iter()
            .find_map(|event| match event {
                CombatEvent::LeveledUp { stats, level, .. } => Some((*level, *stats)),
                _ => None,
            })
            .expect("level-up event missing");
        assert_eq!(stats.0, 2);
        assert_eq!(stats.1.max_health, 120);
        assert_eq!(stats.1.health, 120);
    }

    #[test]
    fn skill_deals_double_attack_through_mitigation() {
        let player = hero();
        let mut target = Combatant::new("Golem", 200, 5, 6).unwrap();
        let tuning = BattleTuning::new();
        let mut sink = NullSink;

        player.use_skill(&mut target, &tuning, &mut sink).unwrap();

        // 20 * 2 = 40, mitigated by 6 defense
        assert_eq!(target.health(), 200 - 34);
    }
}
