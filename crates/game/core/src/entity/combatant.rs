//! The stat block and mutation primitives shared by all combatants.

use crate::error::{CombatError, ConfigError};
use crate::event::{CombatEvent, EventSink};

/// Integer health meter with a hard `0 <= current <= maximum` bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    current: i32,
    maximum: i32,
}

impl HealthMeter {
    /// Meter starting at full. `maximum` must already be validated positive.
    fn at_max(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Lowers current health, clamping at zero. Returns the new value.
    fn lower(&mut self, amount: i32) -> i32 {
        self.current = (self.current - amount).max(0);
        self.current
    }

    /// Raises current health, clamping at the maximum. Returns the amount
    /// actually restored.
    fn raise(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current + amount).min(self.maximum);
        self.current - before
    }

    /// Grows the maximum and refills to full.
    fn grow_and_refill(&mut self, gain: i32) {
        self.maximum += gain;
        self.current = self.maximum;
    }
}

/// Snapshot of a combatant's stats, carried on level-up events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub defense_power: i32,
}

/// Vitality and offense/defense state shared by player and opponents.
///
/// All quantities are validated at construction; afterwards the only way to
/// change them is through [`take_damage`](Self::take_damage),
/// [`heal`](Self::heal), and level-up growth, each of which preserves the
/// health bound invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    health: HealthMeter,
    attack_power: i32,
    defense_power: i32,
}

impl Combatant {
    /// Creates a combatant at full health.
    ///
    /// # Errors
    ///
    /// Rejects an empty name, non-positive max health, or negative attack or
    /// defense power.
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        attack_power: i32,
        defense_power: i32,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if max_health <= 0 {
            return Err(ConfigError::NonPositiveMaxHealth(max_health));
        }
        if attack_power < 0 {
            return Err(ConfigError::NegativeAttackPower(attack_power));
        }
        if defense_power < 0 {
            return Err(ConfigError::NegativeDefensePower(defense_power));
        }

        Ok(Self {
            name,
            health: HealthMeter::at_max(max_health),
            attack_power,
            defense_power,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health.current()
    }

    pub fn max_health(&self) -> i32 {
        self.health.maximum()
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    pub fn defense_power(&self) -> i32 {
        self.defense_power
    }

    pub fn stat_block(&self) -> StatBlock {
        StatBlock {
            health: self.health.current(),
            max_health: self.health.maximum(),
            attack_power: self.attack_power,
            defense_power: self.defense_power,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health.current() > 0
    }

    /// Applies incoming damage after defense mitigation.
    ///
    /// Emits a [`CombatEvent::Damaged`] with the mitigated amount and, when
    /// this call brought health to zero, a [`CombatEvent::Defeated`].
    ///
    /// # Errors
    ///
    /// `CombatError::NegativeAmount` when `amount < 0`; state is untouched.
    pub fn take_damage(
        &mut self,
        attacker: &str,
        amount: i32,
        events: &mut dyn EventSink,
    ) -> Result<(), CombatError> {
        if amount < 0 {
            return Err(CombatError::NegativeAmount(amount));
        }

        let was_alive = self.is_alive();
        let mitigated = (amount - self.defense_power).max(0);
        let remaining = self.health.lower(mitigated);

        events.publish(CombatEvent::Damaged {
            attacker: attacker.to_string(),
            target: self.name.clone(),
            mitigated,
            remaining,
        });

        if was_alive && !self.is_alive() {
            events.publish(CombatEvent::Defeated {
                name: self.name.clone(),
            });
        }

        Ok(())
    }

    /// Restores health up to the maximum.
    ///
    /// A combatant already at zero health stays at zero: healing does not
    /// revive within an encounter. The heal event is still emitted with the
    /// amount actually restored (zero in that case, or at the cap).
    ///
    /// # Errors
    ///
    /// `CombatError::NegativeAmount` when `amount < 0`; state is untouched.
    pub fn heal(&mut self, amount: i32, events: &mut dyn EventSink) -> Result<(), CombatError> {
        if amount < 0 {
            return Err(CombatError::NegativeAmount(amount));
        }

        let restored = if self.is_alive() {
            self.health.raise(amount)
        } else {
            0
        };

        events.publish(CombatEvent::Healed {
            target: self.name.clone(),
            restored,
            health: self.health.current(),
        });

        Ok(())
    }

    /// Applies permanent level-up growth: max health grows and refills,
    /// attack and defense increase.
    pub(crate) fn apply_level_gains(&mut self, health_gain: i32, attack_gain: i32, defense_gain: i32) {
        self.health.grow_and_refill(health_gain);
        self.attack_power += attack_gain;
        self.defense_power += defense_gain;
    }
}
