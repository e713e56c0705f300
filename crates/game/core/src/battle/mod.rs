//! The battle state machine driving one encounter to a terminal outcome.
//!
//! [`BattleEngine`] is the authoritative reducer for an encounter. It borrows
//! both participants for exactly one battle, alternates rounds (player first,
//! opponent second, early exit on victory), and reports the terminal
//! [`BattleOutcome`] as an ordinary value. All effects surface through the
//! event sink; the engine itself holds no state beyond the encounter.

mod action;

pub use action::{ActionPolicy, AlwaysAttack, BattleView, PlayerAction};

use crate::config::BattleConfig;
use crate::entity::{Opponent, Player};
use crate::error::{CombatError, ConfigError};
use crate::event::{CombatEvent, EventSink};
use crate::rng::RandomSource;

/// Terminal result of an encounter. Produced exactly once per battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    PlayerVictory,
    PlayerDefeat,
}

/// Where the encounter currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleState {
    InProgress,
    Complete(BattleOutcome),
}

impl BattleState {
    pub fn is_complete(&self) -> bool {
        matches!(self, BattleState::Complete(_))
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            BattleState::InProgress => None,
            BattleState::Complete(outcome) => Some(*outcome),
        }
    }
}

/// Errors surfaced while stepping a battle.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    /// The battle already reached a terminal state.
    #[error("battle is already complete")]
    BattleOver,

    /// Safety valve tripped: no terminal state within the configured cap.
    /// Indicates a stalemated tuning, not a normal outcome.
    #[error("battle failed to terminate within {rounds} rounds")]
    RoundLimitReached { rounds: u32 },

    #[error(transparent)]
    Combat(#[from] CombatError),
}

/// State machine for a single encounter between the player and one opponent.
pub struct BattleEngine<'a> {
    player: &'a mut Player,
    opponent: &'a mut Opponent,
    config: &'a BattleConfig,
    state: BattleState,
    round: u32,
}

impl<'a> BattleEngine<'a> {
    /// Starts an encounter in `InProgress`.
    ///
    /// # Errors
    ///
    /// `ConfigError::ParticipantNotAlive` when either side starts at zero
    /// health (a player carried over from an earlier defeat, for example).
    pub fn new(
        player: &'a mut Player,
        opponent: &'a mut Opponent,
        config: &'a BattleConfig,
    ) -> Result<Self, ConfigError> {
        if !player.is_alive() {
            return Err(ConfigError::ParticipantNotAlive {
                name: player.name().to_string(),
            });
        }
        if !opponent.is_alive() {
            return Err(ConfigError::ParticipantNotAlive {
                name: opponent.name().to_string(),
            });
        }

        Ok(Self {
            player,
            opponent,
            config,
            state: BattleState::InProgress,
            round: 0,
        })
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    fn view(&self) -> BattleView<'_> {
        BattleView {
            round: self.round,
            player: self.player,
            opponent: self.opponent,
        }
    }

    /// Plays one round: player action, then (unless the opponent fell) the
    /// opponent's counterattack.
    ///
    /// On victory the opponent's reward is granted to the player before the
    /// outcome event is published, so experience and level-up events always
    /// precede `BattleEnded` in the stream.
    ///
    /// # Errors
    ///
    /// [`BattleError::BattleOver`] when called after a terminal state,
    /// [`BattleError::RoundLimitReached`] when the stalemate cap trips.
    pub fn step(
        &mut self,
        policy: &mut dyn ActionPolicy,
        rng: &mut dyn RandomSource,
        events: &mut dyn EventSink,
    ) -> Result<&BattleState, BattleError> {
        if self.state.is_complete() {
            return Err(BattleError::BattleOver);
        }
        if self.round >= self.config.max_rounds {
            return Err(BattleError::RoundLimitReached { rounds: self.round });
        }
        self.round += 1;

        self.player_turn(policy, rng, events)?;

        if !self.opponent.is_alive() {
            self.player.gain_experience(
                self.opponent.experience_reward(),
                &self.config.progression,
                events,
            )?;
            return Ok(self.complete(BattleOutcome::PlayerVictory, events));
        }

        self.opponent.perform_attack(
            self.player.combatant_mut(),
            rng,
            &self.config.tuning,
            events,
        )?;

        if !self.player.is_alive() {
            return Ok(self.complete(BattleOutcome::PlayerDefeat, events));
        }

        Ok(&self.state)
    }

    fn player_turn(
        &mut self,
        policy: &mut dyn ActionPolicy,
        rng: &mut dyn RandomSource,
        events: &mut dyn EventSink,
    ) -> Result<(), BattleError> {
        let action = policy.select_action(self.view());
        let tuning = &self.config.tuning;

        match action {
            PlayerAction::BasicAttack => {
                let variance = rng.next_int(0, tuning.player_attack_variance) as i32;
                let damage = self.player.combatant().attack_power() + variance;
                self.opponent
                    .combatant_mut()
                    .take_damage(self.player.name(), damage, events)?;
            }
            PlayerAction::Skill => {
                self.player
                    .use_skill(self.opponent.combatant_mut(), tuning, events)?;
            }
            PlayerAction::Heal => {
                self.player
                    .combatant_mut()
                    .heal(tuning.heal_amount, events)?;
            }
        }

        Ok(())
    }

    fn complete(&mut self, outcome: BattleOutcome, events: &mut dyn EventSink) -> &BattleState {
        self.state = BattleState::Complete(outcome);
        events.publish(CombatEvent::BattleEnded { outcome });
        &self.state
    }

    /// Steps until the battle reaches a terminal state.
    pub fn run(
        &mut self,
        policy: &mut dyn ActionPolicy,
        rng: &mut dyn RandomSource,
        events: &mut dyn EventSink,
    ) -> Result<BattleOutcome, BattleError> {
        loop {
            if let Some(outcome) = self.step(policy, rng, events)?.outcome() {
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventLog, NullSink};
    use crate::rng::{MinimumRandom, PcgRandom};

    fn hero() -> Player {
        Player::new("Hero", 100, 20, 10).unwrap()
    }

    fn slime() -> Opponent {
        Opponent::new("Slime", 30, 10, 2, 50).unwrap()
    }

    /// With zero variance: 18 mitigated per hit, the slime falls on round
    /// two before it can act, and the reward lands before the outcome.
    #[test]
    fn zero_variance_slime_fight_plays_out_exactly() {
        let mut player = hero();
        let mut opponent = slime();
        let config = BattleConfig::new();
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();
        let mut policy = AlwaysAttack;
        let mut rng = MinimumRandom;
        let mut log = EventLog::new();

        // Round 1: player deals max(0, 20 - 2) = 18, slime at 12; slime's
        // 10 attack is fully mitigated by 10 defense.
        assert_eq!(
            engine.step(&mut policy, &mut rng, &mut log).unwrap(),
            &BattleState::InProgress
        );
        assert_eq!(opponent.combatant().health(), 12);
        assert_eq!(player.combatant().health(), 100);

        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();
        let outcome = engine.run(&mut policy, &mut rng, &mut log).unwrap();

        assert_eq!(outcome, BattleOutcome::PlayerVictory);
        assert_eq!(player.progression().experience(), 50);
        assert_eq!(player.combatant().health(), 100);
    }

    #[test]
    fn victory_event_order_puts_reward_before_outcome() {
        let mut player = hero();
        let mut opponent = Opponent::new("Rat", 5, 1, 0, 30).unwrap();
        let config = BattleConfig::new();
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();
        let mut log = EventLog::new();

        engine
            .run(&mut AlwaysAttack, &mut MinimumRandom, &mut log)
            .unwrap();

        let kinds: Vec<&'static str> = log
            .iter()
            .map(|event| match event {
                CombatEvent::Damaged { .. } => "damaged",
                CombatEvent::Defeated { .. } => "defeated",
                CombatEvent::ExperienceGained { .. } => "experience",
                CombatEvent::BattleEnded { .. } => "ended",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["damaged", "defeated", "experience", "ended"]);
    }

    #[test]
    fn opponent_does_not_act_after_falling() {
        let mut player = hero();
        let mut opponent = Opponent::new("Rat", 5, 100, 0, 10).unwrap();
        let config = BattleConfig::new();
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();

        engine
            .run(&mut AlwaysAttack, &mut MinimumRandom, &mut NullSink)
            .unwrap();

        // The rat hits for 100 - 10 = 90 if it ever acts; full health proves
        // it never did.
        assert_eq!(player.combatant().health(), 100);
    }

    #[test]
    fn player_defeat_ends_the_battle_with_no_reward() {
        let mut player = Player::new("Hero", 10, 0, 0).unwrap();
        let mut opponent = Opponent::new("Dragon", 1000, 50, 50, 150).unwrap();
        let config = BattleConfig::new();
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();
        let mut log = EventLog::new();

        let outcome = engine
            .run(&mut AlwaysAttack, &mut MinimumRandom, &mut log)
            .unwrap();

        assert_eq!(outcome, BattleOutcome::PlayerDefeat);
        assert!(!player.is_alive());
        assert_eq!(player.progression().experience(), 0);
        assert!(
            log.iter()
                .all(|event| !matches!(event, CombatEvent::ExperienceGained { .. }))
        );
    }

    #[test]
    fn heal_action_restores_the_player() {
        struct HealOnce {
            healed: bool,
        }
        impl ActionPolicy for HealOnce {
            fn select_action(&mut self, _view: BattleView<'_>) -> PlayerAction {
                if self.healed {
                    PlayerAction::BasicAttack
                } else {
                    self.healed = true;
                    PlayerAction::Heal
                }
            }
        }

        let mut player = hero();
        let mut sink = NullSink;
        player
            .combatant_mut()
            .take_damage("setup", 60, &mut sink)
            .unwrap(); // 50 health

        let mut opponent = slime();
        let config = BattleConfig::new();
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();
        let mut policy = HealOnce { healed: false };

        engine
            .step(&mut policy, &mut MinimumRandom, &mut NullSink)
            .unwrap();

        // 50 + 30 healed, slime's attack fully mitigated
        assert_eq!(player.combatant().health(), 80);
        assert_eq!(opponent.combatant().health(), 30);
    }

    #[test]
    fn skill_action_doubles_attack_power() {
        struct SkillOnly;
        impl ActionPolicy for SkillOnly {
            fn select_action(&mut self, _view: BattleView<'_>) -> PlayerAction {
                PlayerAction::Skill
            }
        }

        let mut player = hero();
        let mut opponent = Opponent::new("Golem", 100, 5, 6, 40).unwrap();
        let config = BattleConfig::new();
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();

        engine
            .step(&mut SkillOnly, &mut MinimumRandom, &mut NullSink)
            .unwrap();

        // 20 * 2 - 6 = 34
        assert_eq!(opponent.combatant().health(), 66);
    }

    #[test]
    fn starting_with_a_dead_participant_is_rejected() {
        let mut player = Player::new("Hero", 10, 0, 0).unwrap();
        let mut sink = NullSink;
        player
            .combatant_mut()
            .take_damage("setup", 100, &mut sink)
            .unwrap();
        let mut opponent = slime();
        let config = BattleConfig::new();

        let result = BattleEngine::new(&mut player, &mut opponent, &config);
        assert!(matches!(
            result,
            Err(ConfigError::ParticipantNotAlive { .. })
        ));
    }

    #[test]
    fn stepping_a_finished_battle_fails() {
        let mut player = hero();
        let mut opponent = Opponent::new("Rat", 5, 1, 0, 10).unwrap();
        let config = BattleConfig::new();
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();

        engine
            .run(&mut AlwaysAttack, &mut MinimumRandom, &mut NullSink)
            .unwrap();
        let result = engine.step(&mut AlwaysAttack, &mut MinimumRandom, &mut NullSink);
        assert!(matches!(result, Err(BattleError::BattleOver)));
    }

    /// Both sides fully mitigate each other, so nothing can ever die; the
    /// round cap must trip instead of looping forever.
    #[test]
    fn stalemate_trips_the_round_cap() {
        let mut player = Player::new("Turtle", 100, 1, 50).unwrap();
        let mut opponent = Opponent::new("Shell", 100, 1, 50, 10).unwrap();
        let config = BattleConfig::new().with_max_rounds(16);
        let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();

        let result = engine.run(&mut AlwaysAttack, &mut PcgRandom::seeded(3), &mut NullSink);
        assert!(matches!(
            result,
            Err(BattleError::RoundLimitReached { rounds: 16 })
        ));
    }

    #[test]
    fn fixed_seed_and_script_reproduce_identical_streams() {
        let run = || {
            let mut player = hero();
            let mut opponent = Opponent::new("Goblin", 50, 15, 5, 80).unwrap();
            let config = BattleConfig::new();
            let mut engine = BattleEngine::new(&mut player, &mut opponent, &config).unwrap();
            let mut rng = PcgRandom::seeded(0xDEADBEEF);
            let mut log = EventLog::new();
            let outcome = engine.run(&mut AlwaysAttack, &mut rng, &mut log).unwrap();
            (outcome, log, player)
        };

        let (outcome_a, log_a, player_a) = run();
        let (outcome_b, log_b, player_b) = run();

        assert_eq!(outcome_a, outcome_b);
        assert_eq!(log_a, log_b);
        assert_eq!(player_a, player_b);
    }
}
