//! Combatant templates and the roster that groups them.

use arena_core::{ConfigError, Opponent, Player, Progression};

/// Blueprint for the player character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerTemplate {
    pub name: String,
    pub max_health: i32,
    pub attack_power: i32,
    pub defense_power: i32,
    /// Experience required for the first level-up.
    #[cfg_attr(feature = "serde", serde(default = "default_experience_threshold"))]
    pub experience_threshold: i32,
}

#[cfg(feature = "serde")]
fn default_experience_threshold() -> i32 {
    Progression::DEFAULT_TO_NEXT_LEVEL
}

impl PlayerTemplate {
    /// Validates the template by building the core entity.
    pub fn build(&self) -> Result<Player, ConfigError> {
        Ok(Player::new(
            self.name.clone(),
            self.max_health,
            self.attack_power,
            self.defense_power,
        )?
        .with_experience_threshold(self.experience_threshold))
    }
}

/// Blueprint for one opponent in a roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentTemplate {
    pub name: String,
    pub max_health: i32,
    pub attack_power: i32,
    pub defense_power: i32,
    pub experience_reward: i32,
}

impl OpponentTemplate {
    pub fn build(&self) -> Result<Opponent, ConfigError> {
        Opponent::new(
            self.name.clone(),
            self.max_health,
            self.attack_power,
            self.defense_power,
            self.experience_reward,
        )
    }
}

/// The player plus the ordered opponent sequence a campaign consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub player: PlayerTemplate,
    pub opponents: Vec<OpponentTemplate>,
}

impl Roster {
    /// The built-in three-fight gauntlet.
    pub fn default_demo() -> Self {
        Self {
            player: PlayerTemplate {
                name: "Hero".to_string(),
                max_health: 100,
                attack_power: 20,
                defense_power: 10,
                experience_threshold: Progression::DEFAULT_TO_NEXT_LEVEL,
            },
            opponents: vec![
                OpponentTemplate {
                    name: "Slime".to_string(),
                    max_health: 30,
                    attack_power: 10,
                    defense_power: 2,
                    experience_reward: 50,
                },
                OpponentTemplate {
                    name: "Goblin".to_string(),
                    max_health: 50,
                    attack_power: 15,
                    defense_power: 5,
                    experience_reward: 80,
                },
                OpponentTemplate {
                    name: "Dragon".to_string(),
                    max_health: 100,
                    attack_power: 25,
                    defense_power: 10,
                    experience_reward: 150,
                },
            ],
        }
    }

    /// Builds every entity in the roster, surfacing the first invalid entry.
    pub fn build(&self) -> Result<(Player, Vec<Opponent>), ConfigError> {
        let player = self.player.build()?;
        let opponents = self
            .opponents
            .iter()
            .map(OpponentTemplate::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((player, opponents))
    }
}
