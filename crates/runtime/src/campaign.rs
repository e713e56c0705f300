//! The encounter sequencer.
//!
//! A [`Campaign`] owns the player and an ordered roster of opponents. Each
//! opponent is moved into exactly one battle and dropped when it ends; the
//! player carries its health and progression forward. A defeated player stops
//! the sequence early and the remaining opponents never fight.

use arena_core::{
    ActionPolicy, BattleConfig, BattleEngine, BattleOutcome, Opponent, PcgRandom, Player,
    derive_seed,
};
use arena_content::Roster;

use crate::error::Result;
use crate::events::{ArenaSink, CampaignEvent, CoreBridge};

/// A player and the ordered opponents they will face.
pub struct Campaign {
    player: Player,
    opponents: Vec<Opponent>,
    config: BattleConfig,
}

/// What happened across a whole campaign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignReport {
    /// One outcome per battle actually fought, in order.
    pub outcomes: Vec<BattleOutcome>,
    pub encounters_fought: usize,
    /// Opponents skipped because the player fell earlier in the sequence.
    pub encounters_skipped: usize,
    pub survived: bool,
    /// Final player state, including progression earned along the way.
    pub player: Player,
}

impl Campaign {
    pub fn new(player: Player, opponents: Vec<Opponent>, config: BattleConfig) -> Self {
        Self {
            player,
            opponents,
            config,
        }
    }

    /// Builds a campaign from roster templates.
    pub fn from_roster(roster: &Roster, config: BattleConfig) -> Result<Self> {
        let (player, opponents) = roster.build()?;
        Ok(Self::new(player, opponents, config))
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Runs every encounter to its terminal state, stopping early if the
    /// player falls.
    ///
    /// Each battle gets its own RNG derived from `seed` and the encounter
    /// index, so a fixed seed and action policy reproduce the campaign
    /// exactly regardless of how many encounters actually run.
    pub fn run(
        self,
        policy: &mut dyn ActionPolicy,
        seed: u64,
        sink: &mut dyn ArenaSink,
    ) -> Result<CampaignReport> {
        let Campaign {
            mut player,
            opponents,
            config,
        } = self;

        let total = opponents.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, mut opponent) in opponents.into_iter().enumerate() {
            if !player.is_alive() {
                break;
            }

            tracing::debug!(
                encounter = index,
                opponent = opponent.name(),
                "starting encounter"
            );
            sink.campaign(CampaignEvent::EncounterStarted {
                index,
                opponent: opponent.name().to_string(),
            });

            let mut rng = PcgRandom::seeded(derive_seed(seed, index as u64));
            let outcome = {
                let mut engine = BattleEngine::new(&mut player, &mut opponent, &config)?;
                let mut bridge = CoreBridge(&mut *sink);
                engine.run(policy, &mut rng, &mut bridge)?
            };

            tracing::debug!(encounter = index, ?outcome, "encounter finished");
            sink.campaign(CampaignEvent::EncounterFinished { index, outcome });
            outcomes.push(outcome);
        }

        let survived = player.is_alive();
        let encounters_fought = outcomes.len();
        sink.campaign(CampaignEvent::CampaignFinished {
            survived,
            encounters_fought,
        });

        Ok(CampaignReport {
            outcomes,
            encounters_fought,
            encounters_skipped: total - encounters_fought,
            survived,
            player,
        })
    }
}
