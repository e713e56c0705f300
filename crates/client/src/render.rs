//! Turns the event stream into lines on stdout.
//!
//! The core and runtime never format text; everything the user reads comes
//! from here.

use arena_core::{BattleOutcome, CombatEvent};
use arena_runtime::{ArenaEvent, CampaignEvent};

use crate::config::OutputFormat;

/// Renders one event, or `None` for events with no visible line.
pub fn render(event: &ArenaEvent, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(event).ok(),
        OutputFormat::Text => render_text(event),
    }
}

fn render_text(event: &ArenaEvent) -> Option<String> {
    let line = match event {
        ArenaEvent::Combat(combat) => match combat {
            CombatEvent::Damaged {
                attacker,
                target,
                mitigated: 0,
                ..
            } => format!("{target} shrugs off {attacker}'s attack."),
            CombatEvent::Damaged {
                attacker,
                target,
                mitigated,
                remaining,
            } => format!("{attacker} hits {target} for {mitigated} ({remaining} HP left)."),
            CombatEvent::Healed {
                target,
                restored,
                health,
            } => format!("{target} recovers {restored} HP ({health} HP)."),
            CombatEvent::ExperienceGained {
                name,
                amount,
                total,
            } => format!("{name} gains {amount} EXP ({total} total)."),
            CombatEvent::LeveledUp { name, level, stats } => format!(
                "{name} reaches level {level}! HP {hp}, ATK {atk}, DEF {def}.",
                hp = stats.max_health,
                atk = stats.attack_power,
                def = stats.defense_power,
            ),
            CombatEvent::Defeated { name } => format!("{name} falls!"),
            CombatEvent::BattleEnded { outcome } => match outcome {
                BattleOutcome::PlayerVictory => "Victory!".to_string(),
                BattleOutcome::PlayerDefeat => "Defeat...".to_string(),
            },
        },
        ArenaEvent::Campaign(campaign) => match campaign {
            CampaignEvent::EncounterStarted { index, opponent } => {
                format!("\n=== Encounter {}: {opponent} ===", index + 1)
            }
            // The outcome was already narrated by BattleEnded
            CampaignEvent::EncounterFinished { .. } => return None,
            CampaignEvent::CampaignFinished {
                survived,
                encounters_fought,
            } => {
                if *survived {
                    format!("\nAll {encounters_fought} encounters won. The arena is yours!")
                } else {
                    format!("\nThe run ends after {encounters_fought} encounter(s). GAME OVER")
                }
            }
        },
    };
    Some(line)
}
