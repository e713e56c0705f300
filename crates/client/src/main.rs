//! Arena client binary.
//!
//! Composition root that assembles:
//! 1. Content - the roster (built-in gauntlet or a RON file)
//! 2. Runtime - the campaign session and its event bus
//! 3. Rendering - event stream to stdout, diagnostics to stderr via tracing
//!
//! # Examples
//!
//! ```bash
//! # Run the built-in gauntlet with a random seed
//! cargo run -p arena-client
//!
//! # Reproducible run with a scripted opening
//! ARENA_SEED=42 ARENA_SCRIPT=skill,attack cargo run -p arena-client
//!
//! # Machine-readable event stream
//! ARENA_FORMAT=json cargo run -p arena-client
//! ```

mod config;
mod render;

use anyhow::Result;
use tokio::sync::broadcast;

use arena_content::{Roster, RosterLoader};
use arena_core::BattleConfig;
use arena_runtime::{Campaign, CampaignEvent, ArenaEvent, ScriptedPolicy, Session, random_seed};

use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    run(config).await
}

async fn run(config: ClientConfig) -> Result<()> {
    let roster = match &config.roster_path {
        Some(path) => RosterLoader::load(path)?,
        None => Roster::default_demo(),
    };
    let seed = config.seed.unwrap_or_else(random_seed);

    tracing::info!(seed, player = roster.player.name.as_str(), "starting campaign");

    let session = Session::new();
    let events = session.subscribe_all();
    let renderer = tokio::spawn(render_stream(events, config.format));

    let campaign = Campaign::from_roster(&roster, BattleConfig::new())?;
    let policy = ScriptedPolicy::new(config.script.clone());
    let report = session.run(campaign, policy, seed).await?;

    renderer.await?;

    let player = &report.player;
    println!(
        "\nFinal: {} - level {}, {}/{} HP, {} encounters won",
        player.name(),
        player.progression().level(),
        player.combatant().health(),
        player.combatant().max_health(),
        report
            .outcomes
            .iter()
            .filter(|outcome| matches!(outcome, arena_core::BattleOutcome::PlayerVictory))
            .count(),
    );

    Ok(())
}

/// Drains the firehose until the campaign's terminal event.
async fn render_stream(
    mut events: broadcast::Receiver<ArenaEvent>,
    format: config::OutputFormat,
) {
    loop {
        match events.recv().await {
            Ok(event) => {
                if let Some(line) = render::render(&event, format) {
                    println!("{line}");
                }
                if matches!(
                    event,
                    ArenaEvent::Campaign(CampaignEvent::CampaignFinished { .. })
                ) {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "renderer lagged behind the event stream");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
