//! Client configuration from process environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use arena_core::PlayerAction;

/// How the renderer writes events to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable battle narration.
    Text,
    /// One JSON object per event (for piping into other tools).
    Json,
}

/// Client-side settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Campaign seed; a fresh random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Path to a roster RON file; the built-in gauntlet when unset.
    pub roster_path: Option<PathBuf>,
    /// The player's scripted action sequence; empty means always attack.
    pub script: Vec<PlayerAction>,
    pub format: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            roster_path: None,
            script: Vec::new(),
            format: OutputFormat::Text,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - Campaign seed (u64; random when unset)
    /// - `ARENA_ROSTER` - Path to a roster RON file
    /// - `ARENA_SCRIPT` - Comma-separated actions, e.g. `attack,skill,heal`
    /// - `ARENA_FORMAT` - `text` (default) or `json`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("ARENA_SEED");
        config.roster_path = env::var("ARENA_ROSTER").ok().map(PathBuf::from);

        if let Ok(raw) = env::var("ARENA_SCRIPT") {
            config.script = parse_script(&raw);
        }

        if let Ok(raw) = env::var("ARENA_FORMAT") {
            match raw.to_lowercase().as_str() {
                "json" => config.format = OutputFormat::Json,
                "text" => config.format = OutputFormat::Text,
                other => tracing::warn!(format = other, "unknown ARENA_FORMAT, using text"),
            }
        }

        config
    }
}

/// Parses a comma-separated action script, skipping tokens that do not name
/// an action.
pub(crate) fn parse_script(raw: &str) -> Vec<PlayerAction> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match PlayerAction::from_str(token) {
            Ok(action) => Some(action),
            Err(_) => {
                tracing::warn!(token, "unknown action in ARENA_SCRIPT, skipping");
                None
            }
        })
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}
