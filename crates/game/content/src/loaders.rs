//! Roster loading from RON files.

use std::path::Path;

use crate::roster::Roster;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loader for roster data from RON files.
///
/// RON format: a [`Roster`] record, e.g.
///
/// ```ron
/// (
///     player: (name: "Hero", max_health: 100, attack_power: 20, defense_power: 10),
///     opponents: [
///         (name: "Slime", max_health: 30, attack_power: 10, defense_power: 2, experience_reward: 50),
///     ],
/// )
/// ```
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster from a RON file.
    ///
    /// Validation builds every entity once, so a loaded roster is guaranteed
    /// to construct cleanly later.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;

        let roster: Roster = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        roster
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid roster entry in {}: {}", path.display(), e))?;

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_well_formed_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "roster.ron",
            r#"(
                player: (
                    name: "Hero",
                    max_health: 100,
                    attack_power: 20,
                    defense_power: 10,
                ),
                opponents: [
                    (name: "Slime", max_health: 30, attack_power: 10, defense_power: 2, experience_reward: 50),
                    (name: "Goblin", max_health: 50, attack_power: 15, defense_power: 5, experience_reward: 80),
                ],
            )"#,
        );

        let roster = RosterLoader::load(&path).unwrap();
        assert_eq!(roster.player.name, "Hero");
        // experience_threshold omitted in the file falls back to the default
        assert_eq!(roster.player.experience_threshold, 100);
        assert_eq!(roster.opponents.len(), 2);
        assert_eq!(roster.opponents[1].name, "Goblin");
    }

    #[test]
    fn rejects_malformed_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "broken.ron", "(player: oops");
        let error = RosterLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("parse"));
    }

    #[test]
    fn rejects_invalid_entities() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "invalid.ron",
            r#"(
                player: (name: "Hero", max_health: 100, attack_power: 20, defense_power: 10),
                opponents: [
                    (name: "Ghost", max_health: -5, attack_power: 1, defense_power: 0, experience_reward: 10),
                ],
            )"#,
        );
        let error = RosterLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("Invalid roster entry"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = RosterLoader::load(Path::new("/nonexistent/roster.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/roster.ron"));
    }

    #[test]
    fn bundled_sample_roster_loads() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/roster.ron");
        let roster = RosterLoader::load(&path).unwrap();
        assert_eq!(roster, Roster::default_demo());
    }
}
