//! Dashboard snapshot loading.
//!
//! A snapshot is the JSON document holding the stats and workouts shown on
//! the dashboard:
//!
//! ```json
//! {
//!   "stats": [
//!     { "title": "Calories Burned", "value": 1250, "icon": "flame",
//!       "trend": { "value": 8, "isPositive": true } }
//!   ],
//!   "workouts": [
//!     { "title": "Morning HIIT", "subtitle": "Full body burn",
//!       "image": "assets/workouts/hiit.jpg", "difficulty": "hard",
//!       "duration": "25 min" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fitforge_ui::{Difficulty, Icon, Stat, Trend, Workout};
use serde::{Deserialize, Serialize};

/// File name looked up in the config directory when no path is given
const SNAPSHOT_FILE: &str = "dashboard.json";

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

impl DashboardSnapshot {
    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))
    }

    /// Built-in dashboard shown when no snapshot file is available
    pub fn sample() -> Self {
        Self {
            stats: vec![
                Stat::new("Calories Burned", 1250, Icon::Flame).with_trend(Trend::new(8.0, true)),
                Stat::new("Active Minutes", 312, Icon::Activity).with_trend(Trend::new(-4.0, false)),
                Stat::new("Avg Heart Rate", "128 bpm", Icon::Heart),
                Stat::new("Workouts", 12, Icon::Trophy).with_trend(Trend::new(15.0, true)),
            ],
            workouts: vec![
                Workout {
                    title: "Morning Yoga".to_string(),
                    subtitle: "Mobility and breath work".to_string(),
                    image: "assets/workouts/yoga.jpg".to_string(),
                    difficulty: Difficulty::Easy,
                    duration: "20 min".to_string(),
                },
                Workout {
                    title: "Strength Circuit".to_string(),
                    subtitle: "Compound lifts, upper and lower".to_string(),
                    image: "assets/workouts/strength.jpg".to_string(),
                    difficulty: Difficulty::Medium,
                    duration: "45 min".to_string(),
                },
                Workout {
                    title: "HIIT Blast".to_string(),
                    subtitle: "Full body intervals".to_string(),
                    image: "assets/workouts/hiit.jpg".to_string(),
                    difficulty: Difficulty::Hard,
                    duration: "25 min".to_string(),
                },
            ],
        }
    }
}

/// Default snapshot location: `<config_dir>/fitforge/dashboard.json`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fitforge").join(SNAPSHOT_FILE))
}

/// Pick the snapshot to display.
///
/// An explicit path wins; otherwise the default location is tried if it
/// exists. Any load failure is logged and the sample dashboard is used.
pub fn resolve(explicit: Option<&Path>) -> DashboardSnapshot {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_path().filter(|path| path.exists()),
    };

    let Some(path) = candidate else {
        tracing::info!("No snapshot file, using sample dashboard");
        return DashboardSnapshot::sample();
    };

    match DashboardSnapshot::load(&path) {
        Ok(snapshot) => {
            tracing::info!(
                path = %path.display(),
                stats = snapshot.stats.len(),
                workouts = snapshot.workouts.len(),
                "Loaded dashboard snapshot"
            );
            snapshot
        }
        Err(e) => {
            tracing::warn!("{:#}; using sample dashboard", e);
            DashboardSnapshot::sample()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_snapshot() {
        let file = write_temp(
            r#"{
                "stats": [
                    { "title": "Steps", "value": "8,432", "icon": "activity" },
                    { "title": "Calories", "value": 540, "icon": "flame",
                      "trend": { "value": -3, "isPositive": false } }
                ],
                "workouts": [
                    { "title": "Row", "subtitle": "Intervals", "image": "row.jpg",
                      "difficulty": "medium", "duration": "30 min" }
                ]
            }"#,
        );

        let snapshot = DashboardSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.stats.len(), 2);
        assert_eq!(snapshot.stats[1].trend, Some(Trend::new(-3.0, false)));
        assert_eq!(snapshot.workouts[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let file = write_temp("{}");

        let snapshot = DashboardSnapshot::load(file.path()).unwrap();
        assert!(snapshot.stats.is_empty());
        assert!(snapshot.workouts.is_empty());
    }

    #[test]
    fn test_unknown_difficulty_is_a_parse_error() {
        let file = write_temp(
            r#"{ "workouts": [
                { "title": "Ultra", "subtitle": "", "image": "", "difficulty": "extreme",
                  "duration": "3 h" }
            ] }"#,
        );

        let err = DashboardSnapshot::load(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse snapshot"));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = DashboardSnapshot::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.json"));
    }

    #[test]
    fn test_resolve_falls_back_to_sample() {
        let file = write_temp("not json");

        assert_eq!(resolve(Some(file.path())), DashboardSnapshot::sample());
    }

    #[test]
    fn test_sample_covers_every_difficulty() {
        let sample = DashboardSnapshot::sample();
        for difficulty in Difficulty::ALL {
            assert!(sample.workouts.iter().any(|w| w.difficulty == difficulty));
        }
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let sample = DashboardSnapshot::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let parsed: DashboardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample);
    }
}
