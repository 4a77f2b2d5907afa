use crate::{preferences::PreferenceRecord, types::Score};
use serde::{Deserialize, Serialize};

/// Scoring weights. `Default` is the production weighting; a data
/// directory may override individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_score:                 Score,
    pub workload_penalty_per_shift: Score,
    pub preferred_shift_type_bonus: Score,
    pub preferred_location_bonus:   Score,
    pub max_hours_penalty:          Score,
    /// Every shift is assumed to be this long when projecting weekly hours.
    pub assumed_shift_hours:        i64,
    pub swap_date_conflict_penalty: Score,
    pub swap_lighter_load_bonus:    Score,
    /// A swap partner must score strictly above this.
    pub swap_acceptance_threshold:  Score,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score:                 100,
            workload_penalty_per_shift: 5,
            preferred_shift_type_bonus: 20,
            preferred_location_bonus:   15,
            max_hours_penalty:          50,
            assumed_shift_hours:        8,
            swap_date_conflict_penalty: 80,
            swap_lighter_load_bonus:    10,
            swap_acceptance_threshold:  50,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub scoring:     ScoringConfig,
    /// Empty means "no preference store": the engine uses placeholders.
    pub preferences: Vec<PreferenceRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct PreferencesFile {
    preferences: Vec<PreferenceRecord>,
}

impl EngineConfig {
    /// Load from a data directory.
    /// `scoring.json` is required, `preferences.json` is optional.
    /// In tests, use EngineConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let scoring_path = format!("{data_dir}/scoring.json");
        let scoring_content = std::fs::read_to_string(&scoring_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {scoring_path}: {e}"))?;
        let scoring: ScoringConfig = serde_json::from_str(&scoring_content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {scoring_path}: {e}"))?;

        let pref_path = format!("{data_dir}/preferences.json");
        let preferences = match std::fs::read_to_string(&pref_path) {
            Ok(content) => {
                let file: PreferencesFile = serde_json::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Cannot parse {pref_path}: {e}"))?;
                file.preferences
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("config: {pref_path} not found; using placeholder preferences");
                Vec::new()
            }
            Err(e) => return Err(anyhow::anyhow!("Cannot read {pref_path}: {e}")),
        };

        log::info!(
            "config: loaded scoring from {scoring_path} ({} preference rows)",
            preferences.len()
        );

        Ok(Self { scoring, preferences })
    }

    /// Default weights and no preference table.
    pub fn default_test() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_weights() {
        let c = ScoringConfig::default();
        assert_eq!(c.base_score, 100);
        assert_eq!(c.workload_penalty_per_shift, 5);
        assert_eq!(c.preferred_shift_type_bonus, 20);
        assert_eq!(c.preferred_location_bonus, 15);
        assert_eq!(c.max_hours_penalty, 50);
        assert_eq!(c.assumed_shift_hours, 8);
        assert_eq!(c.swap_date_conflict_penalty, 80);
        assert_eq!(c.swap_lighter_load_bonus, 10);
        assert_eq!(c.swap_acceptance_threshold, 50);
    }

    #[test]
    fn partial_scoring_file_keeps_other_defaults() {
        let c: ScoringConfig = serde_json::from_str(r#"{ "max_hours_penalty": 70 }"#).unwrap();
        assert_eq!(c.max_hours_penalty, 70);
        assert_eq!(c.base_score, 100);
    }

    #[test]
    fn load_reads_data_directory() {
        let dir = std::env::temp_dir().join(format!("shiftplan-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("scoring.json"), r#"{ "base_score": 90 }"#).unwrap();
        std::fs::write(
            dir.join("preferences.json"),
            r#"{ "preferences": [ { "employeeId": 4, "preferredLocations": [2] } ] }"#,
        )
        .unwrap();

        let config = EngineConfig::load(dir.to_str().unwrap()).unwrap();
        assert_eq!(config.scoring.base_score, 90);
        assert_eq!(config.preferences.len(), 1);
        assert_eq!(config.preferences[0].employee_id, 4);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_without_scoring_file_fails() {
        let err = EngineConfig::load("/definitely/not/a/data/dir").unwrap_err();
        assert!(err.to_string().contains("scoring.json"), "unexpected error: {err}");
    }
}
