//! Study configuration loading.
//!
//! Sources, lowest to highest priority: built-in defaults, the JSON file
//! named by `--config`, then per-field flags and `FLASHDECK_*` variables.
//! The merged result is validated once, here.

use std::fs;
use std::path::Path;

use flashdeck_core::{StudyConfig, validate_config};

use crate::error::CliError;
use crate::parser::ConfigOverrides;

/// Build the effective configuration.
pub fn load_config(
    file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<StudyConfig, CliError> {
    let mut config = match file {
        Some(path) => read_config_file(path)?,
        None => StudyConfig::default(),
    };
    apply_overrides(&mut config, overrides);
    validate_config(&config)?;

    tracing::debug!(?config, "Study configuration loaded");
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<StudyConfig, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| CliError::Config(format!("invalid JSON in {}: {e}", path.display())))
}

/// Apply flag/environment overrides in place.
pub fn apply_overrides(config: &mut StudyConfig, overrides: &ConfigOverrides) {
    if let Some(ms) = overrides.front_ms {
        config.front_display_ms = ms;
    }
    if let Some(ms) = overrides.back_ms {
        config.back_display_ms = ms;
    }
    if let Some(threshold) = overrides.swipe_threshold {
        config.swipe_threshold = threshold;
    }
    if let Some(language) = &overrides.front_language {
        config.front_language.clone_from(language);
    }
    if let Some(language) = &overrides.back_language {
        config.back_language.clone_from(language);
    }
    if let Some(level) = overrides.level {
        config.default_level = level;
    }
    if overrides.resume_level_positions {
        config.resume_level_positions = true;
    }
    if overrides.quiet_flip {
        config.speak_on_flip = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_core::Level;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, StudyConfig::default());
    }

    #[test]
    fn test_overrides_beat_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("study.json");
        fs::write(
            &path,
            r#"{"frontDisplayMs": 2000, "backDisplayMs": 2500, "defaultLevel": "elementary"}"#,
        )
        .unwrap();
        let overrides = ConfigOverrides {
            front_ms: Some(1200),
            quiet_flip: true,
            ..ConfigOverrides::default()
        };

        let config = load_config(Some(&path), &overrides).unwrap();

        assert_eq!(config.front_display_ms, 1200);
        assert_eq!(config.back_display_ms, 2500);
        assert_eq!(config.default_level, Level::Elementary);
        assert!(!config.speak_on_flip);
    }

    #[test]
    fn test_invalid_merged_config_is_rejected() {
        let overrides = ConfigOverrides {
            back_ms: Some(5),
            ..ConfigOverrides::default()
        };

        let err = load_config(None, &overrides).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("study.json");
        fs::write(&path, "{ nope").unwrap();

        let err = load_config(Some(&path), &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("invalid JSON")));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let tmp = tempdir().unwrap();
        let err = load_config(Some(&tmp.path().join("absent.json")), &ConfigOverrides::default())
            .unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }
}
