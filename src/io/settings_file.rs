use std::path::{Path, PathBuf};

use crate::error::SettingsResult;
use crate::model::Settings;

const APP_NAME: &str = "DayPlanner";

/// Locations of the settings file and the log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub settings: PathBuf,
    pub log_dir: PathBuf,
}

/// Resolve the OS config/data directories, falling back to the working
/// directory when no home directory is known.
pub fn config_paths() -> ConfigPaths {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", APP_NAME) {
        ConfigPaths {
            settings: proj_dirs.config_dir().join("settings.json"),
            log_dir: proj_dirs.data_dir().join("logs"),
        }
    } else {
        let dir = PathBuf::from(".");
        ConfigPaths {
            settings: dir.join("settings.json"),
            log_dir: dir.join("logs"),
        }
    }
}

/// Save settings to a JSON file, creating parent directories as needed.
pub fn save_settings(settings: &Settings, path: &Path) -> SettingsResult<()> {
    let json = serde_json::to_string_pretty(settings)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}

/// Load and validate settings from a JSON file.
pub fn load_settings(path: &Path) -> SettingsResult<Settings> {
    let json = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&json)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            zoom_level: 3.5,
            start_hour: 6,
            ..Settings::default()
        };

        save_settings(&settings, &path).unwrap();

        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "zoom_level": 0 }"#).unwrap();

        assert!(matches!(load_settings(&path), Err(SettingsError::InvalidZoom(_))));
    }

    #[test]
    fn load_reports_missing_file_as_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
