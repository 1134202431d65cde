//! Settings file support.
//!
//! Settings live in a TOML file. Without `--config`, the file is looked up
//! in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/org.gfr-slope.gfr-slope/
//! - Windows: %APPDATA%/gfr-slope/gfr-slope/config/
//! - Linux: ~/.config/gfr-slope/
//!
//! ```toml
//! [assessment]
//! slope_type = "chronic"
//! study_size = "modest"
//! population = "western"
//!
//! [output]
//! format = "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use gfr_model::{PopulationPreference, RawPatientInput, SlopeType, StudySize};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "gfr-slope";
const APP_NAME: &str = "gfr-slope";
const CONFIG_FILENAME: &str = "gfr-slope.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Defaults applied to fields the caller left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssessmentDefaults {
    pub slope_type: Option<SlopeType>,
    pub study_size: Option<StudySize>,
    pub population: Option<PopulationPreference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub assessment: AssessmentDefaults,
    pub output: OutputSettings,
}

impl Settings {
    /// Fills tag fields that `raw` leaves unset.
    pub fn apply_defaults(&self, raw: &mut RawPatientInput) {
        let defaults = &self.assessment;
        if raw.slope_type.is_none() {
            raw.slope_type = defaults.slope_type.map(|value| value.as_str().to_string());
        }
        if raw.study_size.is_none() {
            raw.study_size = defaults.study_size.map(|value| value.as_str().to_string());
        }
        if raw.population.is_none() {
            raw.population = defaults.population.map(|value| value.as_str().to_string());
        }
    }
}

/// Get the path of the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

pub fn parse_settings(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings.
///
/// An explicit path must exist and parse. The default file is optional:
/// when it is missing or unreadable, built-in defaults are used.
///
/// # Errors
///
/// Returns a [`ConfigError`] when an explicit settings file cannot be read
/// or parsed.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = parse_settings(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        return Ok(settings);
    }

    let Some(path) = settings_path() else {
        tracing::debug!("could not determine settings path, using defaults");
        return Ok(Settings::default());
    };
    match fs::read_to_string(&path) {
        Ok(content) => match parse_settings(&content, &path) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(error) => {
                tracing::warn!("{error}, using defaults");
                Ok(Settings::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file found, using defaults");
            Ok(Settings::default())
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                "failed to read settings file: {error}, using defaults"
            );
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let settings = parse_settings("", Path::new("empty.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.output.format, OutputFormat::Table);
    }

    #[test]
    fn defaults_do_not_override_caller_values() {
        let settings = Settings {
            assessment: AssessmentDefaults {
                slope_type: Some(SlopeType::Chronic),
                study_size: Some(StudySize::Modest),
                population: None,
            },
            ..Settings::default()
        };
        let mut raw = RawPatientInput {
            study_size: Some("infinite".to_string()),
            ..RawPatientInput::default()
        };
        settings.apply_defaults(&mut raw);
        assert_eq!(raw.slope_type.as_deref(), Some("chronic"));
        assert_eq!(raw.study_size.as_deref(), Some("infinite"));
        assert_eq!(raw.population, None);
    }
}
