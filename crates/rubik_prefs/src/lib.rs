//! User preferences for the cube simulator.
//!
//! Preferences are stored as YAML. The embedded defaults are loaded first and
//! the user's file, if any, is layered on top.

#[macro_use]
extern crate lazy_static;

use std::error::Error;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

mod display;
mod sim;
#[cfg(test)]
mod tests;

pub use display::*;
pub use sim::*;

const PREFS_FILE_NAME: &str = "rubik";
const PREFS_FILE_EXTENSION: &str = "yaml";
const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Preferences from the embedded default file.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).unwrap_or_default();
}

// File paths
lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "Rubik");
    static ref PREFS_FILE_PATH: Result<PathBuf, PrefsError> = match &*PROJECT_DIRS {
        Some(proj_dirs) => {
            let mut p = proj_dirs.config_dir().to_owned();
            p.push(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}"));
            Ok(p)
        }
        None => Err(PrefsError::NoPreferencesPath),
    };
}

/// Error locating the preferences file.
#[derive(strum::Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// The platform has no configuration directory for this user.
    #[strum(serialize = "unable to get preferences file path")]
    NoPreferencesPath,
}
impl Error for PrefsError {}

/// Returns the default location of the user preferences file.
pub fn prefs_file_path() -> Result<PathBuf, PrefsError> {
    PREFS_FILE_PATH.clone()
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    /// Behavior of the simulation.
    pub sim: SimPrefs,
    /// Rendering hints for frontends.
    pub display: DisplayPrefs,
}
impl Preferences {
    /// Loads preferences, layering the user file at `path` (or at the default
    /// location, if `path` is `None`) on top of the defaults.
    ///
    /// A missing file at the default location is not an error. Any other
    /// error is logged and the defaults are returned.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = config::Config::builder();

        // Load default preferences.
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        config = config.add_source(default_config_source);

        // Load user preferences.
        match path {
            Some(path) => {
                log::info!("Loading preferences from {}", path.display());
                config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
            }
            None => match &*PREFS_FILE_PATH {
                Ok(path) => {
                    config = config.add_source(
                        config::File::from(path.as_ref())
                            .format(PREFS_FILE_FORMAT)
                            .required(false),
                    );
                }
                Err(e) => log::warn!("Error loading user preferences: {e}"),
            },
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves preferences to `path`, or to the default location if `path` is
    /// `None`.
    pub fn save(&self, path: Option<&Path>) -> eyre::Result<()> {
        let path = match path {
            Some(p) => p.to_owned(),
            None => prefs_file_path()?,
        };
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(&path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the preferences serialized as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_norway::Error> {
        serde_norway::to_string(self)
    }
}
