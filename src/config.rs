// SPDX-License-Identifier: GPL-3.0-only
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::settings::{DEFAULT_SEPARATOR, is_valid_separator};

pub const APP_DIR: &str = "monitor-ctrl";
pub const CONFIG_FILE: &str = "config.json";
pub const MAX_PROFILES: usize = 10;

/// A named settings batch, stored in the batch text format
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SettingsProfile {
    pub name: String,
    pub settings: String,
}

impl SettingsProfile {
    pub fn new(name: String, settings: String) -> Self {
        Self { name, settings }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Character between `key=value` tokens of a batch
    pub separator: char,
    /// Model applied to when none is given on the command line
    pub model_filter: String,
    pub log_file: Option<PathBuf>,
    /// Saved settings profiles
    pub profiles: Vec<SettingsProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            model_filter: "*".to_string(),
            log_file: None,
            profiles: Vec::new(),
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/monitor-ctrl/config.json` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location, defaults if there is no file
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config dir, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()
            .ok_or_else(|| AppError::Config("no config dir".to_string()))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, content)?;
        info!("config saved to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_separator(self.separator) {
            return Err(AppError::Config(format!(
                "invalid separator {:?}",
                self.separator
            )));
        }
        if self.profiles.len() > MAX_PROFILES {
            return Err(AppError::Config(format!(
                "too many profiles: {}, max {MAX_PROFILES}",
                self.profiles.len()
            )));
        }
        Ok(())
    }

    /// Find a profile by name
    pub fn get_profile(&self, name: &str) -> Option<&SettingsProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Add or replace a profile, false if a new one would exceed `MAX_PROFILES`
    pub fn save_profile(&mut self, profile: SettingsProfile) -> bool {
        let replacing = self.get_profile(&profile.name).is_some();
        if !replacing && self.profiles.len() >= MAX_PROFILES {
            warn!("can't save profile {}: limit of {MAX_PROFILES} reached", profile.name);
            return false;
        }
        self.profiles.retain(|p| p.name != profile.name);
        self.profiles.push(profile);
        true
    }

    /// Delete a profile by name
    pub fn delete_profile(&mut self, name: &str) -> bool {
        let len_before = self.profiles.len();
        self.profiles.retain(|p| p.name != name);
        self.profiles.len() != len_before
    }
}
