//! Application configuration.
//!
//! Settings are stored as JSON in the platform data directory. A missing
//! file yields defaults; `init` runs a small interactive wizard.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;

pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_REFRESH_SECS: u64 = 60;

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interval, in seconds, between watch-mode re-renders of the bucketed
    /// view. Only derived labels change between ticks; task data does not.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl Config {
    /// Reads the stored configuration, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn read() -> Result<Config> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            Err(_) => Ok(Config::default()),
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut file = File::create(path)?;
        file.write_all(serde_json::to_string_pretty(self)?.as_bytes())?;
        Ok(())
    }

    /// Interactive setup wizard, seeded with current values.
    pub fn init() -> Result<Config> {
        let current = Config::read()?;
        let refresh_secs: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Watch refresh interval (seconds)")
            .default(current.refresh_secs)
            .interact_text()?;
        Ok(Config { refresh_secs })
    }

    /// Removes the stored configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
