//! Configuration management for rollcall.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file is not an error: every section is optional
//! and falls back to its defaults.
//!
//! ## Configuration Structure
//!
//! - **Rules**: the attendance rules that are tunable per site, namely the
//!   tolerance window of the working-hours calculator and the number of
//!   overtime hours credited as one day in the summary balance.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use rollcall::libs::config::Config;
//!
//! let config = Config::read()?;
//! let rules = config.rules();
//! println!("Tolerance: {} minutes", rules.tolerance_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::summary::DEFAULT_OVERTIME_DAY_HOURS;
use super::working_hours::DEFAULT_TOLERANCE_MINUTES;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Attendance rule settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RulesConfig {
    /// Shortfall in minutes still credited as full allocated hours.
    ///
    /// An employee who works up to this many minutes less than their
    /// allocation is credited the allocation. Zero disables the window.
    pub tolerance_minutes: u64,

    /// Accumulated overtime hours that count as one extra day in the balance.
    pub overtime_day_hours: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            tolerance_minutes: DEFAULT_TOLERANCE_MINUTES as u64,
            overtime_day_hours: DEFAULT_OVERTIME_DAY_HOURS as u64,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesConfig>,
}

impl Config {
    /// Loads `config.json`, or the defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Like [`Config::read`], but reports an unreadable file and falls back
    /// to the defaults.
    pub fn read_or_default() -> Config {
        Self::read().unwrap_or_else(|e| {
            msg_error!(Message::ConfigReadFailed(e.to_string()));
            Config::default()
        })
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective rules: the configured section or the defaults.
    pub fn rules(&self) -> RulesConfig {
        self.rules.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, pre-filled with current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read_or_default();

        let node_descriptions = vec![ConfigModule {
            key: "rules".to_string(),
            name: Message::ConfigModuleRules.to_string(),
        }];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            if node_descriptions[selection].key == "rules" {
                let default = config.rules();
                msg_print!(Message::ConfigModuleRules);
                config.rules = Some(RulesConfig {
                    tolerance_minutes: Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptToleranceMinutes.to_string())
                        .default(default.tolerance_minutes)
                        .interact_text()?,
                    overtime_day_hours: Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptOvertimeDayHours.to_string())
                        .default(default.overtime_day_hours)
                        .interact_text()?,
                });
            }
        }

        Ok(config)
    }
}
