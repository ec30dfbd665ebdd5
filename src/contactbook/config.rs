use crate::directory::DEFAULT_WINDOW_DAYS;
use crate::error::{ContactsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Keys accepted by [`ContactsConfig::get`] and [`ContactsConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["data-file", "birthday-window-days"];

/// Configuration for contactbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// File name (relative to the home directory) or absolute path of the contacts file
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How many days ahead the `birthdays` command looks
    #[serde(default = "default_window_days")]
    pub birthday_window_days: u32,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            birthday_window_days: default_window_days(),
        }
    }
}

/// Error text for a key outside [`CONFIG_KEYS`], listing the valid ones.
pub fn unknown_key_message(key: &str) -> String {
    format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    )
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ContactsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Where the contacts file lives for a given home directory.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        home.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "birthday-window-days" => Some(self.birthday_window_days.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(ContactsError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "birthday-window-days" => {
                self.birthday_window_days = value.parse().map_err(|_| {
                    ContactsError::Config(format!(
                        "birthday-window-days must be a non-negative number, got {}",
                        value
                    ))
                })?;
            }
            other => return Err(ContactsError::Config(unknown_key_message(other))),
        }
        Ok(())
    }
}
