use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::utils;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Quiet period after the last edit before the list is written out.
    #[serde(default = "default_save_debounce_ms")]
    pub save_debounce_ms: u64,
    #[serde(default)]
    pub key_bindings: KeyBindings,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_add")]
    pub add: String,
    #[serde(default = "default_toggle_done")]
    pub toggle_done: String,
    #[serde(default = "default_delete")]
    pub delete: String,
    #[serde(default = "default_mark_started")]
    pub mark_started: String,
    #[serde(default = "default_cycle_filter")]
    pub cycle_filter: String,
    #[serde(default = "default_list_up")]
    pub list_up: String,
    #[serde(default = "default_list_down")]
    pub list_down: String,
    #[serde(default = "default_help")]
    pub help: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_fg")]
    pub fg: String,
    #[serde(default = "default_bg")]
    pub bg: String,
    #[serde(default = "default_done_fg")]
    pub done_fg: String,
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            save_debounce_ms: default_save_debounce_ms(),
            key_bindings: KeyBindings::default(),
            theme: Theme::default(),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: default_quit(),
            add: default_add(),
            toggle_done: default_toggle_done(),
            delete: default_delete(),
            mark_started: default_mark_started(),
            cycle_filter: default_cycle_filter(),
            list_up: default_list_up(),
            list_down: default_list_down(),
            help: default_help(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: default_fg(),
            bg: default_bg(),
            done_fg: default_done_fg(),
            highlight_bg: default_highlight_bg(),
            highlight_fg: default_highlight_fg(),
        }
    }
}

// Default value functions
fn default_data_path() -> String {
    // Fallback only - the profile-aware path is set at load time
    Config::default_data_path_for_profile(utils::Profile::Prod)
}

fn default_save_debounce_ms() -> u64 {
    400
}

fn default_quit() -> String {
    "q".to_string()
}

fn default_add() -> String {
    "a".to_string()
}

fn default_toggle_done() -> String {
    "Space".to_string()
}

fn default_delete() -> String {
    "d".to_string()
}

fn default_mark_started() -> String {
    "s".to_string()
}

fn default_cycle_filter() -> String {
    "f".to_string()
}

fn default_list_up() -> String {
    "k".to_string()
}

fn default_list_down() -> String {
    "j".to_string()
}

fn default_help() -> String {
    "F1".to_string()
}

fn default_fg() -> String {
    "white".to_string()
}

fn default_bg() -> String {
    "black".to_string()
}

fn default_done_fg() -> String {
    "darkgray".to_string()
}

fn default_highlight_bg() -> String {
    "blue".to_string()
}

fn default_highlight_fg() -> String {
    "white".to_string()
}

impl Config {
    /// Load configuration from file, or create default if missing
    /// Uses the provided profile to determine config and data paths
    pub fn load_with_profile(profile: utils::Profile) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(profile)?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            let mut config: Config = toml::from_str(&contents)?;

            // Ensure the data path matches the profile (in case the config
            // was copied between dev and prod)
            config.data_path = Self::default_data_path_for_profile(profile);

            Ok(config)
        } else {
            let mut config = Config::default();
            config.data_path = Self::default_data_path_for_profile(profile);
            config.save_with_profile(profile)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save_with_profile(&self, profile: utils::Profile) -> Result<(), ConfigError> {
        let config_path = Self::get_config_path(profile)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, toml_string).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path(profile: utils::Profile) -> Result<PathBuf, ConfigError> {
        let config_dir = utils::get_config_dir(profile).ok_or_else(|| {
            ConfigError::ConfigDirError("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get default data file path for a specific profile
    fn default_data_path_for_profile(profile: utils::Profile) -> String {
        if let Some(data_dir) = utils::get_data_dir(profile) {
            data_dir.join("todos.json").to_string_lossy().to_string()
        } else {
            match profile {
                utils::Profile::Dev => "~/.local/share/tudu-dev/todos.json".to_string(),
                utils::Profile::Prod => "~/.local/share/tudu/todos.json".to_string(),
            }
        }
    }

    /// Get the expanded data file path (with ~ expansion)
    pub fn get_data_path(&self) -> PathBuf {
        utils::expand_path(&self.data_path)
    }

    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_takes_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.save_debounce_ms, 400);
        assert_eq!(config.key_bindings.quit, "q");
        assert_eq!(config.key_bindings.toggle_done, "Space");
        assert_eq!(config.theme.fg, "white");
    }

    #[test]
    fn partial_document_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str(
            r#"
            save_debounce_ms = 150

            [key_bindings]
            quit = "x"
            "#,
        )
        .unwrap();
        assert_eq!(config.save_debounce_ms, 150);
        assert_eq!(config.key_bindings.quit, "x");
        assert_eq!(config.key_bindings.add, "a");
    }

    #[test]
    fn default_bindings_all_parse() {
        let bindings = KeyBindings::default();
        for key in [
            &bindings.quit,
            &bindings.add,
            &bindings.toggle_done,
            &bindings.delete,
            &bindings.mark_started,
            &bindings.cycle_filter,
            &bindings.list_up,
            &bindings.list_down,
            &bindings.help,
        ] {
            assert!(crate::utils::parse_key_binding(key).is_ok(), "bad default: {key}");
        }
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let reloaded: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(reloaded.save_debounce_ms, config.save_debounce_ms);
        assert_eq!(reloaded.key_bindings.help, config.key_bindings.help);
    }
}
