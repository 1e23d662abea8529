use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub level: LevelFileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct LevelFileConfig {
    #[serde(default = "default_level_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_command_log")]
    pub enable_command_log: bool,
    #[serde(default = "default_command_log_path")]
    pub command_log_path: String,
    #[serde(default = "default_compact_log_path")]
    pub compact_log_path: String,
}

// Default values
fn default_level_path() -> String { "test_data/square_4x4.json".to_string() }
fn default_enable_command_log() -> bool { false }
fn default_command_log_path() -> String { "command_log.json".to_string() }
fn default_compact_log_path() -> String { "command_log.bin".to_string() }

impl Default for LevelFileConfig {
    fn default() -> Self {
        Self {
            path: default_level_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_command_log: default_enable_command_log(),
            command_log_path: default_command_log_path(),
            compact_log_path: default_compact_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: LevelFileConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => Config::default(),
        }
    }
}
