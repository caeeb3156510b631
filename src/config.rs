use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub max_alternatives: Option<usize>,
    pub min_similarity_score: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_movement_weight")]
    pub movement: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_placement_weight")]
    pub placement: u32,
    #[serde(default = "default_special_feature_weight")]
    pub special_feature: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            movement: default_movement_weight(),
            location: default_location_weight(),
            placement: default_placement_weight(),
            special_feature: default_special_feature_weight(),
        }
    }
}

fn default_movement_weight() -> u32 { 1 }
fn default_location_weight() -> u32 { 1 }
fn default_placement_weight() -> u32 { 1 }
fn default_special_feature_weight() -> u32 { 2 }

/// Log settings for the embedding application's subscriber
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with JOINTFINDER_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with JOINTFINDER_)
            // e.g., JOINTFINDER_MATCHING__MAX_ALTERNATIVES -> matching.max_alternatives
            .add_source(
                Environment::with_prefix("JOINTFINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOINTFINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
