use crate::domain::{LabelClassifier, Stability, TagPattern, Version};
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "release-stability.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".release-stability.toml";

/// Represents the complete configuration for release-stability.
///
/// Contains the tag naming pattern, the version used when no release exists yet,
/// label aliases, and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_tag_pattern() -> String {
    "{version}".to_string()
}

fn default_initial_version() -> String {
    "0.1.0".to_string()
}

/// Returns the default label aliases.
fn default_aliases() -> HashMap<String, Stability> {
    HashMap::from([("docs".to_string(), Stability::Pedantic)])
}

/// Extra label names that map onto a stability level.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LabelsConfig {
    #[serde(default = "default_aliases")]
    pub aliases: HashMap<String, Stability>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        LabelsConfig {
            aliases: default_aliases(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Plan a release even if some changes have no stability
    #[serde(default)]
    pub allow_unknown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_pattern: default_tag_pattern(),
            initial_version: default_initial_version(),
            labels: LabelsConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text and validate it
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.tag_pattern()?;
        self.initial_version()?;
        self.validate_aliases()
    }

    /// Labels match case-insensitively, so alias keys must be unique ignoring case
    fn validate_aliases(&self) -> Result<()> {
        let mut labels: Vec<&String> = self.labels.aliases.keys().collect();
        labels.sort();

        let mut seen: HashMap<String, &String> = HashMap::new();
        for label in labels {
            if let Some(previous) = seen.insert(label.to_lowercase(), label) {
                return Err(ReleaseError::config(format!(
                    "labels.aliases: '{}' and '{}' differ only by case",
                    previous, label
                )));
            }
        }
        Ok(())
    }

    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_pattern.as_str())
            .map_err(|e| ReleaseError::config(format!("tag_pattern: {}", e)))
    }

    pub fn initial_version(&self) -> Result<Version> {
        Version::parse(&self.initial_version)
            .map_err(|e| ReleaseError::config(format!("initial_version: {}", e)))
    }

    pub fn classifier(&self) -> LabelClassifier {
        LabelClassifier::new(&self.labels.aliases)
    }
}

/// Finds the configuration file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `release-stability.toml` in current directory
/// 3. `.release-stability.toml` in user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path)?;
            Config::from_toml(&content)
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}
