use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FrontkitError, Result};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "frontkit.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE_NAME: &str = ".frontkit.toml";

/// Placeholder replaced by the component name in the component template.
pub const DEFAULT_PLACEHOLDER: &str = "{{filename}}";

/// Default React component shell.
pub const DEFAULT_COMPONENT_TEMPLATE: &str = "import React from 'react';

// Styles
import styles from './{{filename}}.module.scss';

const {{filename}} = () => {
    return (
    <div>
        {/* Your component code here */}
    </div>
    );
};

export default {{filename}};
";

/// Represents the complete configuration for frontkit.
///
/// Every fixed path, template and marker used by the four commands lives here so
/// each operation can be driven with explicit values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub component: ComponentConfig,

    #[serde(default)]
    pub env: EnvConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_components_dir() -> PathBuf {
    PathBuf::from("src/components")
}

fn default_main_stylesheet() -> PathBuf {
    PathBuf::from("src/styles/main.scss")
}

/// Project-relative locations used by the stripper and the scaffolder.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,

    #[serde(default = "default_main_stylesheet")]
    pub main_stylesheet: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            source_dir: default_source_dir(),
            components_dir: default_components_dir(),
            main_stylesheet: default_main_stylesheet(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Component template settings.
///
/// `template` wins over `template_path`; with neither set the built-in React shell is used.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComponentConfig {
    #[serde(default)]
    pub template: Option<String>,

    #[serde(default)]
    pub template_path: Option<PathBuf>,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        ComponentConfig {
            template: None,
            template_path: None,
            placeholder: default_placeholder(),
        }
    }
}

impl ComponentConfig {
    /// Resolves the template text, reading `template_path` relative to `root`.
    pub fn resolve_template(&self, root: &Path) -> Result<String> {
        if let Some(template) = &self.template {
            return Ok(template.clone());
        }
        match &self.template_path {
            Some(path) => fs::read_to_string(root.join(path)).map_err(|e| {
                FrontkitError::config(format!(
                    "Cannot read component template '{}': {}",
                    path.display(),
                    e
                ))
            }),
            None => Ok(DEFAULT_COMPONENT_TEMPLATE.to_string()),
        }
    }
}

fn default_fragment_prefix() -> String {
    ".ENV_".to_string()
}

fn default_destination() -> PathBuf {
    PathBuf::from(".env")
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnvConfig {
    #[serde(default = "default_fragment_prefix")]
    pub fragment_prefix: String,

    #[serde(default = "default_destination")]
    pub destination: PathBuf,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            fragment_prefix: default_fragment_prefix(),
            destination: default_destination(),
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_commit_message() -> String {
    "version: update version".to_string()
}

/// Settings for the version bump and its git pipeline.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Manifest whose `version` receives the bare numeric version.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Optional second manifest whose `version` receives the full tag name.
    #[serde(default)]
    pub extra_manifest: Option<PathBuf>,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Keep running the remaining git steps after one fails.
    #[serde(default)]
    pub continue_on_error: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            manifest: default_manifest(),
            extra_manifest: None,
            remote: default_remote(),
            commit_message: default_commit_message(),
            continue_on_error: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `frontkit.toml` in the project root
/// 3. `.frontkit.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Some(path.to_path_buf())
    } else if root.join(CONFIG_FILE_NAME).exists() {
        Some(root.join(CONFIG_FILE_NAME))
    } else {
        dirs::config_dir()
            .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    };

    let Some(path) = path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        FrontkitError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
}

/// Parses a TOML configuration string.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| FrontkitError::config(e.to_string()))
}
