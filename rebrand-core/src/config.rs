use crate::placeholder::{Placeholder, DEFAULT_DISPLAY_PLACEHOLDER, DEFAULT_PLACEHOLDER};
use crate::selector::{RenameConfig, DEFAULT_PATTERNS};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the per-template configuration, looked up in the template
/// root. Templates without one get the built-in defaults.
pub const CONFIG_FILE_NAME: &str = "rebrand.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// The identifier-style placeholder baked into the template
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// The human-readable display-name placeholder
    #[serde(default = "default_display_placeholder")]
    pub display_placeholder: String,

    /// Glob patterns selecting the files to rewrite; `!` entries exclude
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            display_placeholder: default_display_placeholder(),
            patterns: default_patterns(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_display_placeholder() -> String {
    DEFAULT_DISPLAY_PLACEHOLDER.to_string()
}

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect()
}

impl Config {
    /// Load `rebrand.toml` from the template root if it exists
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        // No config file, use the built-in defaults
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn placeholder(&self) -> Placeholder {
        Placeholder::new(
            self.template.placeholder.clone(),
            self.template.display_placeholder.clone(),
        )
    }

    pub fn rename_config(&self) -> RenameConfig {
        RenameConfig::new(self.template.patterns.clone())
    }
}
