use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::selector::default_catalog;

pub const DEFAULT_TITLE: &str = "BeeHelp AI Assistant";
pub const DEFAULT_TAGLINES: [&str; 2] = [
    "Asisten AI untuk bantu kamu cari solusi cepat & efisien.",
    "Tanya apa saja praktis, informatif, dan langsung dibalas.",
];

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Canned replies; the built-in catalog is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<String>>,
    /// Fixed seed for reproducible reply order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<Greeting>,
}

/// Text shown while the transcript is empty
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub title: String,
    #[serde(default)]
    pub taglines: Vec<String>,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            taglines: DEFAULT_TAGLINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Greeting {
    /// Title followed by taglines, in display order
    pub fn lines(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.taglines.iter().map(String::as_str))
            .collect()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads from `path`, falling back to defaults when the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    /// Configured replies, or the built-in catalog
    pub fn reply_catalog(&self) -> Vec<String> {
        self.replies.clone().unwrap_or_else(default_catalog)
    }

    pub fn greeting(&self) -> Greeting {
        self.greeting.clone().unwrap_or_default()
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.json"))
    }
}

/// `<platform config dir>/beehelp`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?;

    Ok(base.join("beehelp"))
}
