use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::LoadOptions;

/// User configuration for quizdoc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document opened when no path is given on the command line
    pub default_document: String,
    /// Directories searched, in order, for the default document
    pub search_dirs: Vec<PathBuf>,
    /// Treat bold runs as `**` emphasis markers
    pub bold_runs_as_emphasis: bool,
    /// Log filter used when `QUIZDOC_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_document: "HCIA-datacom-EN.docx".to_string(),
            search_dirs: vec![PathBuf::from("."), PathBuf::from("assets")],
            bold_runs_as_emphasis: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Return default config if none found
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            self.save_to(&config_path)?;
        }

        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quizdoc").join("config.toml"))
    }

    /// Initialize default config file
    pub fn init_default() -> Result<()> {
        let config = Config::default();
        config.save()?;
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            bold_runs_as_emphasis: self.bold_runs_as_emphasis,
        }
    }

    /// First existing candidate for the default document
    pub fn locate_default_document(&self) -> Option<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| dir.join(&self.default_document))
            .find(|candidate| candidate.exists())
    }
}
