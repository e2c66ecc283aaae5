//! Configuration management for stratplan
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (STRATPLAN_*)
//! 3. Config file (~/.config/stratplan/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::plan::{FallbackDefaults, ParserOptions};
use crate::{Error, Result};

/// Input and output locations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// PDF to convert
    pub source_path: Option<PathBuf>,

    /// Directory the outputs are written to
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_path: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Record and fallback project settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Title written into the record
    pub title: String,

    /// Projects searched for when the document has no project list
    pub fallback_projects: Vec<String>,

    pub fallback_timeline: String,
    pub fallback_responsible: String,
    pub fallback_status: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        let options = ParserOptions::default();
        Self {
            title: options.title,
            fallback_projects: options.fallback_projects,
            fallback_timeline: options.fallback_defaults.timeline,
            fallback_responsible: options.fallback_defaults.responsible,
            fallback_status: options.fallback_defaults.status,
        }
    }
}

impl PlanConfig {
    /// Parser options described by this configuration
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            title: self.title.clone(),
            fallback_projects: self.fallback_projects.clone(),
            fallback_defaults: FallbackDefaults {
                timeline: self.fallback_timeline.clone(),
                responsible: self.fallback_responsible.clone(),
                status: self.fallback_status.clone(),
            },
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Input and output paths
    pub paths: PathsConfig,

    /// Plan record settings
    pub plan: PlanConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/stratplan/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stratplan").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - STRATPLAN_SOURCE: PDF to convert
    /// - STRATPLAN_OUTPUT_DIR: Output directory
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(source) = std::env::var("STRATPLAN_SOURCE") {
            self.paths.source_path = Some(PathBuf::from(source));
        }

        if let Ok(output_dir) = std::env::var("STRATPLAN_OUTPUT_DIR") {
            self.paths.output_dir = PathBuf::from(output_dir);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        source_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = source_path {
            self.paths.source_path = Some(path);
        }

        if let Some(dir) = output_dir {
            self.paths.output_dir = dir;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// `config_file` replaces the default config file location. Priority:
    /// CLI > env > config file > defaults
    pub fn load_with_overrides(
        config_file: Option<&Path>,
        source_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let base = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        Ok(base
            .with_env_overrides()
            .with_cli_overrides(source_path, output_dir))
    }
}
