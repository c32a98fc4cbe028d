// ABOUTME: Configuration management for the stepper wizard
// Handles wizard steps, trigger visibility and logging preferences

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Wizard layout: starting step and the steps themselves
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Visibility of navigation triggers on boundary steps
    #[serde(default)]
    pub controls: ControlsConfig,

    /// Log output preferences
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Step shown first (1-indexed)
    #[serde(default = "default_initial_step")]
    pub initial_step: usize,

    /// Steps in display order
    #[serde(default = "default_steps")]
    pub steps: Vec<StepConfig>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            initial_step: default_initial_step(),
            steps: default_steps(),
        }
    }
}

/// A single form step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    pub title: String,

    /// Text shown above the input
    #[serde(default)]
    pub prompt: String,

    /// Hint shown while the input is empty
    #[serde(default)]
    pub placeholder: String,
}

impl StepConfig {
    pub fn new(title: &str, prompt: &str, placeholder: &str) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ControlsConfig {
    /// Keep the "Back" trigger on the first step
    #[serde(default)]
    pub show_prev_in_first_step: bool,

    /// Keep the "Next" trigger on the last step
    #[serde(default)]
    pub show_next_in_last_step: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Directory for JSONL log files (default: ~/.stepper/logs)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            directory: None,
        }
    }
}

const fn default_initial_step() -> usize {
    1
}

fn default_steps() -> Vec<StepConfig> {
    vec![
        StepConfig::new("Name", "First Step", "Name"),
        StepConfig::new("Address", "Second Step", "Address"),
        StepConfig::new("E-mail", "Last Step", "E-mail"),
    ]
}

fn default_log_filter() -> String {
    "stepper=info".to_string()
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        // First existing file wins: project config shadows user config
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".stepper").join("config.toml"));
        }

        // 2. User config (~/.stepper/config.toml)
        if let Ok(base_dir) = Self::base_dir() {
            paths.push(base_dir.join("config.toml"));
        }

        paths
    }

    /// Get the base stepper directory
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".stepper"))
    }

    /// Directory log files are written to
    pub fn log_dir(&self) -> PathBuf {
        self.logging.directory.clone().unwrap_or_else(|| {
            Self::base_dir()
                .map(|base| base.join("logs"))
                .unwrap_or_else(|_| PathBuf::from(".stepper/logs"))
        })
    }
}
