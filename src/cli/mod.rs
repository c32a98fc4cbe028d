// ABOUTME: CLI argument parsing and command routing for stepper
//
// Provides command-line interface for:
// - Running the wizard (tui, default)
// - Listing the configured steps (steps)

pub mod steps;
pub mod submit;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::AppConfig;

/// Multi-step form wizard in the terminal
#[derive(Parser)]
#[command(name = "stepper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default locations
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Step to start on (1-indexed), overrides the config file
    #[arg(long, global = true)]
    pub initial_step: Option<usize>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the wizard (default if no command given)
    Tui,

    /// List the configured steps
    Steps,
}

impl Cli {
    /// Resolve the effective configuration: file first, then flag overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };

        if let Some(step) = self.initial_step {
            config.wizard.initial_step = step;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["stepper"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.initial_step.is_none());
    }

    #[test]
    fn test_parse_steps_json() {
        let cli = Cli::parse_from(["stepper", "steps", "--format", "json"]);
        assert!(matches!(cli.command, Some(Commands::Steps)));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_initial_step_overrides_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.wizard.initial_step = 2;
        config.save_to(&path).unwrap();

        let path_arg = path.display().to_string();
        let path_arg = path_arg.as_str();
        let cli = Cli::parse_from(["stepper", "--config", path_arg]);
        assert_eq!(cli.load_config().unwrap().wizard.initial_step, 2);

        let cli = Cli::parse_from(["stepper", "--config", path_arg, "--initial-step", "3"]);
        assert_eq!(cli.load_config().unwrap().wizard.initial_step, 3);
    }
}
