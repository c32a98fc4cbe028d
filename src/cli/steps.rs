// ABOUTME: CLI steps command - print the wizard steps from the effective config

use super::OutputFormat;
use crate::config::{AppConfig, StepConfig};
use anyhow::Result;

/// Execute the steps command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config.wizard.steps)?),
        OutputFormat::Text => print!("{}", format_text(&config.wizard.steps)),
    }
    Ok(())
}

fn format_text(steps: &[StepConfig]) -> String {
    if steps.is_empty() {
        return "No steps configured.\n".to_string();
    }

    let mut out = format!("{:<6} {:<20} PROMPT\n", "STEP", "TITLE");
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for (index, step) in steps.iter().enumerate() {
        out.push_str(&format!("{:<6} {:<20} {}\n", index + 1, step.title, step.prompt));
    }
    out
}
