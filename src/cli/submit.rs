// ABOUTME: Prints a submitted form once the wizard exits

use super::OutputFormat;
use crate::app::Submission;
use anyhow::Result;

/// Print the submission in the requested format
pub fn print_submission(submission: &Submission, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(submission)?),
        OutputFormat::Text => print!("{}", format_text(submission)),
    }
    Ok(())
}

fn format_text(submission: &Submission) -> String {
    submission
        .answers
        .iter()
        .map(|answer| format!("{}. {}: {}\n", answer.step, answer.title, answer.value))
        .collect()
}
