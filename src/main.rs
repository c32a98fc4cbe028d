// ABOUTME: Main entry point for stepper with TUI and CLI support
//
// Binary: stepper
// Usage: stepper [COMMAND]
// - No command: runs the wizard
// - steps: list configured steps

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    time::Duration,
};

use stepper::app::{AppState, EventHandler};
use stepper::cli::{self, Cli, Commands};
use stepper::components::LayoutComponent;
use stepper::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.load_config()?;

    setup_logging(&config);
    setup_panic_handler();

    match args.command {
        Some(Commands::Steps) => cli::steps::execute(&config, args.format),

        Some(Commands::Tui) | None => {
            let mut state = AppState::new(&config).context("Failed to create wizard")?;
            let layout = LayoutComponent::new();

            tracing::info!(
                "Starting wizard with {} steps at step {}",
                config.wizard.steps.len(),
                config.wizard.initial_step
            );

            let result = run_tui(&mut state, &layout);
            if result.is_err() {
                cleanup_terminal();
            }
            result?;

            match state.submission.take() {
                Some(submission) => cli::submit::print_submission(&submission, args.format),
                None => {
                    tracing::info!("Wizard cancelled");
                    Ok(())
                }
            }
        }
    }
}

fn run_tui(state: &mut AppState, layout: &LayoutComponent) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(state, layout, &mut terminal);

    // Always clean up terminal using unified cleanup
    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    state: &mut AppState,
    layout: &LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let poll_interval = Duration::from_millis(250);

    while !state.should_quit {
        let mut render_result = Ok(());
        terminal.draw(|frame| {
            render_result = layout.render(frame, state);
        })?;
        render_result?;

        if !event::poll(poll_interval)? {
            continue;
        }

        if let Event::Key(key_event) = event::read()? {
            // Windows reports releases too
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(app_event) = EventHandler::handle_key_event(key_event, state)? {
                EventHandler::process_event(app_event, state)?;
            }
        }
    }

    Ok(())
}

fn setup_logging(config: &AppConfig) {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = config.log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "stepper-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; the wizard still runs without a log file
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()             // Output in JSON Lines format
                .with_target(true)  // Include target module in JSON
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
