//! Terminal frontend for time-travel tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TuiConfig::resolve(&cli)?;
    init_tracing(&config)?;

    info!("Starting time-travel tic-tac-toe");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = restoring(
        || {
            let mut terminal = start_terminal()?;
            run_app(&mut terminal, App::new(&config))
        },
        restore_terminal,
    );

    if let Err(err) = &res {
        tracing::error!(error = %err, "Exited with error");
    }
    info!("Goodbye");
    res
}

fn start_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
    .context("Failed to restore terminal")?;
    Ok(())
}

/// Runs `session`, then `restore` whether or not the session failed.
///
/// A session error takes precedence over a restore error.
fn restoring<T>(
    session: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = session();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

/// Sends logs to the configured file; the terminal belongs to the UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        let area = terminal.draw(|f| ui::draw(f, &mut app))?.area;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, area),
                _ => {}
            }
        }
    }
    info!(current_move = app.game().current_move(), "Quit requested");
    Ok(())
}
