//! Register TUI - a terminal registration form
//!
//! A Ratatui-based form that collects a username and password, checks the
//! confirmation inline, and reports the outcome with toast notifications.

mod app;
mod config;
mod event;
mod notify;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Redraw interval; drives toast fade-out without user input
const TICK_RATE: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (TuiConfig::default(), Some(err)),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(err) = config_error {
        tracing::warn!("ignoring unreadable config, using defaults: {err:#}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let (tx, mut events) = mpsc::unbounded_channel();
    event::spawn_reader(tx);

    let mut ticker = tokio::time::interval(TICK_RATE);

    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            maybe_event = events.recv() => match maybe_event {
                // Windows reports releases too; only act on presses
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Event::Paste(text)) => app.handle_paste(&text),
                Some(_) => {}
                None => {
                    tracing::warn!("terminal event stream closed");
                    return Ok(());
                }
            },
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
