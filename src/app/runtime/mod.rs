use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::PokeApiClient;
use crate::state::{AppState, Command};
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod handlers;
mod worker;

use background::spawn_event_thread;
use channels::Channels;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the pokedex TUI end-to-end: set up the terminal, spawn the controller worker
/// and the event thread, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (file values with command-line overrides applied)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup failures.
///
/// Details:
/// - `POKEDEX_TEST_HEADLESS=1` skips raw mode, drawing and the event thread.
/// - The startup command (type options, then page 0) is queued before the first draw.
///
/// # Errors
/// - Returns `Err` if raw mode, the alternate screen or the terminal backend cannot be set up
///   or restored.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("POKEDEX_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let provider = PokeApiClient::new(&settings.api_base_url, settings.http_timeout());
    let mut channels = Channels::new(provider, settings.controller_config());

    let page_size = settings.page_size;
    let mut app = AppState::new(settings.keymap);
    app.status.page_size = page_size;

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    let _ = channels.cmd_tx.send(Command::Start);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    channels.worker.abort();
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("[Runtime] UI closed");
    Ok(())
}
