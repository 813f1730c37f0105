use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_fragment, handle_status};

/// What: Process one iteration of channel message handling.
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - A closed event channel ends the loop; the worker channels never end it.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        ev = channels.event_rx.recv() => match ev {
            Some(ev) => crate::events::handle_event(&ev, app, &channels.cmd_tx),
            None => true,
        },
        Some(fragment) = channels.fragment_rx.recv() => {
            handle_fragment(app, fragment);
            false
        }
        Some(status) = channels.status_rx.recv() => {
            handle_status(app, status);
            false
        }
    }
}

/// What: Run the main event loop, processing channel messages and rendering the UI.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels
///
/// Details:
/// - Exits when the event handler returns true (quit key).
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
