use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Command, Focus};

use super::utils::send_command;

/// What: Handle key events while the search input is focused.
///
/// Inputs:
/// - `ke`: Key event received from the terminal
/// - `app`: Mutable application state (input text, focus)
/// - `cmd_tx`: Channel to the controller worker
///
/// Details:
/// - Printable characters edit the input; `Enter` submits it and returns focus to the grid.
/// - `Esc` returns focus to the grid and keeps the text.
/// - Nothing is sent until `Enter`; the controller trims and lowercases the query.
pub fn handle_search_key(ke: &KeyEvent, app: &mut AppState, cmd_tx: &mpsc::UnboundedSender<Command>) {
    match ke.code {
        KeyCode::Esc => app.focus = Focus::Grid,
        KeyCode::Enter => {
            send_command(cmd_tx, Command::Search(app.input.clone()));
            app.focus = Focus::Grid;
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.push(ch);
        }
        _ => {}
    }
}
