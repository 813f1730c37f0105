//! Event handling layer for the pokedex TUI.
//!
//! `handle_event` dispatches key presses to the open dialog, the search input
//! or the card grid. Anything that needs data becomes a [`Command`] for the
//! controller worker; the UI never waits on the network.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Command, Focus, Modal};

mod modals;
mod search;
mod utils;

use modals::handle_modal_key;
use search::handle_search_key;
use utils::{matches_any, send_command};

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState, cmd_tx: &mpsc::UnboundedSender<Command>) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    // Ctrl+C always quits, whatever has focus.
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if app.modal.is_open() {
        handle_modal_key(ke, app, cmd_tx);
        return false;
    }
    if app.focus == Focus::Search {
        handle_search_key(ke, app, cmd_tx);
        return false;
    }
    handle_grid_key(ke, app, cmd_tx)
}

/// What: Handle a key press while the card grid has focus.
///
/// Output:
/// - `true` when an exit chord was pressed.
fn handle_grid_key(ke: &KeyEvent, app: &mut AppState, cmd_tx: &mpsc::UnboundedSender<Command>) -> bool {
    let km = &app.keymap;
    let columns = isize::try_from(app.grid_columns.max(1)).unwrap_or(1);
    if matches_any(ke, &km.exit) {
        return true;
    }
    if matches_any(ke, &km.next_page) {
        send_command(cmd_tx, Command::AdvancePage);
    } else if matches_any(ke, &km.prev_page) {
        send_command(cmd_tx, Command::RetreatPage);
    } else if matches_any(ke, &km.move_up) {
        app.move_selection(-columns);
    } else if matches_any(ke, &km.move_down) {
        app.move_selection(columns);
    } else if matches_any(ke, &km.move_left) {
        app.move_selection(-1);
    } else if matches_any(ke, &km.move_right) {
        app.move_selection(1);
    } else if matches_any(ke, &km.focus_search) {
        app.focus = Focus::Search;
    } else if matches_any(ke, &km.type_filter) {
        let selected = app
            .status
            .type_filter
            .as_deref()
            .and_then(|t| app.type_options.iter().position(|o| o.name == t))
            .map_or(0, |i| i + 1);
        app.modal = Modal::TypePicker { selected };
    } else if matches_any(ke, &km.help) {
        app.modal = Modal::Help;
    } else if matches_any(ke, &km.open_detail) {
        if let Some(id) = app.selected_card().map(|c| c.id) {
            app.modal = Modal::Detail { id, view: None };
            send_command(cmd_tx, Command::LoadDetail(id));
        }
    }
    false
}
