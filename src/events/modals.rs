use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::render::DetailView;
use crate::state::{AppState, Command, Modal};

use super::utils::{matches_any, send_command};

/// What: Handle a key press while a dialog is open.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state; `app.modal` is not `Modal::None`
/// - `cmd_tx`: Channel to the controller worker
///
/// Details:
/// - `Esc` and the exit chords close any dialog.
/// - Type picker: up/down moves, `Enter` applies the highlighted type ("All types" sends an empty name).
/// - Detail: the artwork chord opens the artwork URL once the detail has loaded.
pub fn handle_modal_key(ke: &KeyEvent, app: &mut AppState, cmd_tx: &mpsc::UnboundedSender<Command>) {
    if ke.code == KeyCode::Esc || matches_any(ke, &app.keymap.exit) {
        app.modal = Modal::None;
        return;
    }
    match &mut app.modal {
        Modal::None => {}
        Modal::Help => {
            if ke.code == KeyCode::Enter || matches_any(ke, &app.keymap.help) {
                app.modal = Modal::None;
            }
        }
        Modal::TypePicker { selected } => {
            let rows = app.type_options.len() + 1;
            if matches_any(ke, &app.keymap.move_up) {
                *selected = selected.saturating_sub(1);
            } else if matches_any(ke, &app.keymap.move_down) {
                *selected = (*selected + 1).min(rows - 1);
            } else if ke.code == KeyCode::Enter {
                let row = *selected;
                let name = app.picker_type(row).unwrap_or_default().to_string();
                tracing::info!(type_name = %name, "[Events] type filter chosen");
                send_command(cmd_tx, Command::LoadByType(name));
                app.modal = Modal::None;
            }
        }
        Modal::Detail { view, .. } => {
            if ke.code == KeyCode::Enter {
                app.modal = Modal::None;
            } else if matches_any(ke, &app.keymap.open_artwork)
                && let Some(DetailView::Ready(detail)) = view
            {
                crate::util::open_url(&detail.sprite_url);
            }
        }
    }
}
