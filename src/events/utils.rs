use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::state::Command;
use crate::theme::KeyChord;

/// Whether the key event matches any chord in `list`.
#[must_use]
pub fn matches_any(ke: &KeyEvent, list: &[KeyChord]) -> bool {
    list.iter().any(|c| c.matches(ke.code, ke.modifiers))
}

/// Send a command to the controller worker; a closed channel only means shutdown.
pub fn send_command(cmd_tx: &mpsc::UnboundedSender<Command>, cmd: Command) {
    if let Err(e) = cmd_tx.send(cmd) {
        tracing::debug!(command = ?e.0, "[Events] controller worker gone");
    }
}
