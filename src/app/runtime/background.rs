use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the OS thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Where events are forwarded
/// - `event_thread_cancelled`: Set on shutdown; the thread exits within one poll period
///
/// Details:
/// - Polls with a 50ms timeout so the cancel flag is checked regularly.
/// - Exits when the receiving side is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("[Runtime] event thread exited");
    });
}
