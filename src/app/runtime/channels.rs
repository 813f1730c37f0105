use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::logic::ControllerConfig;
use crate::render::Fragment;
use crate::sources::PokeProvider;
use crate::state::{Command, ControllerStatus};

use super::worker::spawn_controller_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events come from the event thread; fragments and status from the controller worker.
/// - Commands go the other way, to the worker.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub cmd_tx: mpsc::UnboundedSender<Command>,
    pub fragment_rx: mpsc::UnboundedReceiver<Fragment>,
    pub status_rx: mpsc::UnboundedReceiver<ControllerStatus>,
    pub worker: JoinHandle<()>,
}

impl Channels {
    /// What: Create all channels and spawn the controller worker.
    ///
    /// Inputs:
    /// - `provider`: Data source handed to the worker
    /// - `config`: Controller parameters
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    #[must_use]
    pub fn new<P>(provider: P, config: ControllerConfig) -> Self
    where
        P: PokeProvider + 'static,
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<Command>();
        let (fragment_tx, fragment_rx) = mpsc::unbounded_channel::<Fragment>();
        let (status_tx, status_rx) = mpsc::unbounded_channel::<ControllerStatus>();

        let worker = spawn_controller_worker(provider, config, cmd_rx, fragment_tx, status_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            cmd_tx,
            fragment_rx,
            status_rx,
            worker,
        }
    }
}
