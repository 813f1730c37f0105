use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::logic::{ControllerConfig, ViewController};
use crate::render::{ChannelRenderer, Fragment};
use crate::sources::PokeProvider;
use crate::state::{Command, ControllerStatus};

/// What: Spawn the task that owns the view controller.
///
/// Inputs:
/// - `provider`: Data source
/// - `config`: Controller parameters
/// - `cmd_rx`: Commands from key handling
/// - `fragment_tx`: Where rendered fragments go
/// - `status_tx`: Where position/busy updates go
///
/// Output:
/// - Handle of the spawned task; it ends when `cmd_rx` closes.
///
/// Details:
/// - Commands run one at a time in arrival order, so requests of two user actions never interleave.
/// - A busy status is sent before each command and an idle one after it.
pub fn spawn_controller_worker<P>(
    provider: P,
    config: ControllerConfig,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    fragment_tx: mpsc::UnboundedSender<Fragment>,
    status_tx: mpsc::UnboundedSender<ControllerStatus>,
) -> JoinHandle<()>
where
    P: PokeProvider + 'static,
{
    tokio::spawn(async move {
        let mut controller =
            ViewController::new(provider, ChannelRenderer::new(fragment_tx), config);
        let _ = status_tx.send(controller.status(false));
        while let Some(cmd) = cmd_rx.recv().await {
            let _ = status_tx.send(controller.status(true));
            controller.dispatch(cmd).await;
            let _ = status_tx.send(controller.status(false));
        }
        tracing::debug!("[Runtime] controller worker exited");
    })
}
