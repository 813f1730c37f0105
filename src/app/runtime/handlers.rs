use crate::render::Fragment;
use crate::state::{AppState, ControllerStatus};

/// What: Apply a fragment from the controller worker to the UI state.
pub fn handle_fragment(app: &mut AppState, fragment: Fragment) {
    match &fragment {
        Fragment::List(view) => tracing::debug!(
            cards = view.cards().len(),
            notice = view.notice().is_some(),
            "[Runtime] list fragment"
        ),
        Fragment::Detail(view) => tracing::debug!(id = view.id(), "[Runtime] detail fragment"),
        Fragment::TypeOptions(o) => tracing::debug!(count = o.len(), "[Runtime] type options"),
    }
    app.apply_fragment(fragment);
}

/// What: Mirror the controller position reported by the worker.
pub fn handle_status(app: &mut AppState, status: ControllerStatus) {
    app.status = status;
}
