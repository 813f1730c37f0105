use tokio::sync::mpsc;

use super::{DetailView, ListView, Renderer};
use crate::state::TypeOption;

/// One region replacement, as sent from the controller worker to the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// New card grid content.
    List(ListView),
    /// New detail modal content.
    Detail(DetailView),
    /// New type filter options.
    TypeOptions(Vec<TypeOption>),
}

/// What: Renderer that forwards fragments over an unbounded channel.
///
/// Details:
/// - The TUI event loop owns the receiving end and applies fragments to `AppState`.
/// - A closed receiver (UI shutting down) is ignored.
#[derive(Clone, Debug)]
pub struct ChannelRenderer {
    /// Sending half towards the event loop.
    tx: mpsc::UnboundedSender<Fragment>,
}

impl ChannelRenderer {
    /// Wrap a sender.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<Fragment>) -> Self {
        Self { tx }
    }

    /// Forward one fragment, logging if the UI is gone.
    fn send(&self, fragment: Fragment) {
        if self.tx.send(fragment).is_err() {
            tracing::debug!("fragment dropped: UI channel closed");
        }
    }
}

impl Renderer for ChannelRenderer {
    fn render_list(&mut self, view: &ListView) {
        self.send(Fragment::List(view.clone()));
    }

    fn render_detail(&mut self, view: &DetailView) {
        self.send(Fragment::Detail(view.clone()));
    }

    fn render_type_options(&mut self, options: &[TypeOption]) {
        self.send(Fragment::TypeOptions(options.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Fragments arrive on the receiver in send order; a dropped receiver is harmless.
    fn channel_renderer_forwards_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut r = ChannelRenderer::new(tx);
        r.render_list(&ListView::Loading);
        r.render_type_options(&[TypeOption {
            name: "fire".into(),
        }]);
        assert_eq!(rx.try_recv().ok(), Some(Fragment::List(ListView::Loading)));
        assert!(matches!(rx.try_recv(), Ok(Fragment::TypeOptions(o)) if o.len() == 1));
        drop(rx);
        r.render_list(&ListView::Cards(Vec::new()));
    }
}
