//! One-shot command-line mode: run a single controller operation and print it.

use std::io::Write;

use crate::args::OneShot;
use crate::logic::{ControllerConfig, ViewController};
use crate::render::{DetailView, ListView, TextRenderer};
use crate::sources::PokeProvider;

/// What: Answer one command-line request with a plain-text renderer.
///
/// Inputs:
/// - `action`: Requested operation
/// - `provider`: Data source
/// - `config`: Controller parameters (page size, language, artwork base)
/// - `out`: Destination writer (stdout in `main`)
///
/// Output:
/// - `(success, writer)`: `success` is false when a notice was printed or no types were found.
///
/// Details:
/// - `Page(n)` shows the listing at offset `n * page_size`; an offset past `u32::MAX`
///   prints the list notice.
pub async fn run_one_shot<P, W>(
    action: &OneShot,
    provider: P,
    config: ControllerConfig,
    out: W,
) -> (bool, W)
where
    P: PokeProvider,
    W: Write + Send,
{
    let mut controller = ViewController::new(provider, TextRenderer::new(out), config);
    tracing::info!(?action, "one-shot request");
    let ok = match action {
        OneShot::Page(n) => list_ok(&controller.load_page_number(*n).await),
        OneShot::Type(name) => list_ok(&controller.load_by_type(name).await),
        OneShot::Search(q) => list_ok(&controller.search(q).await),
        OneShot::Detail(id) => matches!(controller.load_detail(*id).await, DetailView::Ready(_)),
        OneShot::ListTypes => !controller.init_types().await.is_empty(),
    };
    let (_, renderer) = controller.into_parts();
    (ok, renderer.into_inner())
}

/// Whether a list fragment carries content rather than a notice.
const fn list_ok(view: &ListView) -> bool {
    !matches!(view, ListView::Notice(_))
}
