//! View controller behaviour against an in-memory provider.

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use common::{Call, FakeProvider};
use pokedex::error::NoticeKind;
use pokedex::logic::{ControllerConfig, ViewController};
use pokedex::render::{
    DETAIL_FAILED_TEXT, DetailView, Fragment, LIST_FAILED_TEXT, ListView, RecordingRenderer,
    SEARCH_FAILED_TEXT,
};
use pokedex::sources::Locator;
use pokedex::state::{Command, DEFAULT_SPRITE_BASE_URL};

type Controller = ViewController<Arc<FakeProvider>, RecordingRenderer>;

fn controller(fake: &Arc<FakeProvider>) -> Controller {
    ViewController::new(
        Arc::clone(fake),
        RecordingRenderer::default(),
        ControllerConfig::default(),
    )
}

fn ids(view: &ListView) -> Vec<u32> {
    view.cards().iter().map(|c| c.id).collect()
}

#[tokio::test]
/// What: Retreating from the first page is refused without any request.
///
/// Inputs:
/// - Fresh controller at offset 0.
///
/// Output:
/// - `retreat_page` yields `None`, offset stays 0, the provider is never called.
async fn retreat_at_first_page_is_a_no_op() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    assert!(c.retreat_page().await.is_none());
    assert_eq!(c.offset(), 0);
    assert!(fake.calls().is_empty());
    assert!(c.renderer().fragments.is_empty());
}

#[tokio::test]
/// What: Advance followed by retreat returns to the original offset and page.
async fn advance_then_retreat_restores_offset() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    let next = c.advance_page().await;
    assert_eq!(c.offset(), 20);
    assert_eq!(ids(&next), (21..=40).collect::<Vec<_>>());
    let back = c.retreat_page().await.expect("retreat from page 2");
    assert_eq!(c.offset(), 0);
    assert_eq!(ids(&back), (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
/// What: One listing request, then one record request per entry in listing order.
///
/// Inputs:
/// - `load_page(0)` with the default page size of 20.
///
/// Output:
/// - Exactly 21 calls: the listing first, then records 1..=20 by listing URL.
async fn load_page_requests_are_sequential_and_ordered() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    let view = c.load_page(0).await;

    let mut expected = vec![Call::List {
        offset: 0,
        limit: 20,
    }];
    expected.extend((1..=20).map(|id| Call::Creature(Locator::Url(FakeProvider::creature_url(id)))));
    assert_eq!(fake.calls(), expected);
    assert_eq!(ids(&view), (1..=20).collect::<Vec<_>>());
    assert_eq!(c.displayed(), &view);
    assert_eq!(c.offset(), 0);
    let first = &view.cards()[0];
    assert_eq!(first.sprite_url, format!("{DEFAULT_SPRITE_BASE_URL}/1.png"));
}

#[tokio::test]
/// What: The final short page holds only the remaining creatures.
async fn last_page_may_be_short() {
    let fake = Arc::new(FakeProvider::new(25));
    let mut c = controller(&fake);
    let view = c.advance_page().await;
    assert_eq!(ids(&view), (21..=25).collect::<Vec<_>>());
}

#[tokio::test]
/// What: Name, id and mixed-case queries resolve to the same single creature.
///
/// Inputs:
/// - `"pikachu"`, `"25"` and `"  PiKaChU "`.
///
/// Output:
/// - Each shows one card with id 25; the request key is trimmed and lowercased.
async fn search_by_name_id_and_case() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    for q in ["pikachu", "25", "  PiKaChU "] {
        let view = c.search(q).await;
        assert_eq!(ids(&view), vec![25], "query {q:?}");
    }
    let keys: Vec<Call> = fake.calls();
    assert_eq!(
        keys,
        vec![
            Call::Creature(Locator::Key("pikachu".into())),
            Call::Creature(Locator::Key("25".into())),
            Call::Creature(Locator::Key("pikachu".into())),
        ]
    );
}

#[tokio::test]
/// What: Unknown and empty queries show the not-found notice.
///
/// Details:
/// - The empty query issues no request.
async fn search_misses_show_not_found() {
    let fake = Arc::new(FakeProvider::new(10));
    let mut c = controller(&fake);

    let empty = c.search("   ").await;
    let notice = empty.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::NotFound);
    assert_eq!(notice.text, SEARCH_FAILED_TEXT);
    assert!(fake.calls().is_empty());

    let missing = c.search("missingno").await;
    let notice = missing.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::NotFound);
    assert_eq!(notice.text, SEARCH_FAILED_TEXT);

    fake.set_network_down(true);
    let offline = c.search("pikachu").await;
    let notice = offline.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Network);
    assert_eq!(notice.text, SEARCH_FAILED_TEXT);
}

#[tokio::test]
/// What: A network failure while loading a page shows the fixed notice and keeps the offset.
///
/// Inputs:
/// - Controller on page 2, then the provider goes down and the page is reloaded.
///
/// Output:
/// - `LIST_FAILED_TEXT` notice of kind `Network`; offset still 20; recovery works afterwards.
async fn network_failure_during_load_page() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    c.advance_page().await;
    fake.set_network_down(true);

    let view = c.load_page(c.offset()).await;
    let notice = view.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Network);
    assert_eq!(notice.text, LIST_FAILED_TEXT);
    assert_eq!(c.offset(), 20);

    fake.set_network_down(false);
    let again = c.load_page(c.offset()).await;
    assert_eq!(ids(&again).first(), Some(&21));
}

#[tokio::test]
/// What: One failing record aborts the rest of the page.
///
/// Output:
/// - Records after the broken one are never requested; the grid shows the notice.
async fn record_failure_stops_the_page() {
    let mut provider = FakeProvider::new(100);
    provider.broken.insert(3);
    let fake = Arc::new(provider);
    let mut c = controller(&fake);
    let view = c.load_page(0).await;
    assert_eq!(view.notice().map(|n| n.text.as_str()), Some(LIST_FAILED_TEXT));
    assert_eq!(fake.calls().len(), 4);
    assert_eq!(
        fake.calls().last(),
        Some(&Call::Creature(Locator::Url(FakeProvider::creature_url(3))))
    );
}

#[tokio::test]
/// What: The detail view joins types, picks the Spanish text and derives the artwork URL.
async fn load_detail_builds_view() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    let view = c.load_detail(25).await;
    let DetailView::Ready(detail) = &view else {
        panic!("expected a detail, got {view:?}");
    };
    assert_eq!(detail.name, "pikachu");
    assert_eq!(detail.types_label(), "electric");
    assert_eq!(detail.description, "Descripción de la criatura 25.");
    assert_eq!(detail.sprite_url, format!("{DEFAULT_SPRITE_BASE_URL}/25.png"));
    assert_eq!(
        fake.calls(),
        vec![Call::Creature(Locator::Key("25".into())), Call::Species(25)]
    );
    assert_eq!(c.renderer().last_detail(), Some(&view));
}

#[tokio::test]
/// What: The description language is configurable.
async fn load_detail_in_english() {
    let fake = Arc::new(FakeProvider::new(10));
    let config = ControllerConfig {
        language: "en".into(),
        ..ControllerConfig::default()
    };
    let mut c = ViewController::new(Arc::clone(&fake), RecordingRenderer::default(), config);
    let view = c.load_detail(4).await;
    assert!(
        matches!(&view, DetailView::Ready(d) if d.description == "Creature 4 description."),
        "{view:?}"
    );
}

#[tokio::test]
/// What: A creature without text in the language surfaces `MissingLocalizedText` and nothing breaks.
///
/// Inputs:
/// - `load_detail` for a creature whose species lacks a Spanish entry, then `advance_page`.
///
/// Output:
/// - A failed detail for that id with `DETAIL_FAILED_TEXT`; the next page loads normally.
async fn missing_localized_text_is_contained() {
    let mut provider = FakeProvider::new(100);
    provider.no_spanish.insert(7);
    let fake = Arc::new(provider);
    let mut c = controller(&fake);

    let view = c.load_detail(7).await;
    match &view {
        DetailView::Failed { id, notice } => {
            assert_eq!(*id, 7);
            assert_eq!(notice.kind, NoticeKind::MissingLocalizedText);
            assert_eq!(notice.text, DETAIL_FAILED_TEXT);
        }
        DetailView::Ready(d) => panic!("unexpected detail {d:?}"),
    }

    let next = c.advance_page().await;
    assert_eq!(ids(&next).len(), 20);
    assert_eq!(c.offset(), 20);
}

#[tokio::test]
/// What: Detail failures keep their kind (not found vs network).
async fn load_detail_failures_keep_kind() {
    let fake = Arc::new(FakeProvider::new(10));
    let mut c = controller(&fake);
    let missing = c.load_detail(999).await;
    assert!(matches!(
        missing,
        DetailView::Failed { id: 999, ref notice } if notice.kind == NoticeKind::NotFound
    ));
    fake.set_network_down(true);
    let offline = c.load_detail(1).await;
    assert!(matches!(
        offline,
        DetailView::Failed { ref notice, .. } if notice.kind == NoticeKind::Network
    ));
}

#[tokio::test]
/// What: Type filtering lists all members without touching pagination; empty restores the page.
///
/// Inputs:
/// - Page 2 shown, then `load_by_type("electric")`, then `load_by_type("")`.
///
/// Output:
/// - Only pikachu under the filter; offset stays 20; clearing reloads offset 20.
async fn load_by_type_and_clear() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    c.advance_page().await;
    fake.clear_calls();

    let filtered = c.load_by_type("electric").await;
    assert_eq!(ids(&filtered), vec![25]);
    assert_eq!(c.type_filter(), Some("electric"));
    assert_eq!(c.offset(), 20);
    assert_eq!(fake.calls()[0], Call::TypeMembers("electric".into()));

    fake.clear_calls();
    let cleared = c.load_by_type("").await;
    assert_eq!(c.type_filter(), None);
    assert_eq!(ids(&cleared).first(), Some(&21));
    assert_eq!(
        fake.calls()[0],
        Call::List {
            offset: 20,
            limit: 20
        }
    );
}

#[tokio::test]
async fn unknown_type_shows_list_notice() {
    let fake = Arc::new(FakeProvider::new(10));
    let mut c = controller(&fake);
    let view = c.load_by_type("shadow").await;
    let notice = view.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::NotFound);
    assert_eq!(notice.text, LIST_FAILED_TEXT);
}

#[tokio::test]
/// What: Startup publishes type options before the first page.
///
/// Output:
/// - Fragments: type options (sorted names), then the first page.
async fn start_loads_types_then_first_page() {
    let fake = Arc::new(FakeProvider::new(30));
    let mut c = controller(&fake);
    let first = c.start().await;
    assert_eq!(ids(&first), (1..=20).collect::<Vec<_>>());
    let frags = &c.renderer().fragments;
    assert_eq!(frags.len(), 2);
    let Fragment::TypeOptions(options) = &frags[0] else {
        panic!("expected type options first, got {:?}", frags[0]);
    };
    let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["electric", "fire", "normal"]);
    assert_eq!(c.type_options(), options.as_slice());
    assert_eq!(fake.calls()[0], Call::Types);
}

#[tokio::test]
/// What: A failed type listing leaves the options empty and the grid alone.
async fn init_types_failure_keeps_grid() {
    let fake = Arc::new(FakeProvider::new(10));
    fake.types_down.store(true, std::sync::atomic::Ordering::SeqCst);
    let mut c = controller(&fake);
    let options = c.init_types().await;
    assert!(options.is_empty());
    assert!(c.type_options().is_empty());
    assert_eq!(c.displayed(), &ListView::Loading);
    assert_eq!(
        c.renderer().fragments,
        vec![Fragment::TypeOptions(Vec::new())]
    );
}

#[tokio::test]
/// What: Queued commands map onto the operations and the status mirrors the controller.
async fn dispatch_runs_commands() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    c.dispatch(Command::Start).await;
    c.dispatch(Command::AdvancePage).await;
    c.dispatch(Command::LoadByType("fire".into())).await;
    let status = c.status(false);
    assert_eq!(status.offset, 20);
    assert_eq!(status.page_size, 20);
    assert_eq!(status.type_filter.as_deref(), Some("fire"));
    assert!(!status.busy);
    assert_eq!(ids(c.displayed()), vec![4]);

    c.dispatch(Command::Search("pikachu".into())).await;
    assert_eq!(ids(c.displayed()), vec![25]);
    c.dispatch(Command::LoadDetail(25)).await;
    assert!(matches!(c.renderer().last_detail(), Some(DetailView::Ready(_))));
    c.dispatch(Command::RetreatPage).await;
    c.dispatch(Command::RetreatPage).await;
    assert_eq!(c.offset(), 0);
}

#[tokio::test]
/// What: Record lookups of a page never overlap, even when each one takes time.
///
/// Inputs:
/// - A provider that sleeps 2ms per record lookup and counts lookups in flight.
///
/// Output:
/// - The full page arrives in order and at most one lookup ran at any moment.
async fn record_lookups_never_overlap() {
    let mut provider = FakeProvider::new(40);
    provider.delay = Some(Duration::from_millis(2));
    let fake = Arc::new(provider);
    let mut c = controller(&fake);
    let view = c.load_page(0).await;
    assert_eq!(ids(&view), (1..=20).collect::<Vec<_>>());
    assert_eq!(fake.max_inflight.load(Ordering::SeqCst), 1);
    assert_eq!(fake.inflight.load(Ordering::SeqCst), 0);
}

#[tokio::test]
/// What: The status tells whether the grid shows the type-filtered list.
///
/// Inputs:
/// - `load_by_type("fire")`, then `advance_page`, then the filter again, then a search.
///
/// Output:
/// - `filter_shown` follows the grid while `type_filter` keeps the selection.
async fn status_tracks_whether_filter_is_shown() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    assert!(!c.status(false).filter_shown);

    c.load_by_type("fire").await;
    assert!(c.status(false).filter_shown);

    c.advance_page().await;
    let status = c.status(false);
    assert!(!status.filter_shown);
    assert_eq!(status.type_filter.as_deref(), Some("fire"));

    c.load_by_type("fire").await;
    c.search("pikachu").await;
    assert!(!c.status(false).filter_shown);

    c.load_by_type("").await;
    let status = c.status(false);
    assert!(!status.filter_shown);
    assert_eq!(status.type_filter, None);
}

#[tokio::test]
/// What: Page numbers map to whole-page offsets; an overflowing one shows the list notice.
///
/// Inputs:
/// - `load_page_number(2)`, then `load_page_number(u32::MAX)` with page size 20.
///
/// Output:
/// - Offset 40 is requested; the overflow issues no request and leaves the cursor at 0.
async fn load_page_number_checks_overflow() {
    let fake = Arc::new(FakeProvider::new(100));
    let mut c = controller(&fake);
    let third = c.load_page_number(2).await;
    assert_eq!(ids(&third).first(), Some(&41));
    assert_eq!(fake.calls()[0], Call::List { offset: 40, limit: 20 });

    fake.clear_calls();
    let view = c.load_page_number(u32::MAX).await;
    let notice = view.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::NotFound);
    assert_eq!(notice.text, LIST_FAILED_TEXT);
    assert!(fake.calls().is_empty());
    assert_eq!(c.offset(), 0);
}
