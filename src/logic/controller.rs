//! The view controller: pagination, type filter, search and detail lookups.
//!
//! Each operation issues provider requests, maps the answers into fragments
//! and replaces a display region through the [`Renderer`]. Failures are
//! caught here, logged, and shown as fixed notices; nothing propagates out
//! and nothing is retried.

use tracing::{debug, info, warn};

use super::flavor::{DEFAULT_LANGUAGE, pick_flavor_text};
use crate::error::{NoticeKind, PokedexError, Result};
use crate::render::{
    DETAIL_FAILED_TEXT, DetailView, LIST_FAILED_TEXT, ListView, Notice, Renderer,
    SEARCH_FAILED_TEXT,
};
use crate::sources::{Locator, PokeProvider};
use crate::state::{
    Command, ControllerStatus, CreatureDetail, CreatureSummary, DEFAULT_PAGE_SIZE,
    DEFAULT_SPRITE_BASE_URL, PaginationCursor, TypeOption, sprite_url,
};

/// Fixed parameters of a controller instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Cards per page.
    pub page_size: u32,
    /// Flavour-text language code.
    pub language: String,
    /// Artwork directory used to derive sprite URLs.
    pub sprite_base_url: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            language: DEFAULT_LANGUAGE.to_string(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_string(),
        }
    }
}

/// Mediates between user actions, the data provider and a renderer.
pub struct ViewController<P, R> {
    /// Data source.
    provider: P,
    /// Display substrate.
    renderer: R,
    /// Offset/page-size position of the unfiltered listing.
    cursor: PaginationCursor,
    /// Type currently selected in the filter, if any.
    type_filter: Option<String>,
    /// Whether the grid currently shows the type-filtered list.
    filter_shown: bool,
    /// Content of the card grid as last rendered.
    displayed: ListView,
    /// Options loaded at startup.
    type_options: Vec<TypeOption>,
    /// Flavour-text language.
    language: String,
    /// Artwork directory.
    sprite_base_url: String,
}

impl<P: PokeProvider, R: Renderer> ViewController<P, R> {
    /// What: Create a controller at offset 0 with no filter and nothing displayed.
    #[must_use]
    pub fn new(provider: P, renderer: R, config: ControllerConfig) -> Self {
        Self {
            provider,
            renderer,
            cursor: PaginationCursor::new(config.page_size),
            type_filter: None,
            filter_shown: false,
            displayed: ListView::Loading,
            type_options: Vec::new(),
            language: config.language,
            sprite_base_url: config.sprite_base_url,
        }
    }

    /// Current offset of the unfiltered listing.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.cursor.offset()
    }

    /// Fixed page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.cursor.page_size()
    }

    /// Type currently selected in the filter.
    #[must_use]
    pub fn type_filter(&self) -> Option<&str> {
        self.type_filter.as_deref()
    }

    /// Content of the card grid as last rendered.
    #[must_use]
    pub const fn displayed(&self) -> &ListView {
        &self.displayed
    }

    /// Type options loaded by [`Self::init_types`].
    #[must_use]
    pub fn type_options(&self) -> &[TypeOption] {
        &self.type_options
    }

    /// Borrow the renderer.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Take the provider and renderer back.
    #[must_use]
    pub fn into_parts(self) -> (P, R) {
        (self.provider, self.renderer)
    }

    /// What: Startup sequence: load the type options, then the first page.
    pub async fn start(&mut self) -> ListView {
        self.init_types().await;
        self.load_page(0).await
    }

    /// What: Fetch the type listing and publish it as filter options.
    ///
    /// Output:
    /// - The options now held (empty after a failure).
    ///
    /// Details:
    /// - A failure is only logged; the card grid is left alone.
    pub async fn init_types(&mut self) -> Vec<TypeOption> {
        match self.provider.types().await {
            Ok(list) => {
                self.type_options = list
                    .into_iter()
                    .map(|t| TypeOption { name: t.name })
                    .collect();
                info!(count = self.type_options.len(), "type options loaded");
            }
            Err(e) => {
                warn!(error = %e, "failed to load type options");
                self.type_options.clear();
            }
        }
        self.renderer.render_type_options(&self.type_options);
        self.type_options.clone()
    }

    /// What: Show one page of the unfiltered listing.
    ///
    /// Inputs:
    /// - `offset`: Index of the first creature to list
    ///
    /// Output:
    /// - The list fragment now displayed.
    ///
    /// Details:
    /// - One listing request, then one record request per entry, strictly in order.
    /// - Does not move the pagination cursor.
    pub async fn load_page(&mut self, offset: u32) -> ListView {
        let limit = self.cursor.page_size();
        info!(offset, limit, "loading page");
        let result = match self.provider.list_creatures(offset, limit).await {
            Ok(entries) => {
                let locators: Vec<Locator> = entries.iter().map(Locator::from).collect();
                Self::resolve_sequentially(&self.provider, &self.sprite_base_url, &locators).await
            }
            Err(e) => Err(e),
        };
        self.filter_shown = false;
        match result {
            Ok(cards) => self.show_list(ListView::Cards(cards)),
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), offset, "page load failed");
                self.show_list(ListView::Notice(Notice::from_error(&e, LIST_FAILED_TEXT)))
            }
        }
    }

    /// What: Show page `page` (0-based) of the unfiltered listing.
    ///
    /// Output:
    /// - The list fragment now displayed.
    ///
    /// Details:
    /// - A page whose offset does not fit in `u32` shows the list notice without a request.
    /// - Does not move the pagination cursor.
    pub async fn load_page_number(&mut self, page: u32) -> ListView {
        let page_size = self.cursor.page_size();
        let Some(offset) = page.checked_mul(page_size) else {
            warn!(page, page_size, "page number out of range");
            self.filter_shown = false;
            return self.show_list(ListView::Notice(Notice {
                kind: NoticeKind::NotFound,
                text: LIST_FAILED_TEXT.to_string(),
            }));
        };
        self.load_page(offset).await
    }

    /// What: Show every creature of a type, or fall back to the current page.
    ///
    /// Inputs:
    /// - `type_name`: Selected type; empty means "all types"
    ///
    /// Output:
    /// - The list fragment now displayed.
    ///
    /// Details:
    /// - Neither resets nor applies the pagination cursor; type lists are not paged.
    /// - The selection outlives the list: paging or searching replaces the grid but
    ///   keeps `type_filter`, and `status().filter_shown` turns false.
    pub async fn load_by_type(&mut self, type_name: &str) -> ListView {
        let name = type_name.trim();
        if name.is_empty() {
            self.type_filter = None;
            let offset = self.cursor.offset();
            return self.load_page(offset).await;
        }
        self.type_filter = Some(name.to_string());
        info!(type_name = name, "loading type members");
        let result = match self.provider.type_members(name).await {
            Ok(members) => {
                let locators: Vec<Locator> = members.iter().map(Locator::from).collect();
                Self::resolve_sequentially(&self.provider, &self.sprite_base_url, &locators).await
            }
            Err(e) => Err(e),
        };
        self.filter_shown = true;
        match result {
            Ok(cards) => self.show_list(ListView::Cards(cards)),
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), type_name = name, "type load failed");
                self.show_list(ListView::Notice(Notice::from_error(&e, LIST_FAILED_TEXT)))
            }
        }
    }

    /// What: Build and render the detail view for one creature.
    ///
    /// Inputs:
    /// - `id`: Creature id
    ///
    /// Output:
    /// - The detail fragment rendered (a notice tagged with the failure kind on error).
    pub async fn load_detail(&mut self, id: u32) -> DetailView {
        info!(id, language = %self.language, "loading detail");
        let view = match Self::fetch_detail(&self.provider, &self.language, &self.sprite_base_url, id)
            .await
        {
            Ok(detail) => DetailView::Ready(detail),
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), id, "detail load failed");
                DetailView::Failed {
                    id,
                    notice: Notice::from_error(&e, DETAIL_FAILED_TEXT),
                }
            }
        };
        self.renderer.render_detail(&view);
        view
    }

    /// What: Look up one creature by name or numeric id and show it alone.
    ///
    /// Inputs:
    /// - `query`: Raw search text; trimmed and lowercased before use
    ///
    /// Output:
    /// - The list fragment now displayed (one card, or the not-found notice).
    ///
    /// Details:
    /// - An empty query shows the not-found notice without a request.
    /// - Every failure shows the not-found text; the notice keeps the real kind.
    pub async fn search(&mut self, query: &str) -> ListView {
        let key = query.trim().to_lowercase();
        self.filter_shown = false;
        if key.is_empty() {
            debug!("empty search ignored");
            return self.show_list(ListView::Notice(Notice {
                kind: NoticeKind::NotFound,
                text: SEARCH_FAILED_TEXT.to_string(),
            }));
        }
        info!(query = %key, "searching");
        match self.provider.creature(&Locator::Key(key.clone())).await {
            Ok(rec) => {
                let card = CreatureSummary::from_record(&rec, &self.sprite_base_url);
                self.show_list(ListView::Cards(vec![card]))
            }
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), query = %key, "search failed");
                self.show_list(ListView::Notice(Notice::from_error(&e, SEARCH_FAILED_TEXT)))
            }
        }
    }

    /// What: Move one page forward and load it.
    ///
    /// Details:
    /// - The cursor is committed before the load, so a failed load still leaves it advanced.
    pub async fn advance_page(&mut self) -> ListView {
        let offset = self.cursor.advance();
        self.load_page(offset).await
    }

    /// What: Move one page back and load it.
    ///
    /// Output:
    /// - `None` (no request, offset unchanged) at offset 0; otherwise the new list fragment.
    pub async fn retreat_page(&mut self) -> Option<ListView> {
        let offset = self.cursor.retreat()?;
        Some(self.load_page(offset).await)
    }

    /// What: Run one queued UI command.
    ///
    /// Details:
    /// - Results reach the UI through the renderer; nothing is returned.
    pub async fn dispatch(&mut self, command: Command) {
        debug!(?command, "dispatching command");
        match command {
            Command::Start => {
                self.start().await;
            }
            Command::AdvancePage => {
                self.advance_page().await;
            }
            Command::RetreatPage => {
                if self.retreat_page().await.is_none() {
                    debug!("already on the first page");
                }
            }
            Command::LoadByType(name) => {
                self.load_by_type(&name).await;
            }
            Command::Search(query) => {
                self.search(&query).await;
            }
            Command::LoadDetail(id) => {
                self.load_detail(id).await;
            }
        }
    }

    /// Position snapshot for the UI title bar.
    #[must_use]
    pub fn status(&self, busy: bool) -> ControllerStatus {
        ControllerStatus {
            offset: self.cursor.offset(),
            page_size: self.cursor.page_size(),
            type_filter: self.type_filter.clone(),
            filter_shown: self.filter_shown,
            busy,
        }
    }

    /// What: Fetch full records one after another, in the given order.
    ///
    /// Inputs:
    /// - `provider`: Data source
    /// - `sprite_base`: Artwork directory for the cards
    /// - `locators`: Records to fetch
    ///
    /// Output:
    /// - Cards in input order, or the first error (later records are not requested).
    ///
    /// Details:
    /// - Each request is awaited before the next is issued; callers and tests rely on this order.
    /// - Borrows only the provider; the renderer need not be `Sync`.
    async fn resolve_sequentially(
        provider: &P,
        sprite_base: &str,
        locators: &[Locator],
    ) -> Result<Vec<CreatureSummary>> {
        let mut cards = Vec::with_capacity(locators.len());
        for loc in locators {
            let rec = provider.creature(loc).await?;
            cards.push(CreatureSummary::from_record(&rec, sprite_base));
        }
        Ok(cards)
    }

    /// Record + species lookup behind [`Self::load_detail`].
    async fn fetch_detail(
        provider: &P,
        language: &str,
        sprite_base: &str,
        id: u32,
    ) -> Result<CreatureDetail> {
        let rec = provider.creature(&Locator::id(id)).await?;
        let species = provider.species(id).await?;
        let description = pick_flavor_text(&species, language).ok_or_else(|| {
            PokedexError::MissingLocalizedText {
                id,
                language: language.to_string(),
            }
        })?;
        Ok(CreatureDetail {
            id: rec.id,
            name: rec.name.clone(),
            types: rec.type_names(),
            description,
            sprite_url: sprite_url(sprite_base, rec.id),
        })
    }

    /// Replace the grid content and return a copy of it.
    fn show_list(&mut self, view: ListView) -> ListView {
        self.renderer.render_list(&view);
        self.displayed = view;
        self.displayed.clone()
    }
}
