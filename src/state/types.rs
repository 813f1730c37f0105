//! Core value types used by the controller and the UI.

use crate::sources::CreatureRecord;

/// Default artwork directory; `{id}.png` is appended per creature.
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// What: Build the artwork URL for a creature id.
///
/// Inputs:
/// - `sprite_base`: Artwork directory (trailing `/` tolerated)
/// - `id`: Creature id
#[must_use]
pub fn sprite_url(sprite_base: &str, id: u32) -> String {
    format!("{}/{id}.png", sprite_base.trim_end_matches('/'))
}

/// Offset/limit position in the full creature listing.
///
/// The offset only ever moves in whole pages and never goes below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationCursor {
    /// Index of the first creature on the current page.
    offset: u32,
    /// Fixed page size, at least 1.
    page_size: u32,
}

impl PaginationCursor {
    /// What: Start at offset 0 with the given page size (clamped to at least 1).
    #[must_use]
    pub const fn new(page_size: u32) -> Self {
        Self {
            offset: 0,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    /// Current offset.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Fixed page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.offset / self.page_size
    }

    /// What: Move one page forward.
    ///
    /// Output:
    /// - New offset; stays put once the next page would overflow `u32`.
    pub const fn advance(&mut self) -> u32 {
        if let Some(next) = self.offset.checked_add(self.page_size) {
            self.offset = next;
        }
        self.offset
    }

    /// What: Move one page back.
    ///
    /// Output:
    /// - `Some(new_offset)` when the cursor moved; `None` at offset 0.
    pub const fn retreat(&mut self) -> Option<u32> {
        if self.offset == 0 {
            return None;
        }
        self.offset = self.offset.saturating_sub(self.page_size);
        Some(self.offset)
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Minimal creature card shown in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureSummary {
    /// National dex id.
    pub id: u32,
    /// Lowercase creature name.
    pub name: String,
    /// Artwork URL derived from the id.
    pub sprite_url: String,
}

impl CreatureSummary {
    /// Project a provider record into a card.
    #[must_use]
    pub fn from_record(rec: &CreatureRecord, sprite_base: &str) -> Self {
        Self {
            id: rec.id,
            name: rec.name.clone(),
            sprite_url: sprite_url(sprite_base, rec.id),
        }
    }
}

/// Everything the detail modal shows for one creature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureDetail {
    /// National dex id.
    pub id: u32,
    /// Lowercase creature name.
    pub name: String,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Flavour text in the configured language, whitespace-normalised.
    pub description: String,
    /// Artwork URL derived from the id.
    pub sprite_url: String,
}

impl CreatureDetail {
    /// Separator placed between type names.
    pub const TYPE_SEPARATOR: &'static str = ", ";

    /// Type names joined for display (`"fire, flying"`).
    #[must_use]
    pub fn types_label(&self) -> String {
        self.types.join(Self::TYPE_SEPARATOR)
    }
}

/// One entry of the type filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeOption {
    /// Type name as used in `/type/{name}`.
    pub name: String,
}

/// User action forwarded from the event loop to the controller worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load type options and the first page.
    Start,
    /// Next page of the unfiltered listing.
    AdvancePage,
    /// Previous page of the unfiltered listing.
    RetreatPage,
    /// Apply a type filter; empty string means "all types".
    LoadByType(String),
    /// Look up one creature by name or id.
    Search(String),
    /// Open the detail view for a creature id.
    LoadDetail(u32),
}

/// Controller position reported back to the UI after each command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControllerStatus {
    /// Current pagination offset.
    pub offset: u32,
    /// Fixed page size.
    pub page_size: u32,
    /// Selected type filter.
    pub type_filter: Option<String>,
    /// Whether the displayed list came from the type filter.
    pub filter_shown: bool,
    /// Whether a command is being processed.
    pub busy: bool,
}

/// Which pane receives key presses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Card grid navigation.
    #[default]
    Grid,
    /// Search input editing.
    Search,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Retreat at zero is refused and advance/retreat are inverse.
    fn cursor_moves_in_whole_pages() {
        let mut c = PaginationCursor::new(20);
        assert_eq!(c.retreat(), None);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.advance(), 20);
        assert_eq!(c.advance(), 40);
        assert_eq!(c.page_index(), 2);
        assert_eq!(c.retreat(), Some(20));
        assert_eq!(c.retreat(), Some(0));
        assert_eq!(c.retreat(), None);
    }

    #[test]
    /// What: A zero page size is clamped and the cursor never overflows.
    fn cursor_edges() {
        let c = PaginationCursor::new(0);
        assert_eq!(c.page_size(), 1);

        let mut big = PaginationCursor::new(u32::MAX / 2 + 1);
        assert_eq!(big.advance(), u32::MAX / 2 + 1);
        assert_eq!(big.advance(), u32::MAX / 2 + 1);
        assert_eq!(big.offset() % big.page_size(), 0);
    }

    #[test]
    fn sprite_url_appends_id() {
        assert_eq!(
            sprite_url("https://img.example/art/", 25),
            "https://img.example/art/25.png"
        );
        assert!(sprite_url(DEFAULT_SPRITE_BASE_URL, 1).ends_with("/official-artwork/1.png"));
    }
}
