//! UI and controller state types.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    Command, ControllerStatus, CreatureDetail, CreatureSummary, DEFAULT_PAGE_SIZE,
    DEFAULT_SPRITE_BASE_URL, Focus, PaginationCursor, TypeOption, sprite_url,
};
