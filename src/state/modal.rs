//! Modal dialog state for the UI.

use crate::render::DetailView;

/// Which dialog, if any, is drawn over the card grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No dialog.
    #[default]
    None,
    /// Key binding overview.
    Help,
    /// Type filter picker; index 0 is "All types", `n` is `type_options[n - 1]`.
    TypePicker {
        /// Highlighted row.
        selected: usize,
    },
    /// Creature detail; `view` is `None` while the lookup runs.
    Detail {
        /// Requested creature id.
        id: u32,
        /// Result of the lookup once it arrives.
        view: Option<DetailView>,
    },
}

impl Modal {
    /// Whether a dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
