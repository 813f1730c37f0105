//! Central `AppState` container for the terminal UI.

use crate::render::{Fragment, ListView};
use crate::state::modal::Modal;
use crate::state::types::{ControllerStatus, CreatureSummary, Focus, TypeOption};
use crate::theme::KeyMap;

/// UI-side state mutated by key handling and by fragments from the controller worker.
///
/// The controller owns the authoritative pagination state; this struct only
/// mirrors what it last reported so the title bar can show it.
#[derive(Debug, Default)]
pub struct AppState {
    /// Which pane receives key presses.
    pub focus: Focus,
    /// Current search input text.
    pub input: String,
    /// Card grid content as last rendered by the controller.
    pub list: ListView,
    /// Index of the highlighted card.
    pub selected: usize,
    /// Filter options received at startup.
    pub type_options: Vec<TypeOption>,
    /// Last reported controller position.
    pub status: ControllerStatus,
    /// Open dialog.
    pub modal: Modal,
    /// Key bindings in effect.
    pub keymap: KeyMap,
    /// Cards per grid row at the last draw; Up/Down move by this many.
    pub grid_columns: usize,
}

impl AppState {
    /// What: Create state with the given key bindings.
    #[must_use]
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            grid_columns: 1,
            ..Self::default()
        }
    }

    /// Cards currently shown.
    #[must_use]
    pub fn cards(&self) -> &[CreatureSummary] {
        self.list.cards()
    }

    /// Highlighted card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&CreatureSummary> {
        self.cards().get(self.selected)
    }

    /// What: Move the card highlight by `delta`, clamped to the grid.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.cards().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }

    /// What: Apply one fragment from the controller worker.
    ///
    /// Details:
    /// - A new list resets the highlight to the first card.
    /// - A detail fragment only lands in an open detail dialog for the same
    ///   creature; a dialog closed while loading stays closed.
    pub fn apply_fragment(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::List(view) => {
                self.list = view;
                self.selected = 0;
            }
            Fragment::TypeOptions(options) => {
                self.type_options = options;
            }
            Fragment::Detail(view) => {
                if let Modal::Detail { id, view: slot } = &mut self.modal
                    && view.id() == *id
                {
                    *slot = Some(view);
                }
            }
        }
    }

    /// Type name for a picker row (`None` for the "All types" row).
    #[must_use]
    pub fn picker_type(&self, row: usize) -> Option<&str> {
        row.checked_sub(1)
            .and_then(|i| self.type_options.get(i))
            .map(|t| t.name.as_str())
    }
}
