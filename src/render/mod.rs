//! Display fragments produced by the controller and the renderers that draw them.
//!
//! The controller never touches a terminal or stdout directly: it builds
//! fragment values and hands them to a [`Renderer`], which replaces the
//! matching display region on its substrate.

use crate::error::{NoticeKind, PokedexError};
use crate::state::{CreatureDetail, CreatureSummary, TypeOption};

mod channel;
mod text;

pub use channel::{ChannelRenderer, Fragment};
pub use text::TextRenderer;

/// Shown when a page or a type listing cannot be loaded.
pub const LIST_FAILED_TEXT: &str = "Could not load Pokémon information.";
/// Shown when a search yields nothing.
pub const SEARCH_FAILED_TEXT: &str = "Pokémon not found.";
/// Shown when the detail view cannot be built.
pub const DETAIL_FAILED_TEXT: &str = "Could not load the Pokémon description.";

/// Static user-facing message with the kind of failure behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Failure classification.
    pub kind: NoticeKind,
    /// Fixed message text.
    pub text: String,
}

impl Notice {
    /// What: Build a notice with a fixed text for an error.
    ///
    /// Inputs:
    /// - `err`: The caught error (only its kind is kept)
    /// - `text`: Static message to show instead of the error detail
    #[must_use]
    pub fn from_error(err: &PokedexError, text: &str) -> Self {
        Self {
            kind: err.kind(),
            text: text.to_string(),
        }
    }
}

/// Content of the card grid region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing requested yet or a request in flight.
    #[default]
    Loading,
    /// Cards in provider order.
    Cards(Vec<CreatureSummary>),
    /// Static failure notice replacing the grid.
    Notice(Notice),
}

impl ListView {
    /// Cards currently shown (empty for loading or notices).
    #[must_use]
    pub fn cards(&self) -> &[CreatureSummary] {
        match self {
            Self::Cards(c) => c,
            Self::Loading | Self::Notice(_) => &[],
        }
    }

    /// The notice, if the region shows one.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Notice(n) => Some(n),
            Self::Loading | Self::Cards(_) => None,
        }
    }
}

/// Content of the detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailView {
    /// A fully built detail.
    Ready(CreatureDetail),
    /// Static failure notice replacing the description.
    Failed {
        /// Requested creature id.
        id: u32,
        /// Notice shown instead.
        notice: Notice,
    },
}

impl DetailView {
    /// Creature id this view answers.
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::Ready(d) => d.id,
            Self::Failed { id, .. } => *id,
        }
    }
}

/// A substrate that can show the controller's fragments.
///
/// Each call replaces the whole region it names.
pub trait Renderer: Send {
    /// Replace the card grid.
    fn render_list(&mut self, view: &ListView);
    /// Replace the detail modal content.
    fn render_detail(&mut self, view: &DetailView);
    /// Replace the type filter options.
    fn render_type_options(&mut self, options: &[TypeOption]);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render_list(&mut self, view: &ListView) {
        (**self).render_list(view);
    }

    fn render_detail(&mut self, view: &DetailView) {
        (**self).render_detail(view);
    }

    fn render_type_options(&mut self, options: &[TypeOption]) {
        (**self).render_type_options(options);
    }
}

/// Renderer that keeps every fragment it receives, in order.
///
/// Used by tests and by callers that want to inspect output instead of
/// drawing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    /// Every fragment received so far.
    pub fragments: Vec<Fragment>,
}

impl RecordingRenderer {
    /// Most recent list fragment.
    #[must_use]
    pub fn last_list(&self) -> Option<&ListView> {
        self.fragments.iter().rev().find_map(|f| match f {
            Fragment::List(v) => Some(v),
            _ => None,
        })
    }

    /// Most recent detail fragment.
    #[must_use]
    pub fn last_detail(&self) -> Option<&DetailView> {
        self.fragments.iter().rev().find_map(|f| match f {
            Fragment::Detail(v) => Some(v),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn render_list(&mut self, view: &ListView) {
        self.fragments.push(Fragment::List(view.clone()));
    }

    fn render_detail(&mut self, view: &DetailView) {
        self.fragments.push(Fragment::Detail(view.clone()));
    }

    fn render_type_options(&mut self, options: &[TypeOption]) {
        self.fragments.push(Fragment::TypeOptions(options.to_vec()));
    }
}
