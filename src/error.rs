//! Error taxonomy for provider lookups and the view controller.

use thiserror::Error;

/// Failure raised while talking to the data provider or shaping its answers.
///
/// Every variant is caught at the controller operation that issued the
/// request and turned into a notice; none of them is fatal.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Transport failure or non-success HTTP status.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport or status description.
        message: String,
    },
    /// The provider answered 404 for the requested resource.
    #[error("no resource at {url}")]
    NotFound {
        /// Requested URL.
        url: String,
    },
    /// The species record has no flavour text in the configured language.
    #[error("creature {id} has no description in language '{language}'")]
    MissingLocalizedText {
        /// Creature id.
        id: u32,
        /// Language code that was looked up.
        language: String,
    },
    /// The body did not match the expected JSON shape.
    #[error("unexpected response from {url}: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder message.
        message: String,
    },
    /// A settings value could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// User-facing classification of a failure, carried by notices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Transport, status or decode failure.
    Network,
    /// Lookup yielded no matching creature.
    NotFound,
    /// Description missing in the configured language.
    MissingLocalizedText,
}

impl PokedexError {
    /// What: Classify the error for display.
    ///
    /// Output:
    /// - The [`NoticeKind`] a notice built from this error carries.
    ///
    /// Details:
    /// - Decode and configuration failures are reported as network failures.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        match self {
            Self::NotFound { .. } => NoticeKind::NotFound,
            Self::MissingLocalizedText { .. } => NoticeKind::MissingLocalizedText,
            Self::Network { .. } | Self::Decode { .. } | Self::Config(_) => NoticeKind::Network,
        }
    }
}

/// Result alias for provider and controller internals.
pub type Result<T> = std::result::Result<T, PokedexError>;
