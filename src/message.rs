//! Message and effect types for the page controller.
//!
//! All page events are represented as messages in the Elm architecture style.

/// What the controller learned about one texture card at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSnapshot {
    /// Resolved source URL of the card's image, if the card has one
    pub image_src: Option<String>,
    /// Whether the card has a preview surface
    pub has_preview: bool,
}

impl CardSnapshot {
    /// Snapshot of a card with both an image and a preview.
    pub fn complete(image_src: impl Into<String>) -> Self {
        Self {
            image_src: Some(image_src.into()),
            has_preview: true,
        }
    }

    /// Source to copy onto the preview, if both sub-elements exist.
    pub fn preview_source(&self) -> Option<&str> {
        match (&self.image_src, self.has_preview) {
            (Some(src), true) => Some(src.as_str()),
            _ => None,
        }
    }
}

/// Messages that can be sent to update page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Page finished loading; carries one snapshot per card in document order
    Loaded(Vec<CardSnapshot>),
    /// Filter button at this index was clicked
    FilterClicked(usize),
    /// Texture card at this index was clicked
    CardClicked(usize),
}

/// Document mutations requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Add or remove the active marker on a filter button
    SetFilterActive {
        /// Filter button index
        index: usize,
        /// Whether the marker should be present
        active: bool,
    },
    /// Set a card preview's background image
    SetPreviewBackground {
        /// Card index
        card: usize,
        /// Image source to show
        src: String,
    },
    /// Show a notification to the user
    Notify(String),
}
