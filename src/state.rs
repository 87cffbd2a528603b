//! Page state and its reducer.
//!
//! `PageState::update` is the only place state changes. It answers each message
//! with the effects a surface must apply to the document.

use crate::message::{Effect, Message};

/// Placeholder shown when a texture card is clicked.
pub const TEXTURE_SELECTED_NOTICE: &str = "Texture selected (connect ML logic here)";

/// Which filter button, if any, is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    count: usize,
    active: Option<usize>,
}

impl FilterState {
    /// Create filter state for `count` buttons.
    ///
    /// An out-of-range `initially_active` is treated as no active filter.
    pub fn new(count: usize, initially_active: Option<usize>) -> Self {
        Self {
            count,
            active: initially_active.filter(|&i| i < count),
        }
    }

    /// Number of filter buttons.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the active filter.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether the filter at `index` is active.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Activate `index`, returning false if it is out of range.
    fn activate(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.active = Some(index);
        true
    }
}

/// Complete state of the page.
#[derive(Debug, Clone)]
pub struct PageState {
    filters: FilterState,
    card_count: usize,
    notification: String,
}

impl PageState {
    /// Create page state for `filter_count` buttons.
    pub fn new(
        filter_count: usize,
        initially_active: Option<usize>,
        notification: impl Into<String>,
    ) -> Self {
        Self {
            filters: FilterState::new(filter_count, initially_active),
            card_count: 0,
            notification: notification.into(),
        }
    }

    /// Filter button state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Number of cards seen at load.
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Apply a message and return the effects to perform.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Loaded(cards) => {
                self.card_count = cards.len();
                cards
                    .iter()
                    .enumerate()
                    .filter_map(|(card, snapshot)| match snapshot.preview_source() {
                        Some(src) => Some(Effect::SetPreviewBackground {
                            card,
                            src: src.to_string(),
                        }),
                        None => {
                            log::debug!("Card {} lacks an image or preview, skipping", card);
                            None
                        }
                    })
                    .collect()
            }
            Message::FilterClicked(index) => {
                if !self.filters.activate(index) {
                    log::warn!(
                        "Ignoring click on filter {} (only {} filters)",
                        index,
                        self.filters.count()
                    );
                    return Vec::new();
                }
                log::debug!("Filter {} activated", index);

                let mut effects: Vec<Effect> = (0..self.filters.count())
                    .map(|i| Effect::SetFilterActive {
                        index: i,
                        active: false,
                    })
                    .collect();
                effects.push(Effect::SetFilterActive {
                    index,
                    active: true,
                });
                effects
            }
            Message::CardClicked(card) => {
                log::info!("Texture card {} selected", card);
                vec![Effect::Notify(self.notification.clone())]
            }
        }
    }
}
