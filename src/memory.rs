//! In-memory page used without a live document.

use std::collections::BTreeSet;

use crate::message::CardSnapshot;
use crate::surface::PageSurface;

/// A filter button: just its set of classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFilter {
    /// Classes currently on the button
    pub classes: BTreeSet<String>,
}

/// A texture card with optional image and preview sub-elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCard {
    /// Resolved source of the card image, `None` if the card has no image
    pub image_src: Option<String>,
    /// Preview surface, `None` if the card has no preview
    pub preview: Option<MemoryPreview>,
}

/// Preview surface of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreview {
    /// Background image source, once set
    pub background: Option<String>,
}

impl MemoryCard {
    /// Card with both an image and an empty preview.
    pub fn with_image(src: impl Into<String>) -> Self {
        Self {
            image_src: Some(src.into()),
            preview: Some(MemoryPreview::default()),
        }
    }

    /// Background shown by the preview, if any.
    pub fn background(&self) -> Option<&str> {
        self.preview.as_ref()?.background.as_deref()
    }
}

/// Page held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    active_class: String,
    filters: Vec<MemoryFilter>,
    cards: Vec<MemoryCard>,
    notifications: Vec<String>,
}

impl MemoryPage {
    /// Create an empty page using `active_class` as the active marker.
    pub fn new(active_class: impl Into<String>) -> Self {
        Self {
            active_class: active_class.into(),
            filters: Vec::new(),
            cards: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Add `count` filter buttons without the active marker.
    pub fn with_filters(mut self, count: usize) -> Self {
        self.filters
            .extend(std::iter::repeat_with(MemoryFilter::default).take(count));
        self
    }

    /// Add a filter button that starts with the active marker.
    pub fn with_active_filter(mut self) -> Self {
        let mut filter = MemoryFilter::default();
        filter.classes.insert(self.active_class.clone());
        self.filters.push(filter);
        self
    }

    /// Add a texture card.
    pub fn with_card(mut self, card: MemoryCard) -> Self {
        self.cards.push(card);
        self
    }

    /// Filter buttons in document order.
    pub fn filters(&self) -> &[MemoryFilter] {
        &self.filters
    }

    /// Texture cards in document order.
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    /// Notifications shown so far.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Indices of filter buttons carrying the active marker.
    pub fn active_filters(&self) -> Vec<usize> {
        self.filters
            .iter()
            .enumerate()
            .filter(|(_, f)| f.classes.contains(&self.active_class))
            .map(|(i, _)| i)
            .collect()
    }
}

impl PageSurface for MemoryPage {
    fn filter_count(&self) -> usize {
        self.filters.len()
    }

    fn initially_active_filter(&self) -> Option<usize> {
        self.active_filters().first().copied()
    }

    fn card_snapshots(&self) -> Vec<CardSnapshot> {
        self.cards
            .iter()
            .map(|card| CardSnapshot {
                image_src: card.image_src.clone(),
                has_preview: card.preview.is_some(),
            })
            .collect()
    }

    fn set_filter_active(&mut self, index: usize, active: bool) {
        let Some(filter) = self.filters.get_mut(index) else {
            return;
        };
        if active {
            filter.classes.insert(self.active_class.clone());
        } else {
            filter.classes.remove(&self.active_class);
        }
    }

    fn set_preview_background(&mut self, card: usize, src: &str) {
        if let Some(preview) = self.cards.get_mut(card).and_then(|c| c.preview.as_mut()) {
            preview.background = Some(src.to_string());
        }
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_snapshots() {
        let page = MemoryPage::new("active")
            .with_filters(2)
            .with_active_filter()
            .with_card(MemoryCard::with_image("a.png"))
            .with_card(MemoryCard::default());

        assert_eq!(page.filter_count(), 3);
        assert_eq!(page.initially_active_filter(), Some(2));
        assert_eq!(
            page.card_snapshots(),
            vec![
                CardSnapshot::complete("a.png"),
                CardSnapshot {
                    image_src: None,
                    has_preview: false
                }
            ]
        );
    }

    #[test]
    fn test_set_filter_active_toggles_class() {
        let mut page = MemoryPage::new("active").with_filters(2);
        page.set_filter_active(1, true);
        assert_eq!(page.active_filters(), vec![1]);
        page.set_filter_active(1, false);
        assert!(page.active_filters().is_empty());
        // Out of range is ignored
        page.set_filter_active(9, true);
        assert!(page.active_filters().is_empty());
    }

    #[test]
    fn test_preview_background_needs_preview() {
        let mut page = MemoryPage::new("active").with_card(MemoryCard {
            image_src: Some("a.png".to_string()),
            preview: None,
        });
        page.set_preview_background(0, "a.png");
        assert_eq!(page.cards()[0].background(), None);
    }
}
