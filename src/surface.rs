//! Document abstraction used by the page controller.
//!
//! The controller never touches a document directly. It reads what it needs
//! through `PageSurface` and writes back the reducer's effects. The browser
//! implementation lives in `web`, and `MemoryPage` covers tests and tooling.

use crate::message::{CardSnapshot, Effect};

/// Operations the controller needs from a document.
///
/// All methods are infallible: an element that cannot be found is skipped.
pub trait PageSurface {
    /// Number of filter buttons, in document order.
    fn filter_count(&self) -> usize;

    /// First filter button already carrying the active marker.
    fn initially_active_filter(&self) -> Option<usize>;

    /// Image source and preview presence for each card, in document order.
    fn card_snapshots(&self) -> Vec<CardSnapshot>;

    /// Add or remove the active marker on a filter button.
    fn set_filter_active(&mut self, index: usize, active: bool);

    /// Set a card preview's background image to `src`.
    fn set_preview_background(&mut self, card: usize, src: &str);

    /// Show a notification to the user.
    fn notify(&mut self, message: &str);

    /// Apply one reducer effect.
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetFilterActive { index, active } => self.set_filter_active(*index, *active),
            Effect::SetPreviewBackground { card, src } => self.set_preview_background(*card, src),
            Effect::Notify(message) => self.notify(message),
        }
    }
}
