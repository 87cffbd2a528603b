//! Page interaction controller.
//!
//! Owns the page state and a surface, and routes every message through the
//! reducer before writing the resulting effects to the surface.

use web_time::Instant;

use crate::config::PageConfig;
use crate::message::Message;
use crate::state::PageState;
use crate::surface::PageSurface;

/// Binds a `PageState` to the document it controls.
pub struct PageController<S: PageSurface> {
    state: PageState,
    surface: S,
}

impl<S: PageSurface> PageController<S> {
    /// Read the surface, build state and run the load step.
    ///
    /// Every card with both an image and a preview gets the image as its
    /// preview background. Cards missing either are left alone.
    pub fn initialize(surface: S, config: &PageConfig) -> Self {
        let start = Instant::now();

        let state = PageState::new(
            surface.filter_count(),
            surface.initially_active_filter(),
            config.notification.clone(),
        );
        let cards = surface.card_snapshots();
        let mut controller = Self { state, surface };
        controller.dispatch(Message::Loaded(cards));

        log::info!(
            "Page initialized: {} filters, {} texture cards in {:.2?}",
            controller.state.filters().count(),
            controller.state.card_count(),
            start.elapsed()
        );
        controller
    }

    /// Run a message through the reducer and apply its effects in order.
    pub fn dispatch(&mut self, message: Message) {
        let effects = self.state.update(message);
        for effect in &effects {
            log::trace!("Applying {:?}", effect);
            self.surface.apply(effect);
        }
    }

    /// Handle a click on the filter at `index`.
    pub fn filter_clicked(&mut self, index: usize) {
        self.dispatch(Message::FilterClicked(index));
    }

    /// Handle a click on the texture card at `index`.
    pub fn card_clicked(&mut self, index: usize) {
        self.dispatch(Message::CardClicked(index));
    }

    /// Current page state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// The surface being controlled.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
