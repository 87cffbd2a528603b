//! Browser binding for the page controller.
//!
//! `WebPage` implements `PageSurface` over a root element. Every lookup is
//! scoped to that root. `mount` registers the click handlers that feed the
//! controller.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, HtmlImageElement};

use crate::config::PageConfig;
use crate::controller::PageController;
use crate::error::{PageError, Result};
use crate::markup::{Markup, css_url};
use crate::message::CardSnapshot;
use crate::surface::PageSurface;

/// Elements of one texture card, resolved once at mount.
struct CardElements {
    card: Element,
    image: Option<Element>,
    preview: Option<HtmlElement>,
}

/// A page rooted at a DOM element.
pub struct WebPage {
    active_class: String,
    filters: Vec<Element>,
    cards: Vec<CardElements>,
}

fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Resolved source of an image element, like `img.src` in the DOM.
fn image_source(image: &Element) -> Option<String> {
    let src = match image.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.src(),
        None => image.get_attribute("src")?,
    };
    (!src.is_empty()).then_some(src)
}

impl WebPage {
    /// Collect filter buttons and texture cards below `root`.
    pub fn new(root: &Element, markup: &Markup) -> Result<Self> {
        let filters = query_all(root, &markup.filter_selector())?;
        let preview_selector = markup.preview_selector();

        let cards = query_all(root, &markup.card_selector())?
            .into_iter()
            .map(|card| -> Result<CardElements> {
                let image = card.query_selector(&markup.image_selector)?;
                let preview = card
                    .query_selector(&preview_selector)?
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                Ok(CardElements {
                    card,
                    image,
                    preview,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            active_class: markup.active_class.clone(),
            filters,
            cards,
        })
    }
}

impl PageSurface for WebPage {
    fn filter_count(&self) -> usize {
        self.filters.len()
    }

    fn initially_active_filter(&self) -> Option<usize> {
        self.filters
            .iter()
            .position(|f| f.class_list().contains(&self.active_class))
    }

    fn card_snapshots(&self) -> Vec<CardSnapshot> {
        self.cards
            .iter()
            .map(|c| CardSnapshot {
                image_src: c.image.as_ref().and_then(image_source),
                has_preview: c.preview.is_some(),
            })
            .collect()
    }

    fn set_filter_active(&mut self, index: usize, active: bool) {
        let Some(filter) = self.filters.get(index) else {
            return;
        };
        let classes = filter.class_list();
        let result = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(e) = result {
            log::warn!("Failed to update class on filter {}: {:?}", index, e);
        }
    }

    fn set_preview_background(&mut self, card: usize, src: &str) {
        let Some(preview) = self.cards.get(card).and_then(|c| c.preview.as_ref()) else {
            return;
        };
        if let Err(e) = preview
            .style()
            .set_property("background-image", &css_url(src))
        {
            log::warn!("Failed to set preview background on card {}: {:?}", card, e);
        }
    }

    fn notify(&mut self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window for notification: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert() failed: {:?}", e);
        }
    }
}

type ClickHandler = Closure<dyn FnMut(Event)>;

/// A mounted page: the controller plus the listeners feeding it.
///
/// Dropping it removes the listeners. Call `keep_alive` to leave them
/// registered for the lifetime of the page.
pub struct MountedPage {
    controller: Rc<RefCell<PageController<WebPage>>>,
    listeners: Vec<(Element, ClickHandler)>,
}

impl MountedPage {
    /// Shared handle to the controller.
    pub fn controller(&self) -> Rc<RefCell<PageController<WebPage>>> {
        Rc::clone(&self.controller)
    }

    /// Leak the listeners so they stay registered.
    pub fn keep_alive(mut self) {
        for (_, closure) in self.listeners.drain(..) {
            closure.forget();
        }
    }
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        for (element, closure) in &self.listeners {
            let _ = element
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

fn on_click(
    element: &Element,
    controller: &Rc<RefCell<PageController<WebPage>>>,
    handle: fn(&mut PageController<WebPage>, usize),
    index: usize,
) -> Result<(Element, ClickHandler)> {
    let controller = Rc::clone(controller);
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        match controller.try_borrow_mut() {
            Ok(mut ctrl) => handle(&mut ctrl, index),
            Err(_) => log::warn!("Click on element {} while a handler is running", index),
        }
    });
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    Ok((element.clone(), closure))
}

/// Bind the controller to the filter buttons and texture cards under `root`.
pub fn mount(root: &Element, config: &PageConfig) -> Result<MountedPage> {
    let page = WebPage::new(root, &config.markup)?;
    let filters = page.filters.clone();
    let cards: Vec<Element> = page.cards.iter().map(|c| c.card.clone()).collect();

    let controller = Rc::new(RefCell::new(PageController::initialize(page, config)));

    // Listeners go straight into the mounted page so an early return unregisters them.
    let mut mounted = MountedPage {
        controller,
        listeners: Vec::with_capacity(filters.len() + cards.len()),
    };
    for (index, filter) in filters.iter().enumerate() {
        let listener = on_click(
            filter,
            &mounted.controller,
            PageController::filter_clicked,
            index,
        )?;
        mounted.listeners.push(listener);
    }
    for (index, card) in cards.iter().enumerate() {
        let listener = on_click(
            card,
            &mounted.controller,
            PageController::card_clicked,
            index,
        )?;
        mounted.listeners.push(listener);
    }

    Ok(mounted)
}

/// Mount on `root` with an optional JSON config, keeping listeners alive.
#[wasm_bindgen]
pub fn mount_page(root: Element, config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json),
        None => Ok(PageConfig::default()),
    }
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    crate::logging::init_logging(config.log_level);
    mount(&root, &config)
        .map(MountedPage::keep_alive)
        .map_err(|e| {
            log::error!("Failed to mount page: {}", e);
            JsValue::from_str(&e.to_string())
        })
}

fn mount_body() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| PageError::dom("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| PageError::dom("no document"))?;
    let body = document.body().ok_or_else(|| PageError::dom("no body"))?;
    mount(&body, &PageConfig::default())?.keep_alive();
    Ok(())
}

/// WASM entry point: mount on `document.body` once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    crate::logging::init_logging(PageConfig::default().log_level);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount_body() {
                log::error!("Failed to mount page: {}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount_body().map_err(|e| JsValue::from_str(&e.to_string()))?;
    }
    Ok(())
}
