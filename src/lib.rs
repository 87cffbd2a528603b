//! texviz - Room Texture Visualizer page controller
//!
//! Drives the texture picker page: filter buttons, texture card previews and
//! card selection. The same controller runs in the browser (WASM) and over an
//! in-memory page for tests and tooling. The `tiling` module carries the floor
//! texture kernels used to render a chosen texture into a room image.

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod markup;
pub mod memory;
pub mod message;
pub mod state;
pub mod surface;
pub mod tiling;

#[cfg(not(target_arch = "wasm32"))]
pub mod library;

// WASM entry point
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{LogLevel, PageConfig};
pub use controller::PageController;
pub use error::{PageError, Result};
pub use markup::Markup;
pub use memory::{MemoryCard, MemoryPage};
pub use message::{CardSnapshot, Effect, Message};
pub use state::{FilterState, PageState};
pub use surface::PageSurface;
