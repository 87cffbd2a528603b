//! Error types for the fallible edges of texviz.
//!
//! The page controller itself never fails: missing elements are skipped.
//! Errors only come from binding to a document, parsing configuration,
//! reading the texture library and the tiling kernels.

use thiserror::Error;

/// Errors that can occur outside the click/load handlers.
#[derive(Error, Debug)]
pub enum PageError {
    /// Configuration JSON could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration was written by a newer version
    #[error("Unsupported config version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the config
        found: u32,
        /// Highest version this build understands
        supported: u32,
    },

    /// Browser document access failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// I/O error while reading the texture library
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A `.npy` mask could not be read
    #[error("NumPy error: {0}")]
    Npy(#[from] ndarray_npy::ReadNpyError),

    /// Array shapes do not line up
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// Shape required by the operation
        expected: Vec<usize>,
        /// Shape that was provided
        found: Vec<usize>,
    },

    /// Texture has no pixels
    #[error("Texture is empty")]
    EmptyTexture,

    /// Tiled output would not fit in memory
    #[error("Tiling a {texture:?} texture {reps:?} times is too large")]
    TileTooLarge {
        /// Texture (height, width)
        texture: (usize, usize),
        /// Requested (vertical, horizontal) repeats
        reps: (usize, usize),
    },

    /// Tiling with zero repeats along an axis
    #[error("Tile repeats must be at least 1")]
    ZeroRepeats,
}

impl PageError {
    /// Create a DOM error with a message.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }

    /// Create a shape mismatch error from two shapes.
    pub fn shape_mismatch(expected: &[usize], found: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PageError>;
