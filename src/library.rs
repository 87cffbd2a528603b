//! Texture library scanning.
//!
//! The card grid is populated from a directory of texture images. Only JPEG
//! and PNG files are offered as textures.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Supported texture file extensions.
pub const TEXTURE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// URL prefix under which textures are served to the page.
pub const TEXTURE_URL_PREFIX: &str = "/textures/";

/// Check if a filename has a supported texture extension.
pub fn is_texture_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    TEXTURE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Strip any directory components from a requested texture name.
fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// URL a card image uses to reference `name`.
pub fn texture_url(name: &str) -> String {
    format!("{}{}", TEXTURE_URL_PREFIX, base_name(name))
}

/// Textures available in one directory.
#[derive(Debug, Clone)]
pub struct TextureLibrary {
    root: PathBuf,
    names: Vec<String>,
}

impl TextureLibrary {
    /// List the texture files in `dir`, sorted by name.
    ///
    /// Subdirectories and non-texture files are ignored.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                log::warn!("Skipping non UTF-8 file name in {}", dir.display());
                continue;
            };
            if is_texture_file(&name) {
                names.push(name);
            }
        }
        names.sort();

        log::info!("Found {} textures in {}", names.len(), dir.display());
        Ok(Self {
            root: dir.to_path_buf(),
            names,
        })
    }

    /// Directory the library was scanned from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Texture file names, sorted.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of textures.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the library has no textures.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Path of the texture called `name`.
    ///
    /// Directory components in `name` are dropped, so a request can never
    /// leave the library directory.
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        let name = base_name(name);
        self.names
            .iter()
            .any(|n| n == name)
            .then(|| self.root.join(name))
    }
}
