//! Texture cache.
//!
//! [`TextureStore`] maps file paths to loaded textures. A lookup of a path
//! that was never loaded reads it from disk and keeps it; later lookups reuse
//! the loaded handle. The store is owned by the world as a non-send resource
//! (raylib textures belong to the main thread) and is emptied explicitly with
//! [`TextureStore::unload_all`] before the window closes.

use log::{debug, info};
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

/// Map of texture paths to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Get the texture for `path`, loading it from disk on first use.
    pub fn get_or_load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<&Texture2D, String> {
        if !self.textures.contains_key(path) {
            let texture = rl
                .load_texture(thread, path)
                .map_err(|e| format!("Failed to load texture '{}': {}", path, e))?;
            info!("Loaded {} from disk", path);
            self.textures.insert(path.to_string(), texture);
        } else {
            debug!("Texture {} already loaded", path);
        }
        self.textures
            .get(path)
            .ok_or_else(|| format!("Texture '{}' missing after load", path))
    }

    /// Get an already loaded texture.
    pub fn get(&self, path: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(path.as_ref())
    }

    /// Drop every texture. Raylib unloads a texture when its handle is dropped.
    pub fn unload_all(&mut self) {
        info!("Unloading {} textures", self.textures.len());
        self.textures.clear();
    }
}
