//! Texture registry: maps compact [`TextureId`] values to [`Texture`] metadata.
//!
//! The registry is filled once by the resource-pack loader and then shared
//! read-only by every mesher thread.

use glam::Vec4;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Compact identifier referenced by face definitions and emitted triangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// A texture as far as the mesher cares: a name and one flat color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    /// Resource path (e.g. "block/grass_block_top").
    pub name: String,
    /// Representative RGBA color in `[0, 1]`, used for map-color aggregation.
    pub color: Vec4,
}

impl Texture {
    /// Creates a texture descriptor.
    pub fn new(name: impl Into<String>, color: Vec4) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Errors that can occur during texture registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A texture with the same name has already been registered.
    #[error("duplicate texture name: {0}")]
    DuplicateName(String),
    /// Every `u32` id has been handed out.
    #[error("texture registry is full")]
    RegistryFull,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Dense `TextureId` → [`Texture`] table with reverse lookup by name.
#[derive(Clone, Debug, Default)]
pub struct TextureRegistry {
    /// `index == TextureId.0`.
    textures: Vec<Texture>,
    name_to_id: FxHashMap<String, TextureId>,
}

impl TextureRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a texture and returns its id. Ids are assigned sequentially
    /// from 0.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken.
    pub fn register(&mut self, texture: Texture) -> Result<TextureId, RegistryError> {
        if self.name_to_id.contains_key(&texture.name) {
            return Err(RegistryError::DuplicateName(texture.name));
        }
        let id = u32::try_from(self.textures.len())
            .map(TextureId)
            .map_err(|_| RegistryError::RegistryFull)?;
        self.name_to_id.insert(texture.name.clone(), id);
        self.textures.push(texture);
        Ok(id)
    }

    /// Returns the texture for `id`, or `None` if it was never registered.
    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0 as usize)
    }

    /// Reverse lookup by resource path.
    pub fn id_of(&self, name: &str) -> Option<TextureId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
