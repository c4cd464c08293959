//! Declarative block-model descriptions as produced by a resource-pack decoder.
//!
//! Everything here is immutable input to the mesher: cuboid elements with
//! per-face texture, UV, cull and tint metadata, the whole-model placement
//! rotation, and the texture registry faces point into.

pub mod direction;
pub mod element;
pub mod model;
pub mod texture;

pub use direction::{Axis, Direction};
pub use element::{Element, ElementRotation, FaceDefinition};
pub use model::{Model, ModelRotation, TransformedModel};
pub use texture::{RegistryError, Texture, TextureId, TextureRegistry};
