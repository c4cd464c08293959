//! Mesh construction errors.

use tessera_model::{Direction, TextureId};
use thiserror::Error;

/// Fatal problems with a model handed to the builder.
///
/// Numeric oddities (zero-size elements, flat rotations) are not errors; they
/// produce degenerate triangles instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A face points at a texture the registry does not know.
    #[error("{direction:?} face references unregistered texture {texture:?}")]
    UnknownTexture {
        /// The dangling reference.
        texture: TextureId,
        /// Which face carried it.
        direction: Direction,
    },
}
