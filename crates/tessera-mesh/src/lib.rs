//! Block-model meshing: turns cuboid resource models plus the neighborhood of
//! one voxel into shaded, textured triangles and a top-down map color.
//!
//! The entry point is [`BlockModelBuilder::build`]. A builder borrows
//! everything it reads, so one can be created per voxel on any worker thread.

pub mod ambient_occlusion;
pub mod block_mesh;
pub mod builder;
pub mod constants;
pub mod element;
pub mod error;
pub mod face;
pub mod neighborhood;
pub mod rotation;
pub mod tint;
pub mod uv;

pub use ambient_occlusion::{corner_occlusion, occlusion_factor};
pub use block_mesh::{BlockMesh, Triangle, blend_colors};
pub use builder::BlockModelBuilder;
pub use error::MeshError;
pub use neighborhood::{BlockContext, BlockProps, NeighborhoodSnapshot, RelativeView};
pub use tint::{FixedTint, TintSource};
pub use uv::{rotate_continuous, rotate_discrete, uv_lock_angle};
