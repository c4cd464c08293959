//! Fixed vectors and factors shared by the builders.

use glam::{Vec2, Vec3};

/// Center of the unit block.
pub const HALF_3: Vec3 = Vec3::splat(0.5);

/// Offset that moves the unit block's center to the origin.
pub const NEG_HALF_3: Vec3 = Vec3::splat(-0.5);

/// Center of UV space.
pub const HALF_2: Vec2 = Vec2::splat(0.5);

/// Model authoring space is 16 units per block.
pub const BLOCK_SCALE: f32 = 1.0 / 16.0;

/// Highest sky or block light level.
pub const MAX_LIGHT: u8 = 15;

/// Occluding neighbors counted per corner at most.
pub const MAX_OCCLUDERS: u8 = 3;

/// `1 - (√2 - 1)`: stretch applied per unit of `|sin(angle)|` when a rotated
/// element is rescaled.
pub const RESCALE_FACTOR: f32 = 1.0 - (std::f32::consts::SQRT_2 - 1.0);
