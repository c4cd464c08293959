//! Per-corner ambient occlusion for block-model faces.
//!
//! A corner is darkened by the blocks in front of it along the box edges it
//! touches. Corners that touch fewer edges collapse several candidates onto
//! the same block, which is then counted once per candidate.

use glam::{IVec3, Vec3};
use tessera_model::{Direction, ModelRotation};

use crate::constants::MAX_OCCLUDERS;
use crate::neighborhood::BlockContext;
use crate::rotation::rotation_relative_offset;

/// Brightness multiplier for a corner with `count` occluding neighbors.
///
/// Counts above [`MAX_OCCLUDERS`] are treated as the maximum; the result is
/// clamped to `[0, 1]`.
pub fn occlusion_factor(count: u8, strength: f32) -> f32 {
    let count = count.min(MAX_OCCLUDERS);
    (1.0 - f32::from(count) * strength).clamp(0.0, 1.0)
}

/// Counts the occluding blocks in front of `corner` (0–16 model space) on a
/// face pointing in `direction`.
pub fn corner_occlusion<C: BlockContext + ?Sized>(
    context: &C,
    rotation: ModelRotation,
    corner: Vec3,
    direction: Direction,
) -> u8 {
    let e = IVec3::new(extremity(corner.x), extremity(corner.y), extremity(corner.z));
    let normal = direction.vector();

    let candidates = [
        IVec3::new(e.x, e.y, 0),
        IVec3::new(e.x, 0, e.z),
        IVec3::new(0, e.y, e.z),
        e,
    ];

    let occluding = candidates
        .into_iter()
        .filter(|c| c.dot(normal) > 0)
        .filter(|c| {
            context
                .relative_block(rotation_relative_offset(rotation, c.as_vec3()))
                .occludes_neighbor_faces
        })
        .count();

    (occluding as u8).min(MAX_OCCLUDERS)
}

/// `+1` on the max side of the box, `-1` on the min side, `0` inside.
fn extremity(v: f32) -> i32 {
    if v == 16.0 {
        1
    } else if v == 0.0 {
        -1
    } else {
        0
    }
}
