//! Cuboid element assembly: corners, per-face synthesis, element rotation,
//! and the 0–16 to unit-block scale-down.

use glam::{Mat3, Vec3};
use tessera_model::{Direction, Element, ElementRotation, TransformedModel};

use crate::block_mesh::BlockMesh;
use crate::builder::BlockModelBuilder;
use crate::constants::{BLOCK_SCALE, RESCALE_FACTOR};
use crate::error::MeshError;
use crate::neighborhood::BlockContext;
use crate::rotation::from_angle_deg_axis;
use crate::tint::TintSource;

/// Corner indices per face, wound so both triangles face outward.
const FACE_CORNERS: [(Direction, [usize; 4]); 6] = [
    (Direction::Down, [0, 2, 3, 1]),
    (Direction::Up, [5, 7, 6, 4]),
    (Direction::North, [2, 0, 4, 6]),
    (Direction::South, [1, 3, 7, 5]),
    (Direction::West, [0, 1, 5, 4]),
    (Direction::East, [3, 2, 6, 7]),
];

/// The eight corners of the box spanned by `from` and `to`, in either order.
///
/// Index bits are `y x z` from most to least significant: bit 0 picks max z,
/// bit 1 max x, bit 2 max y.
pub fn cuboid_corners(from: Vec3, to: Vec3) -> [Vec3; 8] {
    let min = from.min(to);
    let max = from.max(to);
    std::array::from_fn(|i| {
        Vec3::new(
            if i & 0b010 != 0 { max.x } else { min.x },
            if i & 0b100 != 0 { max.y } else { min.y },
            if i & 0b001 != 0 { max.z } else { min.z },
        )
    })
}

/// Diagonal stretch that makes an element rotated by `rotation` span the same
/// extent along the two axes perpendicular to the rotation axis.
pub fn rescale_vector(rotation: &ElementRotation) -> Vec3 {
    let sin = rotation.angle.to_radians().sin().abs();
    (Vec3::ONE - rotation.axis.unit_vector()) * sin * RESCALE_FACTOR + Vec3::ONE
}

impl<C: BlockContext, T: TintSource + ?Sized> BlockModelBuilder<'_, C, T> {
    /// Meshes one element in unit block space, before the whole-model
    /// rotation.
    pub fn assemble_element(
        &self,
        element: &Element,
        model: &TransformedModel,
    ) -> Result<BlockMesh, MeshError> {
        let mut mesh = BlockMesh::new();
        let corners = cuboid_corners(element.from, element.to);

        for (direction, [a, b, c, d]) in FACE_CORNERS {
            let quad = [corners[a], corners[b], corners[c], corners[d]];
            self.synthesize_face(&mut mesh, model, element, direction, quad)?;
        }

        if let Some(rotation) = element.active_rotation() {
            mesh.translate(-rotation.origin);
            mesh.rotate(from_angle_deg_axis(rotation.angle, rotation.axis.unit_vector()));
            if rotation.rescale {
                mesh.transform(Mat3::from_diagonal(rescale_vector(rotation)));
            }
            mesh.translate(rotation.origin);
        }

        mesh.transform(Mat3::from_diagonal(Vec3::splat(BLOCK_SCALE)));
        Ok(mesh)
    }
}
