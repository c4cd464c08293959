//! Whole-model entry point.

use tessera_config::RenderSettings;
use tessera_model::{TextureRegistry, TransformedModel};

use crate::block_mesh::BlockMesh;
use crate::constants::{HALF_3, NEG_HALF_3};
use crate::error::MeshError;
use crate::neighborhood::BlockContext;
use crate::rotation::model_inverse_rotation;
use crate::tint::TintSource;

/// Meshes resource models for the voxel at the center of `context`.
///
/// The builder only borrows its inputs, so creating one per voxel is free and
/// any number of them can run side by side on different threads.
pub struct BlockModelBuilder<'a, C: BlockContext, T: TintSource + ?Sized> {
    pub(crate) settings: &'a RenderSettings,
    pub(crate) textures: &'a TextureRegistry,
    pub(crate) context: &'a C,
    pub(crate) tint: &'a T,
}

impl<'a, C: BlockContext, T: TintSource + ?Sized> BlockModelBuilder<'a, C, T> {
    /// Creates a builder for one voxel.
    pub fn new(
        settings: &'a RenderSettings,
        textures: &'a TextureRegistry,
        context: &'a C,
        tint: &'a T,
    ) -> Self {
        Self {
            settings,
            textures,
            context,
            tint,
        }
    }

    /// Meshes every element of `model` and applies the whole-model rotation
    /// about the block center.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownTexture`] if an emitted face references a
    /// texture missing from the registry.
    pub fn build(&self, model: &TransformedModel) -> Result<BlockMesh, MeshError> {
        let mut mesh = BlockMesh::new();
        for element in &model.model.elements {
            mesh.merge(self.assemble_element(element, model)?);
        }

        if !model.rotation.is_identity() {
            mesh.translate(NEG_HALF_3);
            mesh.rotate(model_inverse_rotation(model.rotation));
            mesh.translate(HALF_3);
        }

        tracing::trace!(
            elements = model.model.elements.len(),
            triangles = mesh.triangle_count(),
            rotation_x = model.rotation.x,
            rotation_y = model.rotation.y,
            "built block model"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use glam::{Vec3, Vec4};
    use tessera_model::{Direction, Element, FaceDefinition, Model, Texture, TextureId};

    use crate::neighborhood::{BlockProps, NeighborhoodSnapshot};
    use crate::tint::FixedTint;

    fn registry() -> TextureRegistry {
        let mut reg = TextureRegistry::new();
        reg.register(Texture::new("block/stone", Vec4::ONE)).unwrap();
        reg
    }

    fn sky() -> NeighborhoodSnapshot {
        NeighborhoodSnapshot::filled(BlockProps::air(15, 0))
    }

    fn cube() -> Arc<Model> {
        Arc::new(Model::new(vec![
            Element::full_cube().with_all_faces(FaceDefinition::new(TextureId(0))),
        ]))
    }

    #[test]
    fn test_empty_model_builds_empty_mesh() {
        let settings = RenderSettings::default();
        let textures = registry();
        let ctx = sky();
        let tint = FixedTint::default();
        let builder = BlockModelBuilder::new(&settings, &textures, &ctx, &tint);
        let mesh = builder
            .build(&TransformedModel::new(Arc::new(Model::new(Vec::new()))))
            .unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.map_color, Vec4::ZERO);
    }

    #[test]
    fn test_elements_are_merged_in_order() {
        let model = Arc::new(Model::new(vec![
            Element::new(Vec3::ZERO, Vec3::new(16.0, 8.0, 16.0))
                .with_face(Direction::Up, FaceDefinition::new(TextureId(0))),
            Element::new(Vec3::new(0.0, 8.0, 0.0), Vec3::splat(16.0))
                .with_face(Direction::Up, FaceDefinition::new(TextureId(0))),
        ]));
        let settings = RenderSettings::default();
        let textures = registry();
        let ctx = sky();
        let tint = FixedTint::default();
        let builder = BlockModelBuilder::new(&settings, &textures, &ctx, &tint);
        let mesh = builder.build(&TransformedModel::new(model)).unwrap();
        assert_eq!(mesh.triangle_count(), 4);
        assert!((mesh.triangles[0].positions[0].y - 0.5).abs() < 1e-6);
        assert!((mesh.triangles[2].positions[0].y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotated_cube_stays_in_unit_block() {
        let settings = RenderSettings::default();
        let textures = registry();
        let ctx = sky();
        let tint = FixedTint::default();
        let builder = BlockModelBuilder::new(&settings, &textures, &ctx, &tint);
        for (x, y) in [(90, 0), (0, 90), (180, 270), (270, 180)] {
            let mesh = builder.build(&TransformedModel::new(cube()).rotated(x, y)).unwrap();
            assert_eq!(mesh.triangle_count(), 12);
            for p in mesh.triangles.iter().flat_map(|t| t.positions) {
                assert!(p.min_element() > -1e-5 && p.max_element() < 1.0 + 1e-5, "{p:?}");
            }
        }
    }

    #[test]
    fn test_unknown_texture_aborts_build() {
        let model = Arc::new(Model::new(vec![
            Element::full_cube().with_face(Direction::North, FaceDefinition::new(TextureId(9))),
        ]));
        let settings = RenderSettings::default();
        let textures = registry();
        let ctx = sky();
        let tint = FixedTint::default();
        let builder = BlockModelBuilder::new(&settings, &textures, &ctx, &tint);
        let err = builder.build(&TransformedModel::new(model)).unwrap_err();
        assert_eq!(
            err,
            MeshError::UnknownTexture {
                texture: TextureId(9),
                direction: Direction::North,
            }
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let settings = RenderSettings::default();
        let textures = registry();
        let ctx = sky().with(glam::IVec3::new(1, 1, 0), BlockProps::solid());
        let tint = FixedTint::default();
        let builder = BlockModelBuilder::new(&settings, &textures, &ctx, &tint);
        let placed = TransformedModel::new(cube()).rotated(0, 90).uv_locked();
        assert_eq!(builder.build(&placed).unwrap(), builder.build(&placed).unwrap());
    }
}
