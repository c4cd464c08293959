//! Turns one face definition of an element into zero or two shaded
//! triangles and its share of the map color.

use glam::{Vec3, Vec4};
use tessera_model::{Direction, Element, TransformedModel};

use crate::ambient_occlusion::{corner_occlusion, occlusion_factor};
use crate::block_mesh::{BlockMesh, Triangle};
use crate::builder::BlockModelBuilder;
use crate::constants::MAX_LIGHT;
use crate::error::MeshError;
use crate::neighborhood::BlockContext;
use crate::rotation::{from_angle_deg_axis, rotation_relative, rotation_relative_offset};
use crate::tint::TintSource;
use crate::uv::{quad_from_rect, rotate_continuous, rotate_discrete, uv_lock_angle};

impl<C: BlockContext, T: TintSource + ?Sized> BlockModelBuilder<'_, C, T> {
    /// Appends the face of `element` pointing in `direction`.
    ///
    /// `corners` are in 0–16 model space and wound so that `(0, 1, 2)` and
    /// `(0, 2, 3)` face outward. Nothing is emitted if the element has no
    /// face there, the face is culled, or it receives no sunlight while
    /// unlit faces are excluded.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownTexture`] if the face would be emitted
    /// with a texture the registry does not know.
    pub fn synthesize_face(
        &self,
        mesh: &mut BlockMesh,
        model: &TransformedModel,
        element: &Element,
        direction: Direction,
        corners: [Vec3; 4],
    ) -> Result<(), MeshError> {
        let Some(face) = element.face(direction) else {
            return Ok(());
        };
        let rotation = model.rotation;

        if let Some(cullface) = face.cullface {
            let offset = rotation_relative_offset(rotation, cullface.vector_f32());
            if self.context.relative_block(offset).culls_neighbor_faces {
                return Ok(());
            }
        }

        // Light comes from the block this face looks at.
        let light_offset = rotation_relative_offset(rotation, direction.vector_f32());
        let neighbor = self.context.relative_block(light_offset);
        let view = self.context.relative_view(light_offset);
        let sun_light = neighbor.passed_sun_light(&view);

        if sun_light == 0 && self.settings.exclude_faces_without_sunlight {
            tracing::trace!(?direction, "dropping face without sunlight");
            return Ok(());
        }

        let multiplier = self.settings.light_shade_multiplier;
        let light = if multiplier > 0.0 {
            let level = sun_light.max(neighbor.passed_block_light(&view));
            (f32::from(level) / f32::from(MAX_LIGHT) * multiplier + (1.0 - multiplier))
                .clamp(0.0, 1.0)
        } else {
            1.0
        };

        let texture = self
            .textures
            .get(face.texture)
            .ok_or(MeshError::UnknownTexture {
                texture: face.texture,
                direction,
            })?;

        let mut uvs = quad_from_rect(face.uv.x, face.uv.y, face.uv.z, face.uv.w);
        if model.uv_lock {
            uvs = rotate_continuous(uvs, uv_lock_angle(rotation, direction));
        }
        uvs = rotate_discrete(uvs, face.rotation);

        let ao = if self.settings.ambient_occlusion_enabled()
            && model.model.ambient_occlusion
            && element.ambient_occlusion
        {
            let strength = self.settings.ambient_occlusion_strength;
            corners.map(|corner| {
                occlusion_factor(
                    corner_occlusion(self.context, rotation, corner, direction),
                    strength,
                )
            })
        } else {
            [1.0; 4]
        };

        let tint = if face.tinted {
            self.tint.tint_color(self.context)
        } else {
            Vec3::ONE
        };
        let color = (tint * light).clamp(Vec3::ZERO, Vec3::ONE);
        let colors = ao.map(|factor| color * factor);

        let [c0, c1, c2, c3] = corners;
        mesh.add_triangle(Triangle {
            positions: [c0, c1, c2],
            uvs: [uvs[0], uvs[1], uvs[2]],
            colors: [colors[0], colors[1], colors[2]],
            texture: face.texture,
        });
        mesh.add_triangle(Triangle {
            positions: [c0, c2, c3],
            uvs: [uvs[0], uvs[2], uvs[3]],
            colors: [colors[0], colors[2], colors[3]],
            texture: face.texture,
        });

        // Map color: how much this face looks up once everything is rotated.
        let mut facing = rotation_relative(rotation, direction.vector_f32());
        if let Some(r) = element.active_rotation() {
            facing = from_angle_deg_axis(r.angle, r.axis.unit_vector()) * facing;
        }
        if facing.y > 0.0 {
            let c = texture.color * color.extend(1.0);
            mesh.merge_map_color(Vec4::new(c.x, c.y, c.z, c.w * facing.y));
        }

        Ok(())
    }
}
