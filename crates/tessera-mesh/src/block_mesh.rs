//! Output mesh of a block-model build: flat triangles plus one aggregated
//! top-down map color.

use glam::{Mat3, Quat, Vec2, Vec3, Vec4};
use tessera_model::TextureId;

/// A single textured, vertex-colored triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Corner positions in block space.
    pub positions: [Vec3; 3],
    /// Texture coordinates per corner.
    pub uvs: [Vec2; 3],
    /// Shaded RGB per corner, each component in `[0, 1]`.
    pub colors: [Vec3; 3],
    /// Texture drawn on the triangle.
    pub texture: TextureId,
}

impl Triangle {
    /// Right-handed unit normal, or zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.positions;
        (b - a).cross(c - a).normalize_or_zero()
    }
}

/// Triangles produced for one block, exclusively owned by the build that
/// created them.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockMesh {
    /// Triangles in emission order.
    pub triangles: Vec<Triangle>,
    /// Aggregated top-down color. Starts fully transparent.
    pub map_color: Vec4,
}

impl Default for BlockMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            map_color: Vec4::ZERO,
        }
    }

    /// Appends a triangle.
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Appends `other`'s triangles and blends its map color over this one.
    pub fn merge(&mut self, other: BlockMesh) {
        self.triangles.extend(other.triangles);
        self.merge_map_color(other.map_color);
    }

    /// Composites `color` on top of the current map color.
    pub fn merge_map_color(&mut self, color: Vec4) {
        self.map_color = blend_colors(color, self.map_color);
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for triangle in &mut self.triangles {
            for p in &mut triangle.positions {
                *p += offset;
            }
        }
    }

    /// Rotates every vertex about the origin.
    pub fn rotate(&mut self, rotation: Quat) {
        for triangle in &mut self.triangles {
            for p in &mut triangle.positions {
                *p = rotation * *p;
            }
        }
    }

    /// Applies a linear transform to every vertex.
    pub fn transform(&mut self, matrix: Mat3) {
        for triangle in &mut self.triangles {
            for p in &mut triangle.positions {
                *p = matrix * *p;
            }
        }
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if no triangle was emitted.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Source-over compositing of `top` onto `bottom`, with straight alpha.
pub fn blend_colors(top: Vec4, bottom: Vec4) -> Vec4 {
    if top.w > 0.0 && bottom.w > 0.0 {
        let a = 1.0 - (1.0 - top.w) * (1.0 - bottom.w);
        let rgb = top.truncate() * (top.w / a) + bottom.truncate() * (bottom.w * (1.0 - top.w) / a);
        rgb.extend(a)
    } else if bottom.w > 0.0 {
        bottom
    } else {
        top
    }
}
