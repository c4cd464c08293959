//! Cuboid elements and their per-face definitions.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::direction::{Axis, Direction};
use crate::texture::TextureId;

/// How one side of an element is textured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceDefinition {
    /// Texture drawn on the face.
    pub texture: TextureId,
    /// UV rectangle `(x1, y1, x2, y2)` in 0–16 texture space.
    pub uv: Vec4,
    /// Neighbor that hides this face when it culls.
    #[serde(default)]
    pub cullface: Option<Direction>,
    /// Texture rotation in degrees, a multiple of 90.
    #[serde(default)]
    pub rotation: i32,
    /// Whether the face is multiplied by the context tint color.
    #[serde(default)]
    pub tinted: bool,
}

impl FaceDefinition {
    /// A face covering the full texture, untinted, unrotated, never culled.
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            uv: Vec4::new(0.0, 0.0, 16.0, 16.0),
            cullface: None,
            rotation: 0,
            tinted: false,
        }
    }

    /// Sets the UV rectangle.
    pub fn with_uv(mut self, uv: Vec4) -> Self {
        self.uv = uv;
        self
    }

    /// Sets the cull direction.
    pub fn with_cullface(mut self, cullface: Direction) -> Self {
        self.cullface = Some(cullface);
        self
    }

    /// Sets the texture rotation in degrees.
    pub fn with_rotation(mut self, rotation: i32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Marks the face as tinted.
    pub fn tinted(mut self) -> Self {
        self.tinted = true;
        self
    }
}

/// Rotation of a single element about an arbitrary origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRotation {
    /// Pivot in 0–16 space.
    pub origin: Vec3,
    /// Rotation axis.
    pub axis: Axis,
    /// Angle in degrees.
    pub angle: f32,
    /// Stretch the rotated element so it still spans the block.
    #[serde(default)]
    pub rescale: bool,
}

impl ElementRotation {
    /// Whether the rotation changes any geometry.
    pub fn is_active(&self) -> bool {
        self.angle != 0.0
    }
}

/// One cuboid of a block model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// First corner in 0–16 space.
    pub from: Vec3,
    /// Opposite corner in 0–16 space. Either corner may hold the minimum.
    pub to: Vec3,
    /// Face slots indexed by [`Direction::index`].
    #[serde(default)]
    pub faces: [Option<FaceDefinition>; 6],
    /// Optional element-local rotation.
    #[serde(default)]
    pub rotation: Option<ElementRotation>,
    /// Whether corners of this element receive ambient occlusion.
    #[serde(default = "default_true")]
    pub ambient_occlusion: bool,
}

fn default_true() -> bool {
    true
}

impl Element {
    /// An element spanning `from..to` with no faces.
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self {
            from,
            to,
            faces: Default::default(),
            rotation: None,
            ambient_occlusion: true,
        }
    }

    /// The full 16³ cube.
    pub fn full_cube() -> Self {
        Self::new(Vec3::ZERO, Vec3::splat(16.0))
    }

    /// Returns the face defined for `direction`, if any.
    pub fn face(&self, direction: Direction) -> Option<&FaceDefinition> {
        self.faces[direction.index()].as_ref()
    }

    /// Sets the face for `direction`.
    pub fn with_face(mut self, direction: Direction, face: FaceDefinition) -> Self {
        self.faces[direction.index()] = Some(face);
        self
    }

    /// Sets the same face definition on all six sides, with each side's
    /// UV taken from [`Self::default_uv`].
    pub fn with_all_faces(mut self, face: FaceDefinition) -> Self {
        for dir in Direction::ALL {
            let uv = self.default_uv(dir);
            self.faces[dir.index()] = Some(face.clone().with_uv(uv));
        }
        self
    }

    /// Sets the element rotation.
    pub fn with_rotation(mut self, rotation: ElementRotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// The rotation, if it has a non-zero angle.
    pub fn active_rotation(&self) -> Option<&ElementRotation> {
        self.rotation.as_ref().filter(|r| r.is_active())
    }

    /// UV rectangle implied for a face that omits `uv`: the element's extent
    /// projected onto the face plane, with V running top-down.
    pub fn default_uv(&self, direction: Direction) -> Vec4 {
        let from = self.from.min(self.to);
        let to = self.from.max(self.to);
        match direction {
            Direction::Down => Vec4::new(from.x, 16.0 - to.z, to.x, 16.0 - from.z),
            Direction::Up => Vec4::new(from.x, from.z, to.x, to.z),
            Direction::North => Vec4::new(16.0 - to.x, 16.0 - to.y, 16.0 - from.x, 16.0 - from.y),
            Direction::South => Vec4::new(from.x, 16.0 - to.y, to.x, 16.0 - from.y),
            Direction::West => Vec4::new(from.z, 16.0 - to.y, to.z, 16.0 - from.y),
            Direction::East => Vec4::new(16.0 - to.z, 16.0 - to.y, 16.0 - from.z, 16.0 - from.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cube_default_uv_covers_texture() {
        let cube = Element::full_cube();
        for dir in Direction::ALL {
            assert_eq!(cube.default_uv(dir), Vec4::new(0.0, 0.0, 16.0, 16.0));
        }
    }

    #[test]
    fn test_slab_side_uv_uses_lower_half() {
        let slab = Element::new(Vec3::ZERO, Vec3::new(16.0, 8.0, 16.0));
        assert_eq!(
            slab.default_uv(Direction::North),
            Vec4::new(0.0, 8.0, 16.0, 16.0)
        );
        assert_eq!(slab.default_uv(Direction::Up), Vec4::new(0.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn test_default_uv_tolerates_swapped_corners() {
        let a = Element::new(Vec3::new(2.0, 0.0, 4.0), Vec3::new(14.0, 10.0, 12.0));
        let b = Element::new(a.to, a.from);
        for dir in Direction::ALL {
            assert_eq!(a.default_uv(dir), b.default_uv(dir));
        }
    }

    #[test]
    fn test_with_face_fills_slot() {
        let element = Element::full_cube().with_face(
            Direction::Up,
            FaceDefinition::new(TextureId(3)).tinted(),
        );
        assert!(element.face(Direction::Up).is_some_and(|f| f.tinted));
        assert!(element.face(Direction::Down).is_none());
    }

    #[test]
    fn test_zero_angle_rotation_is_inactive() {
        let element = Element::full_cube().with_rotation(ElementRotation {
            origin: Vec3::splat(8.0),
            axis: Axis::Y,
            angle: 0.0,
            rescale: true,
        });
        assert!(element.active_rotation().is_none());
    }

    #[test]
    fn test_element_deserializes_from_ron() {
        let src = r#"(
            from: (0.0, 0.0, 0.0),
            to: (16.0, 8.0, 16.0),
            faces: (None, Some((texture: (2), uv: (0.0, 0.0, 16.0, 16.0), cullface: Some(up), tinted: true)), None, None, None, None),
        )"#;
        let element: Element = ron::from_str(src).unwrap();
        let up = element.face(Direction::Up).unwrap();
        assert_eq!(up.texture, TextureId(2));
        assert_eq!(up.cullface, Some(Direction::Up));
        assert!(up.tinted);
        assert_eq!(up.rotation, 0);
        assert!(element.ambient_occlusion);
        assert!(element.rotation.is_none());
    }
}
