//! Block models and their placement-specific transforms.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// An ordered list of cuboid elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Elements in authoring order.
    pub elements: Vec<Element>,
    /// Model-wide ambient occlusion switch; elements can further opt out.
    #[serde(default = "default_true")]
    pub ambient_occlusion: bool,
}

fn default_true() -> bool {
    true
}

impl Model {
    /// Creates a model with ambient occlusion enabled.
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ambient_occlusion: true,
        }
    }
}

/// Whole-model rotation in degrees about X then Y.
///
/// Values are multiples of 90; [`ModelRotation::new`] folds them into
/// `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRotation {
    /// Rotation about the X axis in degrees.
    pub x: i32,
    /// Rotation about the Y axis in degrees.
    pub y: i32,
}

impl ModelRotation {
    /// No rotation.
    pub const IDENTITY: Self = Self { x: 0, y: 0 };

    /// Creates a rotation, normalising both angles into `[0, 360)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x: x.rem_euclid(360),
            y: y.rem_euclid(360),
        }
    }

    /// Whether both angles are zero.
    pub fn is_identity(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// A model placed with a particular rotation; the unit of work for a build.
///
/// The underlying [`Model`] is shared between all placements that use it.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformedModel {
    /// The shared model.
    pub model: Arc<Model>,
    /// Whole-model rotation.
    pub rotation: ModelRotation,
    /// Keep textures world-aligned when the model is rotated.
    pub uv_lock: bool,
}

impl TransformedModel {
    /// An unrotated placement.
    pub fn new(model: Arc<Model>) -> Self {
        Self {
            model,
            rotation: ModelRotation::IDENTITY,
            uv_lock: false,
        }
    }

    /// Sets the whole-model rotation.
    pub fn rotated(mut self, x: i32, y: i32) -> Self {
        self.rotation = ModelRotation::new(x, y);
        self
    }

    /// Enables UV-lock.
    pub fn uv_locked(mut self) -> Self {
        self.uv_lock = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_normalises_into_range() {
        assert_eq!(ModelRotation::new(360, -90), ModelRotation { x: 0, y: 270 });
        assert_eq!(ModelRotation::new(450, 720), ModelRotation { x: 90, y: 0 });
    }

    #[test]
    fn test_identity_detection() {
        assert!(ModelRotation::IDENTITY.is_identity());
        assert!(ModelRotation::new(360, 0).is_identity());
        assert!(!ModelRotation::new(0, 90).is_identity());
    }

    #[test]
    fn test_placements_share_model() {
        let model = Arc::new(Model::new(vec![Element::full_cube()]));
        let a = TransformedModel::new(Arc::clone(&model));
        let b = TransformedModel::new(Arc::clone(&model)).rotated(0, 90).uv_locked();
        assert!(Arc::ptr_eq(&a.model, &b.model));
        assert!(b.uv_lock);
        assert_eq!(b.rotation.y, 90);
    }
}
