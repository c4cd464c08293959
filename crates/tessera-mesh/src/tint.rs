//! Context-dependent tint colors for faces flagged as tinted (grass, foliage,
//! water).

use glam::Vec3;

use crate::neighborhood::BlockContext;

/// Supplies the RGB multiplier for tinted faces.
pub trait TintSource {
    /// Tint for the block at the center of `context`, each channel in `[0, 1]`.
    fn tint_color(&self, context: &dyn BlockContext) -> Vec3;
}

impl<F> TintSource for F
where
    F: Fn(&dyn BlockContext) -> Vec3,
{
    fn tint_color(&self, context: &dyn BlockContext) -> Vec3 {
        self(context)
    }
}

/// The same tint everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTint(pub Vec3);

impl Default for FixedTint {
    fn default() -> Self {
        Self(Vec3::ONE)
    }
}

impl TintSource for FixedTint {
    fn tint_color(&self, _context: &dyn BlockContext) -> Vec3 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::{BlockProps, NeighborhoodSnapshot};
    use glam::IVec3;

    #[test]
    fn test_fixed_tint_ignores_context() {
        let tint = FixedTint(Vec3::new(0.5, 0.8, 0.3));
        assert_eq!(tint.tint_color(&NeighborhoodSnapshot::new()), tint.0);
        assert_eq!(FixedTint::default().0, Vec3::ONE);
    }

    #[test]
    fn test_closure_reads_context() {
        let tint = |ctx: &dyn BlockContext| {
            if ctx.relative_block(IVec3::NEG_Y).culls_neighbor_faces {
                Vec3::new(0.4, 0.7, 0.2)
            } else {
                Vec3::ONE
            }
        };
        let grounded = NeighborhoodSnapshot::new().with(IVec3::NEG_Y, BlockProps::solid());
        assert_eq!(tint.tint_color(&grounded), Vec3::new(0.4, 0.7, 0.2));
        assert_eq!(tint.tint_color(&NeighborhoodSnapshot::new()), Vec3::ONE);
    }
}
