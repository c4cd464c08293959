//! Neighbor queries around the voxel being meshed.
//!
//! The builders only see the world through [`BlockContext`]. World backends
//! implement it over whatever storage they use; [`NeighborhoodSnapshot`] is
//! an owned copy of the cells a single build can reach, suitable for sending
//! to worker threads without holding any locks.

use glam::IVec3;
use tessera_model::Direction;

// ---------------------------------------------------------------------------
// BlockProps
// ---------------------------------------------------------------------------

/// What the mesher needs to know about one neighboring voxel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockProps {
    /// Hides faces of adjacent blocks that declare it as their cullface.
    pub culls_neighbor_faces: bool,
    /// Darkens adjacent corners through ambient occlusion.
    pub occludes_neighbor_faces: bool,
    /// Stored sky light, `0..=15`.
    pub sun_light: u8,
    /// Stored block light, `0..=15`.
    pub block_light: u8,
}

impl BlockProps {
    /// A transparent, non-occluding cell with the given light levels.
    pub fn air(sun_light: u8, block_light: u8) -> Self {
        Self {
            culls_neighbor_faces: false,
            occludes_neighbor_faces: false,
            sun_light,
            block_light,
        }
    }

    /// A full opaque block. Opaque blocks store no light of their own.
    pub fn solid() -> Self {
        Self {
            culls_neighbor_faces: true,
            occludes_neighbor_faces: true,
            sun_light: 0,
            block_light: 0,
        }
    }

    /// Sky light seen through this block, where `view` is centered on it.
    pub fn passed_sun_light<C: BlockContext + ?Sized>(&self, view: &C) -> u8 {
        self.passed_light(view).0
    }

    /// Block light seen through this block, where `view` is centered on it.
    pub fn passed_block_light<C: BlockContext + ?Sized>(&self, view: &C) -> u8 {
        self.passed_light(view).1
    }

    /// Own light if any is stored, otherwise the brightest face-adjacent
    /// neighbor per channel.
    fn passed_light<C: BlockContext + ?Sized>(&self, view: &C) -> (u8, u8) {
        if self.sun_light > 0 || self.block_light > 0 {
            return (self.sun_light, self.block_light);
        }
        Direction::ALL
            .into_iter()
            .map(|dir| view.relative_block(dir.vector()))
            .fold((self.sun_light, self.block_light), |(sun, block), n| {
                (sun.max(n.sun_light), block.max(n.block_light))
            })
    }
}

// ---------------------------------------------------------------------------
// BlockContext
// ---------------------------------------------------------------------------

/// Read access to the blocks around a center voxel.
pub trait BlockContext {
    /// Properties of the block at `offset` from the center.
    fn relative_block(&self, offset: IVec3) -> BlockProps;

    /// A context re-centered on the block at `offset`.
    fn relative_view(&self, offset: IVec3) -> RelativeView<'_, Self>
    where
        Self: Sized,
    {
        RelativeView::new(self, offset)
    }
}

/// A [`BlockContext`] shifted by a fixed offset.
#[derive(Debug)]
pub struct RelativeView<'a, C: ?Sized> {
    inner: &'a C,
    offset: IVec3,
}

impl<'a, C: ?Sized> RelativeView<'a, C> {
    /// Re-centers `inner` on `offset`.
    pub fn new(inner: &'a C, offset: IVec3) -> Self {
        Self { inner, offset }
    }

    /// Offset of this view's center from the underlying context's center.
    pub fn offset(&self) -> IVec3 {
        self.offset
    }
}

impl<C: BlockContext + ?Sized> BlockContext for RelativeView<'_, C> {
    fn relative_block(&self, offset: IVec3) -> BlockProps {
        self.inner.relative_block(self.offset + offset)
    }
}

// ---------------------------------------------------------------------------
// NeighborhoodSnapshot
// ---------------------------------------------------------------------------

/// Furthest offset along any axis a single build reads: a diagonal neighbor
/// plus one more step for passed light.
pub const SNAPSHOT_RADIUS: i32 = 2;

const SIDE: usize = (2 * SNAPSHOT_RADIUS + 1) as usize;

/// Owned `5 × 5 × 5` grid of [`BlockProps`] centered on the voxel being
/// meshed. Offsets beyond [`SNAPSHOT_RADIUS`] read as unlit air.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborhoodSnapshot {
    /// Indexed by [`Self::index`]; x varies fastest, then z, then y.
    cells: Vec<BlockProps>,
    outside: BlockProps,
}

impl Default for NeighborhoodSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighborhoodSnapshot {
    /// Creates a snapshot where every cell is unlit air.
    pub fn new() -> Self {
        Self::filled(BlockProps::air(0, 0))
    }

    /// Creates a snapshot with every cell set to `props`.
    pub fn filled(props: BlockProps) -> Self {
        Self {
            cells: vec![props; SIDE * SIDE * SIDE],
            outside: BlockProps::air(0, 0),
        }
    }

    /// Overwrites the cell at `offset`. Offsets outside the snapshot are
    /// ignored with a warning.
    pub fn set(&mut self, offset: IVec3, props: BlockProps) {
        match Self::index(offset) {
            Some(i) => self.cells[i] = props,
            None => {
                tracing::warn!(
                    "NeighborhoodSnapshot::set out of range: ({}, {}, {})",
                    offset.x,
                    offset.y,
                    offset.z
                );
            }
        }
    }

    /// Builder form of [`Self::set`].
    pub fn with(mut self, offset: IVec3, props: BlockProps) -> Self {
        self.set(offset, props);
        self
    }

    /// Reads the cell at `offset`.
    pub fn get(&self, offset: IVec3) -> BlockProps {
        Self::index(offset).map_or(self.outside, |i| self.cells[i])
    }

    fn index(offset: IVec3) -> Option<usize> {
        if offset.abs().max_element() > SNAPSHOT_RADIUS {
            return None;
        }
        let p = (offset + IVec3::splat(SNAPSHOT_RADIUS)).as_uvec3();
        Some((p.y as usize * SIDE + p.z as usize) * SIDE + p.x as usize)
    }
}

impl BlockContext for NeighborhoodSnapshot {
    fn relative_block(&self, offset: IVec3) -> BlockProps {
        self.get(offset)
    }
}
