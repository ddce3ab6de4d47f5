//! Avian3D physics collider generation from [`ElevationGrid`] data.
//!
//! Provides [`build_heightfield_collider`] which converts an elevation grid
//! into an Avian3D `Collider::heightfield` matching the render mesh's
//! heights. A heightfield is much cheaper than a `trimesh` for ray-casts and
//! contact queries on static terrain.

use avian3d::prelude::Collider;
use bevy::prelude::*;

use crate::{ElevationGrid, TerrainConfig, TerrainError};

/// Builds an Avian3D `Collider::heightfield` from an [`ElevationGrid`].
///
/// Heights are `sample * config.height_scale`, the same as the vertices
/// produced by [`TerrainMeshBuilder`](crate::TerrainMeshBuilder). The
/// collider is centered at the origin of its local space, spanning
/// `[-(width-1)/2, (width-1)/2]` × `[-(height-1)/2, (height-1)/2]` in the XZ
/// plane, while the mesh starts at `(0, 0, 0)`. Offset the collider entity by
/// `((width-1)/2, 0, (height-1)/2)` to align them.
///
/// # Errors
///
/// [`TerrainError::InvalidGrid`] if the grid is smaller than 2×2, and
/// [`TerrainError::InvalidConfiguration`] if `config` fails validation.
pub fn build_heightfield_collider(
    grid: &ElevationGrid,
    config: &TerrainConfig,
) -> Result<Collider, TerrainError> {
    config.validate()?;

    let w = grid.width();
    let h = grid.height();
    if w < 2 || h < 2 {
        return Err(TerrainError::InvalidGrid(format!(
            "a heightfield collider needs at least 2×2 samples (got {w}×{h})"
        )));
    }

    // Avian's 3D heightfield expects `heights[row][col]` where:
    //   rows  → subdivisions along X axis (width)
    //   cols  → subdivisions along Z axis (height)
    // ElevationGrid stores samples[z * width + x], so we transpose accordingly.
    let heights: Vec<Vec<f32>> = (0..w)
        .map(|x| {
            (0..h)
                .map(|z| grid.get(x, z) as f32 * config.height_scale)
                .collect()
        })
        .collect();

    // Y scale = 1.0 because heights are already in world units.
    let scale = Vec3::new((w - 1) as f32, 1.0, (h - 1) as f32);

    Ok(Collider::heightfield(heights, scale))
}
