//! Bevy [`Mesh`] generation from [`TerrainMesh`] data.
//!
//! Converts a [`TerrainMesh`] into a Bevy [`Mesh`] with:
//! - `TriangleList` topology and `u32` indices
//! - Elevation-banded vertex colors (`ATTRIBUTE_COLOR`)
//! - Smooth per-vertex normals, area-weighted or Sobel-filtered
//! - Tiling UV coordinates (grid position scaled by `uv_tile_size`)

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::TerrainMesh;

/// How per-vertex normals are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalMethod {
    /// Average of adjacent face normals weighted by triangle area.
    ///
    /// Matches the rendered triangles exactly, which suits jagged terrain.
    #[default]
    AreaWeighted,
    /// 3×3 Sobel gradient of the height field, clamped at the borders.
    ///
    /// Smoother on noisy heightmaps, since each normal sees a wider
    /// neighbourhood than its adjacent triangles.
    Sobel,
}

/// Converts a [`TerrainMesh`] into a Bevy [`Mesh`].
///
/// Positions and colors are copied as-is. UVs are grid coordinates divided
/// by `uv_tile_size`: `u = x / uv_tile_size`, `v = z / uv_tile_size`.
/// Setting `uv_tile_size = 1.0` tiles a texture once per cell; `10.0` tiles
/// it once every ten cells.
///
/// # Example
///
/// ```ignore
/// use bevy_heightmap_terrain::{build_terrain, ElevationGrid, TerrainConfig, TerrainRenderMeshBuilder};
///
/// let grid = ElevationGrid::from_fn(64, 64, |x, z| (x + z) as u8)?;
/// let terrain = build_terrain(&grid, &TerrainConfig::nether())?;
/// let mesh = TerrainRenderMeshBuilder::new()
///     .with_uv_tile_size(10.0)
///     .build(&terrain);
/// ```
#[derive(Debug, Clone)]
pub struct TerrainRenderMeshBuilder {
    uv_tile_size: f32,
    normal_method: NormalMethod,
}

impl Default for TerrainRenderMeshBuilder {
    fn default() -> Self {
        Self {
            uv_tile_size: 1.0,
            normal_method: NormalMethod::default(),
        }
    }
}

impl TerrainRenderMeshBuilder {
    /// Creates a new builder with default settings (`uv_tile_size = 1.0`,
    /// area-weighted normals).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many grid cells one UV tile spans.
    ///
    /// Clamped to a positive minimum to avoid division by zero.
    pub fn with_uv_tile_size(mut self, size: f32) -> Self {
        self.uv_tile_size = size.max(f32::EPSILON);
        self
    }

    pub fn with_normal_method(mut self, method: NormalMethod) -> Self {
        self.normal_method = method;
        self
    }

    /// Builds the render mesh.
    ///
    /// Produces a `TriangleList` mesh with positions, colors, normals and UV_0.
    pub fn build(&self, terrain: &TerrainMesh) -> Mesh {
        let uvs: Vec<[f32; 2]> = terrain
            .vertices()
            .iter()
            .map(|p| [p[0] / self.uv_tile_size, p[2] / self.uv_tile_size])
            .collect();

        let normals = match self.normal_method {
            NormalMethod::AreaWeighted => area_weighted_normals(terrain),
            NormalMethod::Sobel => sobel_normals(terrain),
        };

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, terrain.vertices().to_vec());
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, terrain.colors().to_vec());
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(terrain.indices().to_vec()));
        mesh
    }
}

/// Accumulates each triangle's unnormalized cross product (proportional to
/// its area) at its three vertices, then normalizes.
fn area_weighted_normals(terrain: &TerrainMesh) -> Vec<[f32; 3]> {
    let mut normals: Vec<Vec3> = vec![Vec3::ZERO; terrain.vertex_count()];

    for [i0, i1, i2] in terrain.triangles() {
        let [i0, i1, i2] = [i0 as usize, i1 as usize, i2 as usize];
        let p0 = Vec3::from(terrain.vertices()[i0]);
        let p1 = Vec3::from(terrain.vertices()[i1]);
        let p2 = Vec3::from(terrain.vertices()[i2]);
        let face_normal = (p1 - p0).cross(p2 - p0);
        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    normals
        .iter()
        .map(|n| {
            let len = n.length();
            // Degenerate vertex (no triangles, e.g. a single-row grid): +Y.
            if len > f32::EPSILON { (*n / len).into() } else { [0.0, 1.0, 0.0] }
        })
        .collect()
}

/// Sobel-filtered normals over the vertex grid.
///
/// Each side of the kernel weighs its three neighbours 1-2-1 (sum 4), and the
/// two sides sit two grid units apart, so dividing by 8 yields the slope
/// per unit.
fn sobel_normals(terrain: &TerrainMesh) -> Vec<[f32; 3]> {
    let w = terrain.width() as isize;
    let d = terrain.depth() as isize;
    let height_at = |x: isize, z: isize| -> f32 {
        let x = x.clamp(0, w - 1) as usize;
        let z = z.clamp(0, d - 1) as usize;
        terrain.vertices()[z * terrain.width() + x][1]
    };

    let mut normals = Vec::with_capacity(terrain.vertex_count());
    for z in 0..d {
        for x in 0..w {
            let gx = (height_at(x + 1, z - 1) + 2.0 * height_at(x + 1, z) + height_at(x + 1, z + 1))
                - (height_at(x - 1, z - 1) + 2.0 * height_at(x - 1, z) + height_at(x - 1, z + 1));
            let gz = (height_at(x - 1, z + 1) + 2.0 * height_at(x, z + 1) + height_at(x + 1, z + 1))
                - (height_at(x - 1, z - 1) + 2.0 * height_at(x, z - 1) + height_at(x + 1, z - 1));
            let n = Vec3::new(-gx / 8.0, 1.0, -gz / 8.0).normalize();
            normals.push(n.into());
        }
    }
    normals
}
