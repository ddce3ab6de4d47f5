//! Heightmap-to-mesh conversion.
//!
//! Turns an [`ElevationGrid`] into a [`TerrainMesh`]: one vertex per sample,
//! two triangles per grid cell, and a vertex color picked from the
//! [`TerrainConfig`] color bands. The output is renderer-agnostic; see
//! [`crate::mesher`] for the Bevy conversion, which is also where normals
//! are computed.

use bevy::log::debug;

use crate::{ElevationGrid, TerrainConfig, TerrainError};

/// Largest raw sample value; height fractions are normalized against it.
const MAX_SAMPLE: f32 = u8::MAX as f32;

/// Indexed triangle mesh with per-vertex colors.
///
/// Vertices are laid out row-major, so the vertex for grid column `x` and
/// row `z` is at index `z * width + x`. `colors` is aligned 1:1 with
/// `vertices`, and `indices` holds triangle triples.
///
/// Only [`TerrainMeshBuilder::build`] creates meshes, so `width * depth`
/// always equals the vertex count and every index addresses a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    width: usize,
    depth: usize,
    vertices: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    /// Number of vertex columns (grid width).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of vertex rows (grid height).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `(x, y, z)` positions in grid units, `y` already height-scaled.
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Linear RGBA per vertex.
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Triangle list, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Position of the vertex at grid column `x`, row `z`.
    pub fn position(&self, x: usize, z: usize) -> Option<[f32; 3]> {
        if x >= self.width || z >= self.depth {
            return None;
        }
        self.vertices.get(z * self.width + x).copied()
    }
}

/// Builds [`TerrainMesh`]es from elevation grids with a fixed configuration.
///
/// The builder holds no state between calls; one builder can be reused for
/// any number of grids, from any number of threads.
///
/// # Example
///
/// ```ignore
/// use bevy_heightmap_terrain::{ElevationGrid, TerrainConfig, TerrainMeshBuilder};
///
/// let grid = ElevationGrid::new(2, 2, vec![0, 128, 255, 64])?;
/// let mesh = TerrainMeshBuilder::new(TerrainConfig::meadow()).build(&grid)?;
/// assert_eq!(mesh.indices(), vec![0, 2, 1, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TerrainMeshBuilder {
    config: TerrainConfig,
}

impl TerrainMeshBuilder {
    pub fn new(config: TerrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Converts `grid` into an indexed, vertex-colored triangle mesh.
    ///
    /// A grid with a single row or column yields vertices but no triangles.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidConfiguration`] if the configuration
    /// does not pass [`TerrainConfig::validate`].
    pub fn build(&self, grid: &ElevationGrid) -> Result<TerrainMesh, TerrainError> {
        self.config.validate()?;

        let w = grid.width();
        let h = grid.height();
        let scale = self.config.height_scale;
        let palette = self.palette();

        let vertex_count = w * h;
        let mut vertices: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
        let mut colors: Vec<[f32; 4]> = Vec::with_capacity(vertex_count);

        for z in 0..h {
            for x in 0..w {
                let sample = grid.get(x, z);
                vertices.push([x as f32, sample as f32 * scale, z as f32]);
                colors.push(palette[sample as usize]);
            }
        }

        // Each cell (x, z) → (x+1, z+1) emits two triangles:
        //   tl──tr
        //   │╲  │     Triangle 1: tl, bl, tr
        //   │ ╲ │     Triangle 2: tr, bl, br
        //   bl──br
        let cell_count = w.saturating_sub(1) * h.saturating_sub(1);
        let mut indices: Vec<u32> = Vec::with_capacity(cell_count * 6);

        for z in 0..h.saturating_sub(1) {
            for x in 0..w.saturating_sub(1) {
                let tl = (z * w + x) as u32;
                let tr = tl + 1;
                let bl = ((z + 1) * w + x) as u32;
                let br = bl + 1;

                indices.extend_from_slice(&[tl, bl, tr]);
                indices.extend_from_slice(&[tr, bl, br]);
            }
        }

        debug!(
            "built {}×{} terrain mesh: {} vertices, {} triangles",
            w,
            h,
            vertices.len(),
            indices.len() / 3
        );

        Ok(TerrainMesh {
            width: w,
            depth: h,
            vertices,
            colors,
            indices,
        })
    }

    /// Resolves the band color for every possible sample value.
    ///
    /// The height fraction of a sample depends only on the sample itself
    /// (`y / (255 * scale) == s / 255`), so 256 lookups cover the whole grid.
    /// The config must already be validated, which guarantees a band for
    /// every fraction.
    fn palette(&self) -> Vec<[f32; 4]> {
        (0..=u8::MAX)
            .filter_map(|sample| self.config.color_for(sample as f32 / MAX_SAMPLE))
            .collect()
    }
}

/// Builds a terrain mesh from `grid` using `config`.
///
/// Shorthand for `TerrainMeshBuilder::new(config.clone()).build(grid)`.
pub fn build_terrain(
    grid: &ElevationGrid,
    config: &TerrainConfig,
) -> Result<TerrainMesh, TerrainError> {
    TerrainMeshBuilder::new(config.clone()).build(grid)
}
