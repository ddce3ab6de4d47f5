//! Row-major grid of raw 8-bit elevation samples.

use crate::TerrainError;

/// A `width × height` grid of unsigned byte elevation samples.
///
/// Samples are stored row-major: the sample at column `x`, row `z` lives at
/// `z * width + x`. A sample of `0` is the lowest possible elevation and
/// `255` the highest; scaling to world units is the job of
/// [`TerrainConfig::height_scale`](crate::TerrainConfig::height_scale).
///
/// Construction guarantees both dimensions are at least 1, the sample count
/// matches the dimensions, and every vertex index fits in a `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationGrid {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl ElevationGrid {
    /// Creates a grid from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidGrid`] if either dimension is zero, if
    /// `samples.len() != width * height`, or if the grid has more vertices
    /// than a `u32` index buffer can address.
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, TerrainError> {
        let len = checked_len(width, height)?;
        if samples.len() != len {
            return Err(TerrainError::InvalidGrid(format!(
                "expected {len} samples for a {width}×{height} grid, got {}",
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Creates a grid from an RGBA8 pixel buffer, using the red channel of
    /// each pixel as the elevation sample.
    ///
    /// This is the layout produced by browser canvases and most image
    /// decoders: four bytes per pixel, rows top to bottom.
    ///
    /// # Errors
    ///
    /// Same as [`ElevationGrid::new`], and also when `rgba.len()` is not
    /// exactly `width * height * 4`.
    pub fn from_rgba8(width: usize, height: usize, rgba: &[u8]) -> Result<Self, TerrainError> {
        Self::from_strided(width, height, rgba, 4)
    }

    /// Creates a grid by evaluating `f(x, z)` for every position.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidGrid`] for the same dimension problems
    /// as [`ElevationGrid::new`].
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> u8,
    ) -> Result<Self, TerrainError> {
        let len = checked_len(width, height)?;
        let mut samples = Vec::with_capacity(len);
        for z in 0..height {
            for x in 0..width {
                samples.push(f(x, z));
            }
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Reads the first byte of every `stride`-byte pixel.
    pub(crate) fn from_strided(
        width: usize,
        height: usize,
        pixels: &[u8],
        stride: usize,
    ) -> Result<Self, TerrainError> {
        let len = checked_len(width, height)?;
        let expected = len.checked_mul(stride).ok_or_else(|| {
            TerrainError::InvalidGrid(format!("{width}×{height} pixel buffer size overflows"))
        })?;
        if pixels.len() != expected {
            return Err(TerrainError::InvalidGrid(format!(
                "expected {expected} bytes ({stride} per pixel) for a {width}×{height} image, got {}",
                pixels.len()
            )));
        }
        let samples = pixels.chunks_exact(stride).map(|px| px[0]).collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Number of columns (samples along X).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (samples along Z).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of samples, `width * height`.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; a constructed grid holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the sample at column `x`, row `z`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `z >= height`.
    pub fn get(&self, x: usize, z: usize) -> u8 {
        assert!(
            x < self.width && z < self.height,
            "sample ({x}, {z}) out of bounds for {}×{} grid",
            self.width,
            self.height
        );
        self.samples[z * self.width + x]
    }

    /// Row-major sample data.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, TerrainError> {
    if width == 0 || height == 0 {
        return Err(TerrainError::InvalidGrid(format!(
            "dimensions must be non-zero (got {width}×{height})"
        )));
    }
    // Vertex indices are emitted as u32, so the last index must be representable.
    width
        .checked_mul(height)
        .filter(|&len| len - 1 <= u32::MAX as usize)
        .ok_or_else(|| {
            TerrainError::InvalidGrid(format!(
                "{width}×{height} grid exceeds the u32 vertex index range"
            ))
        })
}

