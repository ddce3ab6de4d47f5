//! Height scaling and elevation color bands.

use serde::{Deserialize, Serialize};

use crate::TerrainError;

/// A terrain color tier: vertices whose height fraction is at most
/// `threshold` (and above every earlier band's threshold) get `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    /// Upper bound of this band as a fraction of the maximum height, in `[0, 1]`.
    pub threshold: f32,
    /// Linear RGBA vertex color.
    pub color: [f32; 4],
}

impl ColorBand {
    pub fn new(threshold: f32, color: [f32; 4]) -> Self {
        Self { threshold, color }
    }
}

/// Parameters that turn raw samples into world heights and vertex colors.
///
/// `color_bands` is scanned in order; the first band whose threshold is at
/// least the vertex's height fraction wins, and the last band catches
/// anything above every threshold. The last band may use `f32::INFINITY` as
/// its threshold to make that explicit.
///
/// # Example
///
/// ```ignore
/// use bevy_heightmap_terrain::{ColorBand, TerrainConfig};
///
/// let config = TerrainConfig::new(
///     0.25,
///     vec![
///         ColorBand::new(0.3, [0.0, 0.2, 0.8, 1.0]),
///         ColorBand::new(1.0, [0.9, 0.9, 0.9, 1.0]),
///     ],
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// World units per sample step. Must be finite and positive.
    pub height_scale: f32,
    /// Bands sorted ascending by threshold. Must not be empty.
    pub color_bands: Vec<ColorBand>,
}

impl TerrainConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidConfiguration`] when [`validate`]
    /// rejects the values.
    ///
    /// [`validate`]: TerrainConfig::validate
    pub fn new(height_scale: f32, color_bands: Vec<ColorBand>) -> Result<Self, TerrainError> {
        let config = Self {
            height_scale,
            color_bands,
        };
        config.validate()?;
        Ok(config)
    }

    /// Grassland preset: gentle relief, green lowlands, brown slopes and
    /// snow-capped peaks.
    pub fn meadow() -> Self {
        Self {
            height_scale: 0.10,
            color_bands: vec![
                ColorBand::new(0.5, [0.0, 1.0, 0.0, 1.0]),
                ColorBand::new(0.8, [0.55, 0.27, 0.07, 1.0]),
                ColorBand::new(1.0, [1.0, 1.0, 1.0, 1.0]),
            ],
        }
    }

    /// Hellscape preset: tall relief, red lowlands, dark crimson slopes and
    /// grey ash peaks.
    pub fn nether() -> Self {
        Self {
            height_scale: 0.60,
            color_bands: vec![
                ColorBand::new(0.5, [1.0, 0.0, 0.0, 1.0]),
                ColorBand::new(0.8, [0.47, 0.03, 0.04, 1.0]),
                ColorBand::new(1.0, [0.5, 0.5, 0.5, 1.0]),
            ],
        }
    }

    /// Parses and validates a configuration from TOML.
    ///
    /// ```toml
    /// height_scale = 0.6
    ///
    /// [[color_bands]]
    /// threshold = 0.5
    /// color = [1.0, 0.0, 0.0, 1.0]
    ///
    /// [[color_bands]]
    /// threshold = 1.0
    /// color = [0.5, 0.5, 0.5, 1.0]
    /// ```
    ///
    /// # Errors
    ///
    /// [`TerrainError::ConfigParse`] for malformed TOML, otherwise whatever
    /// [`validate`](TerrainConfig::validate) reports.
    pub fn from_toml_str(source: &str) -> Result<Self, TerrainError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the height scale and color bands.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidConfiguration`] if the height scale is
    /// not finite and positive, the band list is empty, a threshold is NaN
    /// or outside `[0, 1]` (the last band may also be `+∞`), or thresholds
    /// decrease.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if !self.height_scale.is_finite() || self.height_scale <= 0.0 {
            return Err(TerrainError::InvalidConfiguration(format!(
                "height_scale must be finite and positive (got {})",
                self.height_scale
            )));
        }
        if self.color_bands.is_empty() {
            return Err(TerrainError::InvalidConfiguration(
                "color_bands must not be empty".into(),
            ));
        }

        let last = self.color_bands.len() - 1;
        for (i, band) in self.color_bands.iter().enumerate() {
            let t = band.threshold;
            let in_range = (0.0..=1.0).contains(&t);
            let open_ceiling = i == last && t == f32::INFINITY;
            if !in_range && !open_ceiling {
                return Err(TerrainError::InvalidConfiguration(format!(
                    "color band {i} threshold {t} is outside [0, 1]"
                )));
            }
        }

        if let Some(i) = self
            .color_bands
            .windows(2)
            .position(|pair| pair[1].threshold < pair[0].threshold)
        {
            return Err(TerrainError::InvalidConfiguration(format!(
                "color band thresholds must be ascending (band {} < band {i})",
                i + 1
            )));
        }

        Ok(())
    }

    /// Index of the band selected for `height_fraction`.
    ///
    /// Returns `None` only when there are no bands.
    pub fn band_index(&self, height_fraction: f32) -> Option<usize> {
        self.color_bands
            .iter()
            .position(|band| band.threshold >= height_fraction)
            .or_else(|| self.color_bands.len().checked_sub(1))
    }

    /// Color selected for `height_fraction`, or `None` when there are no bands.
    pub fn color_for(&self, height_fraction: f32) -> Option<[f32; 4]> {
        self.band_index(height_fraction)
            .map(|i| self.color_bands[i].color)
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self::meadow()
    }
}
