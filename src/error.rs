//! Error type shared by the terrain builder and its Bevy adapters.

use thiserror::Error;

/// Errors reported while building terrain from elevation data.
///
/// Every fallible operation in this crate either returns a complete result
/// or one of these variants; no partially built mesh is ever handed out.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// The color bands or height scale are unusable.
    #[error("invalid terrain configuration: {0}")]
    InvalidConfiguration(String),

    /// The elevation grid has a zero dimension or mismatched sample data.
    #[error("invalid elevation grid: {0}")]
    InvalidGrid(String),

    /// A Bevy `Image` could not be read as elevation data.
    #[error("unsupported heightmap image: {0}")]
    UnsupportedImage(String),

    /// A TOML terrain configuration is malformed.
    #[error("failed to parse terrain configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
