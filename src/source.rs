//! Bevy [`Image`] to [`ElevationGrid`] conversion.
//!
//! Heightmaps are usually authored as grayscale PNGs, which Bevy decodes to
//! RGBA8. Only the red channel is read; single-channel `R8Unorm` textures
//! are accepted as well.

use bevy::log::debug;
use bevy::prelude::*;
use bevy::render::render_resource::TextureFormat;

use crate::{ElevationGrid, TerrainError};

/// Reads a decoded Bevy [`Image`] as elevation samples.
///
/// The image must be CPU-accessible (its `data` must still be present) and
/// use one of `Rgba8Unorm`, `Rgba8UnormSrgb` or `R8Unorm`.
///
/// # Errors
///
/// Returns [`TerrainError::UnsupportedImage`] for other texture formats or
/// images without pixel data, and [`TerrainError::InvalidGrid`] when the
/// image is empty or its data does not match its size.
///
/// # Example
///
/// ```ignore
/// use bevy_heightmap_terrain::{build_terrain, elevation_grid_from_image, TerrainConfig};
///
/// fn spawn_terrain(images: Res<Assets<Image>>, heightmap: Res<HeightmapHandle>) {
///     let Some(image) = images.get(&heightmap.0) else { return };
///     let grid = elevation_grid_from_image(image)?;
///     let terrain = build_terrain(&grid, &TerrainConfig::meadow())?;
/// }
/// ```
pub fn elevation_grid_from_image(image: &Image) -> Result<ElevationGrid, TerrainError> {
    let stride = match image.texture_descriptor.format {
        TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => 4,
        TextureFormat::R8Unorm => 1,
        other => {
            return Err(TerrainError::UnsupportedImage(format!(
                "texture format {other:?} is not an 8-bit heightmap format"
            )));
        }
    };

    let Some(data) = image.data.as_ref() else {
        return Err(TerrainError::UnsupportedImage(
            "image has no CPU-side pixel data".into(),
        ));
    };

    let size = image.texture_descriptor.size;
    let width = size.width as usize;
    let height = size.height as usize;

    let grid = ElevationGrid::from_strided(width, height, data, stride)?;
    debug!(
        "read {}×{} elevation grid from {:?} image",
        width, height, image.texture_descriptor.format
    );
    Ok(grid)
}
