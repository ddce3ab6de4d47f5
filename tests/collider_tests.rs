#![cfg(feature = "physics")]

use bevy_heightmap_terrain::{
    ElevationGrid, TerrainConfig, TerrainError, build_heightfield_collider,
};

#[test]
fn builds_collider_for_valid_grid() {
    let grid = ElevationGrid::from_fn(8, 6, |x, z| (x * 10 + z) as u8).unwrap();
    assert!(build_heightfield_collider(&grid, &TerrainConfig::meadow()).is_ok());
}

#[test]
fn single_row_grid_is_rejected() {
    let grid = ElevationGrid::from_fn(8, 1, |_, _| 0).unwrap();
    assert!(matches!(
        build_heightfield_collider(&grid, &TerrainConfig::meadow()),
        Err(TerrainError::InvalidGrid(_))
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let grid = ElevationGrid::from_fn(4, 4, |_, _| 0).unwrap();
    let config = TerrainConfig {
        height_scale: -1.0,
        ..TerrainConfig::meadow()
    };
    assert!(matches!(
        build_heightfield_collider(&grid, &config),
        Err(TerrainError::InvalidConfiguration(_))
    ));
}
