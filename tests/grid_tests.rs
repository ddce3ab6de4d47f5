use bevy_heightmap_terrain::{ElevationGrid, TerrainError};

#[test]
fn zero_width_is_rejected() {
    assert!(matches!(
        ElevationGrid::new(0, 4, vec![]),
        Err(TerrainError::InvalidGrid(_))
    ));
}

#[test]
fn zero_height_is_rejected() {
    assert!(matches!(
        ElevationGrid::from_fn(3, 0, |_, _| 0),
        Err(TerrainError::InvalidGrid(_))
    ));
    assert!(matches!(
        ElevationGrid::from_rgba8(3, 0, &[]),
        Err(TerrainError::InvalidGrid(_))
    ));
}

#[test]
fn sample_count_must_match_dimensions() {
    assert!(matches!(
        ElevationGrid::new(2, 2, vec![1, 2, 3]),
        Err(TerrainError::InvalidGrid(_))
    ));
}

#[test]
fn get_is_row_major() {
    let grid = ElevationGrid::new(3, 2, vec![0, 1, 2, 10, 11, 12]).unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.len(), 6);
    assert_eq!(grid.get(2, 0), 2);
    assert_eq!(grid.get(0, 1), 10);
    assert_eq!(grid.get(2, 1), 12);
}

#[test]
#[should_panic]
fn get_out_of_bounds_panics() {
    let grid = ElevationGrid::new(2, 2, vec![0; 4]).unwrap();
    grid.get(2, 0);
}

#[test]
fn rgba_uses_red_channel() {
    let rgba = [
        10, 99, 98, 255, //
        20, 0, 0, 255, //
        30, 7, 7, 0, //
        40, 1, 2, 3,
    ];
    let grid = ElevationGrid::from_rgba8(2, 2, &rgba).unwrap();
    assert_eq!(grid.samples(), &[10, 20, 30, 40]);
}

#[test]
fn rgba_length_mismatch_is_rejected() {
    assert!(matches!(
        ElevationGrid::from_rgba8(2, 2, &[0; 15]),
        Err(TerrainError::InvalidGrid(_))
    ));
}

#[test]
fn from_fn_visits_every_position() {
    let grid = ElevationGrid::from_fn(4, 3, |x, z| (z * 4 + x) as u8).unwrap();
    let expected: Vec<u8> = (0..12).collect();
    assert_eq!(grid.samples(), expected.as_slice());
    assert!(!grid.is_empty());
}
