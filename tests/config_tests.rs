use bevy_heightmap_terrain::{ColorBand, TerrainConfig, TerrainError};

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

fn is_invalid(result: Result<TerrainConfig, TerrainError>) -> bool {
    matches!(result, Err(TerrainError::InvalidConfiguration(_)))
}

#[test]
fn presets_are_valid() {
    TerrainConfig::meadow().validate().expect("meadow preset");
    TerrainConfig::nether().validate().expect("nether preset");
    assert_eq!(TerrainConfig::default(), TerrainConfig::meadow());
}

#[test]
fn preset_scales() {
    assert_eq!(TerrainConfig::meadow().height_scale, 0.10);
    assert_eq!(TerrainConfig::nether().height_scale, 0.60);
}

#[test]
fn empty_bands_are_rejected() {
    assert!(is_invalid(TerrainConfig::new(1.0, vec![])));
}

#[test]
fn non_positive_scale_is_rejected() {
    let bands = vec![ColorBand::new(1.0, RED)];
    assert!(is_invalid(TerrainConfig::new(0.0, bands.clone())));
    assert!(is_invalid(TerrainConfig::new(-1.0, bands.clone())));
    assert!(is_invalid(TerrainConfig::new(f32::NAN, bands.clone())));
    assert!(is_invalid(TerrainConfig::new(f32::INFINITY, bands)));
}

#[test]
fn unsorted_bands_are_rejected() {
    let bands = vec![ColorBand::new(0.8, RED), ColorBand::new(0.5, GREY)];
    assert!(is_invalid(TerrainConfig::new(1.0, bands)));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    assert!(is_invalid(TerrainConfig::new(
        1.0,
        vec![ColorBand::new(-0.1, RED), ColorBand::new(1.0, GREY)]
    )));
    assert!(is_invalid(TerrainConfig::new(
        1.0,
        vec![ColorBand::new(0.5, RED), ColorBand::new(1.5, GREY)]
    )));
    assert!(is_invalid(TerrainConfig::new(
        1.0,
        vec![ColorBand::new(f32::NAN, RED)]
    )));
}

#[test]
fn infinite_ceiling_only_allowed_on_last_band() {
    assert!(
        TerrainConfig::new(
            1.0,
            vec![ColorBand::new(0.5, RED), ColorBand::new(f32::INFINITY, GREY)]
        )
        .is_ok()
    );
    assert!(is_invalid(TerrainConfig::new(
        1.0,
        vec![ColorBand::new(f32::INFINITY, RED), ColorBand::new(f32::INFINITY, GREY)]
    )));
}

#[test]
fn band_index_scans_in_order() {
    let config = TerrainConfig::meadow();
    assert_eq!(config.band_index(0.0), Some(0));
    assert_eq!(config.band_index(0.5), Some(0));
    assert_eq!(config.band_index(0.51), Some(1));
    assert_eq!(config.band_index(0.8), Some(1));
    assert_eq!(config.band_index(0.9), Some(2));
    assert_eq!(config.band_index(2.0), Some(2));
}

#[test]
fn color_for_without_bands_is_none() {
    let config = TerrainConfig {
        height_scale: 1.0,
        color_bands: vec![],
    };
    assert_eq!(config.color_for(0.5), None);
}

#[test]
fn parses_toml() {
    let config = TerrainConfig::from_toml_str(
        r#"
        height_scale = 0.6

        [[color_bands]]
        threshold = 0.5
        color = [1.0, 0.0, 0.0, 1.0]

        [[color_bands]]
        threshold = 1.0
        color = [0.5, 0.5, 0.5, 1.0]
        "#,
    )
    .expect("valid toml");
    assert_eq!(config.height_scale, 0.6);
    assert_eq!(
        config.color_bands,
        vec![ColorBand::new(0.5, RED), ColorBand::new(1.0, GREY)]
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = TerrainConfig::from_toml_str("height_scale = \"tall\"");
    assert!(matches!(result, Err(TerrainError::ConfigParse(_))));
}

#[test]
fn toml_with_empty_bands_is_invalid() {
    let result = TerrainConfig::from_toml_str("height_scale = 1.0\ncolor_bands = []");
    assert!(is_invalid(result));
}

#[test]
fn json_round_trip_preserves_preset() {
    let json = serde_json::to_string(&TerrainConfig::nether()).unwrap();
    let back: TerrainConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TerrainConfig::nether());
}
