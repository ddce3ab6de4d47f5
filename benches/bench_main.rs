use std::hint::black_box;

use bevy_heightmap_terrain::{
    ElevationGrid, TerrainConfig, TerrainMeshBuilder, TerrainRenderMeshBuilder,
};
use criterion::{Criterion, criterion_group, criterion_main};

fn wavy_grid(size: usize) -> ElevationGrid {
    ElevationGrid::from_fn(size, size, |x, z| {
        (((x + z) as f32 * 0.1).sin() * 127.5 + 127.5) as u8
    })
    .expect("non-empty grid")
}

fn bench_terrain_generation(c: &mut Criterion) {
    let grid = wavy_grid(256);
    let builder = TerrainMeshBuilder::new(TerrainConfig::meadow());

    c.bench_function("TerrainMeshBuilder 256x256", |b| {
        b.iter(|| builder.build(black_box(&grid)))
    });
}

fn bench_render_mesh(c: &mut Criterion) {
    let grid = wavy_grid(128);
    let terrain = TerrainMeshBuilder::new(TerrainConfig::nether())
        .build(&grid)
        .expect("valid terrain");

    c.bench_function("TerrainRenderMeshBuilder 128x128", |b| {
        b.iter(|| {
            TerrainRenderMeshBuilder::new()
                .with_uv_tile_size(10.0)
                .build(black_box(&terrain))
        });
    });
}

criterion_group!(benches, bench_terrain_generation, bench_render_mesh);
criterion_main!(benches);
