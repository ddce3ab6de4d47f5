//! Heightmap terrain meshes for Bevy.
//!
//! Turns a grayscale elevation image into an indexed triangle mesh whose
//! vertex colors follow elevation bands (grass below half height, rock up to
//! 80%, snow above, or whatever bands you configure).
//!
//! # Features
//!
//! - **Mesh generation**: Convert an [`ElevationGrid`] to a renderer-agnostic
//!   [`TerrainMesh`] with [`TerrainMeshBuilder`] or [`build_terrain`].
//! - **Bevy meshes**: Convert a `TerrainMesh` to a Bevy [`Mesh`](bevy::prelude::Mesh)
//!   with colors, smooth normals and tiling UVs via [`TerrainRenderMeshBuilder`].
//! - **Heightmap images**: Read a decoded Bevy `Image` as elevation data via
//!   [`elevation_grid_from_image`].
//! - **Live updates**: Rebuild a mesh asset when its inputs change with
//!   [`sync_terrain_mesh`].
//! - **Physics colliders** (optional, `physics` feature): Generate an Avian3D
//!   `Collider::heightfield` via [`collider`].
//!
//! # Feature Flags
//!
//! - `physics`: Enables [`collider`] and [`collider::build_heightfield_collider`]
//!   for Avian3D integration.
//!
//! # Example
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_heightmap_terrain::{
//!     build_terrain, elevation_grid_from_image, TerrainConfig, TerrainRenderMeshBuilder,
//! };
//!
//! fn setup(
//!     mut commands: Commands,
//!     images: Res<Assets<Image>>,
//!     heightmap: Res<HeightmapImage>,
//!     mut meshes: ResMut<Assets<Mesh>>,
//!     mut materials: ResMut<Assets<StandardMaterial>>,
//! ) {
//!     let image = images.get(&heightmap.0).unwrap();
//!     let grid = elevation_grid_from_image(image).unwrap();
//!     let terrain = build_terrain(&grid, &TerrainConfig::meadow()).unwrap();
//!
//!     commands.spawn((
//!         Mesh3d(meshes.add(TerrainRenderMeshBuilder::new().build(&terrain))),
//!         MeshMaterial3d(materials.add(StandardMaterial::default())),
//!     ));
//! }
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod mesher;
pub mod source;
pub mod sync;
pub mod terrain;

#[cfg(feature = "physics")]
pub mod collider;

pub use config::{ColorBand, TerrainConfig};
pub use error::TerrainError;
pub use grid::ElevationGrid;
pub use mesher::{NormalMethod, TerrainRenderMeshBuilder};
pub use source::elevation_grid_from_image;
pub use sync::{TerrainMeshHandle, TerrainSettings, sync_terrain_mesh};
pub use terrain::{TerrainMesh, TerrainMeshBuilder, build_terrain};

#[cfg(feature = "physics")]
pub use collider::build_heightfield_collider;
