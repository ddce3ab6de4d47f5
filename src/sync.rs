//! Keeps a terrain [`Mesh`] asset in step with its elevation data.
//!
//! Store the grid and configuration in [`TerrainSettings`], the target mesh
//! handle in [`TerrainMeshHandle`], and run [`sync_terrain_mesh`] every
//! frame. The mesh is only rebuilt after [`TerrainSettings::mark_dirty`] (or
//! one of the setters) is called.

use bevy::log::warn;
use bevy::prelude::*;

use crate::{ElevationGrid, TerrainConfig, TerrainMeshBuilder, TerrainRenderMeshBuilder};

/// Resource holding the current terrain inputs and whether they changed.
#[derive(Resource)]
pub struct TerrainSettings {
    /// The current elevation data.
    pub grid: ElevationGrid,
    /// Height scale and color bands applied to `grid`.
    pub config: TerrainConfig,
    /// Normal and UV settings for the render mesh.
    pub render: TerrainRenderMeshBuilder,
    dirty: bool,
}

impl TerrainSettings {
    /// Creates a new settings resource.
    /// The mesh is rebuilt on the next [`sync_terrain_mesh`] run.
    pub fn new(grid: ElevationGrid, config: TerrainConfig) -> Self {
        Self {
            grid,
            config,
            render: TerrainRenderMeshBuilder::default(),
            dirty: true,
        }
    }

    pub fn with_render(mut self, render: TerrainRenderMeshBuilder) -> Self {
        self.render = render;
        self
    }

    /// Replaces the elevation data and schedules a rebuild.
    pub fn set_grid(&mut self, grid: ElevationGrid) {
        self.grid = grid;
        self.dirty = true;
    }

    /// Replaces the configuration and schedules a rebuild.
    pub fn set_config(&mut self, config: TerrainConfig) {
        self.config = config;
        self.dirty = true;
    }

    /// Marks the inputs as changed so [`sync_terrain_mesh`] rebuilds the mesh.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Resource holding the terrain mesh asset handle.
///
/// # Example
///
/// ```ignore
/// commands.insert_resource(TerrainMeshHandle { handle: meshes.add(Mesh::from(Plane3d::default())) });
/// commands.insert_resource(TerrainSettings::new(grid, TerrainConfig::meadow()));
/// app.add_systems(Update, sync_terrain_mesh);
/// ```
#[derive(Resource)]
pub struct TerrainMeshHandle {
    /// Handle to the terrain mesh. Use it in the terrain entity's `Mesh3d`.
    pub handle: Handle<Mesh>,
}

/// Bevy system that rebuilds the terrain mesh when [`TerrainSettings`] is dirty.
///
/// Add to your `Update` schedule. If the new inputs are rejected, a warning
/// is logged and the previous mesh stays in place. If the handle has no
/// asset yet, the settings stay dirty and the rebuild is retried next run.
pub fn sync_terrain_mesh(
    mut settings: ResMut<TerrainSettings>,
    target: Res<TerrainMeshHandle>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !settings.dirty {
        return;
    }

    let Some(mut mesh) = meshes.get_mut(&target.handle) else {
        // Stay dirty so the rebuild happens once the asset exists.
        warn!("terrain mesh handle {:?} has no asset", target.handle.id());
        return;
    };

    // Rejected inputs are not retried until a setter marks them dirty again.
    settings.dirty = false;

    let terrain = match TerrainMeshBuilder::new(settings.config.clone()).build(&settings.grid) {
        Ok(terrain) => terrain,
        Err(err) => {
            warn!("terrain mesh not rebuilt: {err}");
            return;
        }
    };

    *mesh = settings.render.build(&terrain);
}
