use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::paths::SCENE_GRAPH_PATH;
use constants::terrain::RESOLUTION;

use crate::engine::assets::asset_source::AssetSource;
use crate::engine::assets::persistence::load_heightmap_file;
use crate::engine::assets::scene_graph::{ActiveChunk, ChunkObject, SceneGraph};
use crate::engine::scene::display_list::DisplayList;
use crate::engine::scene::terrain_grid::TerrainGrid;
use crate::tools::object_manager::gizmo::GizmoAssets;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Resource, Default)]
pub struct SceneLoader {
    handle: Option<Handle<SceneGraph>>,
}

// Start the loading process
pub fn start_loading(mut scene_loader: ResMut<SceneLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene graph from {}", SCENE_GRAPH_PATH);
    scene_loader.handle = Some(asset_server.load(SCENE_GRAPH_PATH));
}

/// Terrain for a chunk record. A missing or unreadable heightmap gives flat
/// ground of the chunk's size.
pub fn load_chunk_terrain(chunk: &ChunkObject) -> TerrainGrid {
    if chunk.heightmap_path.is_empty() {
        return TerrainGrid::flat(RESOLUTION, chunk.size_metres);
    }

    match load_heightmap_file(chunk) {
        Ok(grid) => grid,
        Err(error) => {
            warn!(
                "Heightmap '{}' unusable ({error}), using flat terrain",
                chunk.heightmap_path
            );
            TerrainGrid::flat(RESOLUTION, chunk.size_metres)
        }
    }
}

/// Replace the render list and terrain with the contents of a scene graph.
pub fn apply_scene_graph(
    graph: &SceneGraph,
    source: &impl AssetSource,
    gizmo: &GizmoAssets,
    list: &mut DisplayList,
    grid: &mut TerrainGrid,
) {
    list.rebuild(gizmo.display_objects(), graph.display_objects(source));
    *grid = load_chunk_terrain(&graph.chunk);
}

// Build the scene once the graph has loaded, then start running
pub fn load_scene_graph(
    scene_loader: Res<SceneLoader>,
    asset_server: Res<AssetServer>,
    graphs: Res<Assets<SceneGraph>>,
    gizmo: Res<GizmoAssets>,
    mut list: ResMut<DisplayList>,
    mut grid: ResMut<TerrainGrid>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = scene_loader.handle else {
        return;
    };

    let graph = match graphs.get(handle) {
        Some(graph) => graph.clone(),
        None => {
            if !matches!(asset_server.get_load_state(handle.id()), Some(LoadState::Failed(_))) {
                return;
            }
            warn!("Scene graph {} failed to load, starting empty", SCENE_GRAPH_PATH);
            SceneGraph::default()
        }
    };

    apply_scene_graph(&graph, asset_server.as_ref(), &gizmo, &mut list, &mut grid);
    commands.insert_resource(ActiveChunk(graph.chunk.clone()));

    info!(
        "✓ Scene loaded: {} objects, chunk {}",
        graph.objects.len(),
        graph.chunk.id
    );
    next_state.set(AppState::Running);
}
