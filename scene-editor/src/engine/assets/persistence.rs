use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use constants::paths::{ASSET_ROOT, SCENE_SAVE_PATH};

use super::scene_graph::{ActiveChunk, ChunkObject, SceneGraph};
use crate::engine::scene::display_list::DisplayList;
use crate::engine::scene::terrain_grid::TerrainGrid;
use crate::error::PersistenceError;

/// Write the render list back out as the scene graph.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SaveSceneEvent;

/// Write the terrain heights back to the chunk's heightmap.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SaveTerrainEvent;

/// Filesystem location of an asset-relative path.
pub fn asset_file_path(relative: &str) -> PathBuf {
    Path::new(ASSET_ROOT).join(relative)
}

pub fn load_heightmap_file(chunk: &ChunkObject) -> Result<TerrainGrid, PersistenceError> {
    let bytes = fs::read(asset_file_path(&chunk.heightmap_path))?;
    TerrainGrid::from_heightmap(&bytes, chunk)
}

pub fn save_heightmap_file(
    grid: &TerrainGrid,
    chunk: &ChunkObject,
) -> Result<PathBuf, PersistenceError> {
    let path = asset_file_path(&chunk.heightmap_path);
    write_creating_parent(&path, &grid.to_heightmap(chunk.height_scale))?;
    Ok(path)
}

pub fn save_scene_file(graph: &SceneGraph, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let json = serde_json::to_vec_pretty(graph)?;
    write_creating_parent(path.as_ref(), &json)
}

pub fn handle_save_events(
    mut scene_events: EventReader<SaveSceneEvent>,
    mut terrain_events: EventReader<SaveTerrainEvent>,
    list: Res<DisplayList>,
    grid: Res<TerrainGrid>,
    chunk: Res<ActiveChunk>,
) {
    if scene_events.read().count() > 0 {
        let graph = SceneGraph::from_display_list(&list, chunk.0.clone());
        match save_scene_file(&graph, SCENE_SAVE_PATH) {
            Ok(()) => info!("Saved {} objects to {}", graph.objects.len(), SCENE_SAVE_PATH),
            Err(error) => error!("Failed to save scene: {error}"),
        }
    }

    if terrain_events.read().count() > 0 {
        if chunk.0.heightmap_path.is_empty() {
            warn!("Terrain not saved: chunk has no heightmap path");
            return;
        }
        match save_heightmap_file(&grid, &chunk.0) {
            Ok(path) => info!("Saved heightmap to {}", path.display()),
            Err(error) => error!("Failed to save heightmap: {error}"),
        }
    }
}

fn write_creating_parent(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_graph::SceneObject;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scene-editor-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn scene_file_round_trips_through_json() {
        let dir = scratch_dir("scene");
        let path = dir.join("nested").join("scene.scene.json");
        let graph = SceneGraph {
            objects: vec![SceneObject {
                id: 0,
                chunk_id: 0,
                name: "crate".to_owned(),
                model_path: "database/data/crate.glb".to_owned(),
                tex_diffuse_path: "database/data/crate.dds".to_owned(),
                position: [1.0, 2.0, 3.0],
                rotation: [0.0, 45.0, 0.0],
                scale: [1.0, 1.0, 1.0],
                editor_render: true,
                editor_wireframe: false,
                light: Default::default(),
            }],
            chunk: ChunkObject::default(),
        };

        save_scene_file(&graph, &path).unwrap();
        let loaded: SceneGraph = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(loaded, graph);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_heightmap_reports_io_error() {
        let chunk = ChunkObject {
            heightmap_path: "does/not/exist.raw".to_owned(),
            ..Default::default()
        };

        assert!(matches!(load_heightmap_file(&chunk), Err(PersistenceError::Io(_))));
    }
}
