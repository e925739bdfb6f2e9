use bevy::asset::RenderAssetUsages;
use bevy::pbr::wireframe::Wireframe;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::engine::assets::asset_source::AssetSource;
use crate::engine::assets::scene_graph::ActiveChunk;
use crate::engine::scene::terrain_grid::TerrainGrid;
use crate::engine::systems::render_mode::RenderSettings;

/// Render entity for the terrain surface.
#[derive(Component, Debug, Default)]
pub struct TerrainSurface {
    built_revision: Option<u64>,
}

/// Triangle-list mesh of the grid. Each cell splits into two triangles
/// wound counter-clockwise seen from above. UVs repeat `tiling` times across
/// the whole grid.
pub fn build_terrain_mesh(grid: &TerrainGrid, tiling: f32) -> Mesh {
    let resolution = grid.resolution();
    let last = (resolution - 1) as f32;

    let positions: Vec<[f32; 3]> = grid
        .vertices()
        .iter()
        .map(|vertex| vertex.position.to_array())
        .collect();
    let normals: Vec<[f32; 3]> = grid
        .vertices()
        .iter()
        .map(|vertex| vertex.normal.to_array())
        .collect();
    let uvs: Vec<[f32; 2]> = (0..resolution * resolution)
        .map(|index| {
            let (row, col) = (index / resolution, index % resolution);
            [col as f32 / last * tiling, row as f32 / last * tiling]
        })
        .collect();

    let mut indices = Vec::with_capacity((resolution - 1) * (resolution - 1) * 6);
    for row in 0..resolution - 1 {
        for col in 0..resolution - 1 {
            let v1 = grid.index(row, col) as u32;
            let v2 = grid.index(row, col + 1) as u32;
            let v3 = grid.index(row + 1, col + 1) as u32;
            let v4 = grid.index(row + 1, col) as u32;
            indices.extend_from_slice(&[v1, v4, v2, v2, v4, v3]);
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

pub fn spawn_terrain_surface(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    chunk: Res<ActiveChunk>,
    grid: Res<TerrainGrid>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<TerrainSurface>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let material = StandardMaterial {
        base_color_texture: Some(asset_server.texture_or_error(&chunk.0.tex_diffuse_path)),
        perceptual_roughness: 1.0,
        ..default()
    };

    commands.spawn((
        TerrainSurface {
            built_revision: Some(grid.revision()),
        },
        Mesh3d(meshes.add(build_terrain_mesh(&grid, chunk.0.texture_tiling))),
        MeshMaterial3d(materials.add(material)),
        Transform::IDENTITY,
    ));
    info!(
        "Terrain surface built: {}x{} vertices",
        grid.resolution(),
        grid.resolution()
    );
}

/// Rebuild the terrain mesh after edits and follow the wireframe toggle.
pub fn sync_terrain_surface(
    mut commands: Commands,
    grid: Res<TerrainGrid>,
    chunk: Res<ActiveChunk>,
    settings: Res<RenderSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut surfaces: Query<(Entity, &mut TerrainSurface, &Mesh3d, Has<Wireframe>)>,
) {
    for (entity, mut surface, mesh, wireframe) in &mut surfaces {
        if surface.built_revision != Some(grid.revision()) {
            if let Some(existing) = meshes.get_mut(&mesh.0) {
                *existing = build_terrain_mesh(&grid, chunk.0.texture_tiling);
            }
            surface.built_revision = Some(grid.revision());
        }

        if settings.wireframe && !wireframe {
            commands.entity(entity).insert(Wireframe);
        } else if !settings.wireframe && wireframe {
            commands.entity(entity).remove::<Wireframe>();
        }
    }
}
