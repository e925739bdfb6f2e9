use bevy::prelude::*;
use constants::terrain::{FALLOFF_WIDTH, INNER_RADIUS, MAX_HEIGHT, MIN_HEIGHT, OUTER_RADIUS, STEP};

use super::tool_manager::{ToolManager, ToolMode};
use crate::engine::camera::editor_camera::EditorCamera;
use crate::engine::camera::projection::{EditorProjection, EditorViewport};
use crate::engine::input::input_commands::InputCommands;
use crate::engine::picking::ray::PickRay;
use crate::engine::picking::terrain_pick::{TerrainHitPolicy, terrain_intersection};
use crate::engine::scene::terrain_grid::TerrainGrid;

/// Raise/lower brush with a flat core and a linear falloff ring.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TerrainBrush {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub step: f32,
    pub falloff_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for TerrainBrush {
    fn default() -> Self {
        Self {
            inner_radius: INNER_RADIUS,
            outer_radius: OUTER_RADIUS,
            step: STEP,
            falloff_width: FALLOFF_WIDTH,
            min_height: MIN_HEIGHT,
            max_height: MAX_HEIGHT,
        }
    }
}

impl TerrainBrush {
    /// Share of a full step applied at a planar distance from the brush centre.
    pub fn strength(&self, distance: f32) -> f32 {
        if distance >= self.outer_radius {
            0.0
        } else if distance < self.inner_radius {
            1.0
        } else {
            1.0 - (distance - self.inner_radius) / self.falloff_width
        }
    }

    /// Apply one brush step around `point`. `direction` is +1 to raise and -1
    /// to lower. Distances ignore height. Returns the number of vertices moved.
    pub fn edit_terrain(&self, grid: &mut TerrainGrid, point: Vec3, direction: f32) -> usize {
        grid.edit_positions(|position| {
            let distance = Vec2::new(position.x - point.x, position.z - point.z).length();
            let strength = self.strength(distance);
            if strength <= 0.0 {
                return false;
            }

            let height = (position.y + self.step * direction * strength)
                .clamp(self.min_height, self.max_height);
            if height == position.y {
                return false;
            }
            position.y = height;
            true
        })
    }
}

/// Cursor hit on the terrain and whether a sculpt gesture is running.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct TerrainEditState {
    pub point: Option<Vec3>,
    pub gesture_active: bool,
}

/// Sculpt while the button is held in terrain mode; rebuild normals once the
/// gesture ends. The cursor point is dropped outside terrain mode.
pub fn edit_terrain_under_cursor(
    input: Res<InputCommands>,
    tool_manager: Res<ToolManager>,
    camera: Res<EditorCamera>,
    projection: Res<EditorProjection>,
    viewport: Res<EditorViewport>,
    policy: Res<TerrainHitPolicy>,
    brush: Res<TerrainBrush>,
    mut state: ResMut<TerrainEditState>,
    mut grid: ResMut<TerrainGrid>,
) {
    let terrain_mode = tool_manager.is_active(ToolMode::TerrainEdit);
    if !terrain_mode {
        state.point = None;
    }

    if !terrain_mode || input.terrain_direction == 0.0 {
        if state.gesture_active {
            state.gesture_active = false;
            if grid.normals_stale() {
                grid.recalculate_normals();
                debug!("Terrain normals recalculated");
            }
        }
        return;
    }

    let Some(ray) = PickRay::from_camera(input.cursor(), &camera, &projection, &viewport) else {
        return;
    };

    state.point = terrain_intersection(&grid, &ray, *policy);
    state.gesture_active = true;

    if let Some(point) = state.point {
        brush.edit_terrain(&mut grid, point, input.terrain_direction);
    }
}
