use bevy::prelude::*;

use super::object_manager::state::Selection;
use super::terrain_editor::TerrainEditState;
use super::tool_manager::{ToolManager, ToolMode};
use crate::engine::scene::display_list::ObjectId;
use crate::engine::systems::render_mode::RenderSettings;

/// Read-only snapshot of editor state for the HUD and the host.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct EditorStatus {
    selection: Option<ObjectId>,
    tool: ToolMode,
    terrain_point: Option<Vec3>,
    wireframe: bool,
    grid: bool,
}

impl EditorStatus {
    pub fn selection(&self) -> Option<ObjectId> {
        self.selection
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn terrain_point(&self) -> Option<Vec3> {
        self.terrain_point
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    /// "Selected Object: N | Tool: T | Terrain Point Co-ords: x, y, z"
    pub fn status_line(&self) -> String {
        let selected = self
            .selection
            .map_or_else(|| "none".to_owned(), |id| id.to_string());
        let point = self.terrain_point.map_or_else(
            || "none".to_owned(),
            |p| format!("{:.2}, {:.2}, {:.2}", p.x, p.y, p.z),
        );

        format!(
            "Selected Object: {} | Tool: {} | Terrain Point Co-ords: {}",
            selected,
            self.tool.label(),
            point
        )
    }
}

pub fn update_editor_status(
    selection: Res<Selection>,
    tool_manager: Res<ToolManager>,
    terrain: Res<TerrainEditState>,
    settings: Res<RenderSettings>,
    mut status: ResMut<EditorStatus>,
) {
    let next = EditorStatus {
        selection: selection.id,
        tool: tool_manager.active_tool(),
        terrain_point: terrain.point,
        wireframe: settings.wireframe,
        grid: settings.grid,
    };
    status.set_if_neq(next);
}
