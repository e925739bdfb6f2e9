use bevy::prelude::*;

use super::object_manager::paint::{ApplyColour, PaintColour, ResetTexture};
use super::object_manager::state::{DragState, Selection};
use crate::engine::assets::persistence::{SaveSceneEvent, SaveTerrainEvent};

/// Enumeration of the editor's mouse tools. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ToolMode {
    #[default]
    Pick,
    Place,
    TerrainEdit,
}

impl ToolMode {
    /// Name shown in the status line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pick => "Mouse Pick",
            Self::Place => "Place Object",
            Self::TerrainEdit => "Edit Terrain",
        }
    }
}

/// Resource tracking the currently active tool.
#[derive(Resource, Debug, Default)]
pub struct ToolManager {
    active_tool: ToolMode,
}

impl ToolManager {
    /// Activate specified tool. Returns `false` if it was already active.
    pub fn activate_tool(&mut self, tool: ToolMode) -> bool {
        if self.active_tool == tool {
            return false;
        }

        info!(
            "Tool manager switched: {} -> {}",
            self.active_tool.label(),
            tool.label()
        );
        self.active_tool = tool;
        true
    }

    pub fn active_tool(&self) -> ToolMode {
        self.active_tool
    }

    pub fn is_active(&self, tool: ToolMode) -> bool {
        self.active_tool == tool
    }
}

/// Event fired when tool selection changes via the host or keyboard shortcuts.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToolSelectionEvent {
    pub tool: ToolMode,
    pub source: ToolSelectionSource,
}

/// Source of tool selection for debugging and conditional logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSelectionSource {
    Host,
    Keyboard,
}

/// System handling tool selection events. Switching tools ends any drag.
pub fn handle_tool_selection_events(
    mut events: EventReader<ToolSelectionEvent>,
    mut tool_manager: ResMut<ToolManager>,
    mut drag: ResMut<DragState>,
) {
    for event in events.read() {
        if !tool_manager.activate_tool(event.tool) {
            continue;
        }

        debug!("{} selected via {:?}", event.tool.label(), event.source);
        drag.active = false;
    }
}

/// System mapping keyboard shortcuts to tool, paint and save events.
pub fn handle_tool_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    selection: Res<Selection>,
    mut tool_events: EventWriter<ToolSelectionEvent>,
    mut colour_events: EventWriter<ApplyColour>,
    mut reset_events: EventWriter<ResetTexture>,
    mut save_scene_events: EventWriter<SaveSceneEvent>,
    mut save_terrain_events: EventWriter<SaveTerrainEvent>,
) {
    let tools = [
        (KeyCode::F1, ToolMode::Pick),
        (KeyCode::F2, ToolMode::Place),
        (KeyCode::F3, ToolMode::TerrainEdit),
    ];
    for (key, tool) in tools {
        if keyboard.just_pressed(key) {
            tool_events.write(ToolSelectionEvent {
                tool,
                source: ToolSelectionSource::Keyboard,
            });
        }
    }

    let modifier = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
    if modifier && keyboard.just_pressed(KeyCode::KeyS) {
        save_scene_events.write(SaveSceneEvent);
    }
    if modifier && keyboard.just_pressed(KeyCode::KeyT) {
        save_terrain_events.write(SaveTerrainEvent);
    }

    let Some(id) = selection.id else {
        return;
    };

    let colours = [
        (KeyCode::Digit1, PaintColour::Red),
        (KeyCode::Digit2, PaintColour::Green),
        (KeyCode::Digit3, PaintColour::Blue),
    ];
    for (key, colour) in colours {
        if keyboard.just_pressed(key) {
            colour_events.write(ApplyColour { id, colour });
        }
    }

    if keyboard.just_pressed(KeyCode::Digit0) {
        reset_events.write(ResetTexture { id });
    }
}
