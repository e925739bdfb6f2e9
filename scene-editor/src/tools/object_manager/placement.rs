use bevy::prelude::*;
use constants::editor::SPAWN_CAST_DISTANCE;
use constants::paths::{PLACEHOLDER_MODEL, PLACEHOLDER_TEXTURE};

use super::state::Selection;
use crate::engine::assets::asset_source::PlaceholderAssets;
use crate::engine::assets::scene_graph::LightParams;
use crate::engine::camera::editor_camera::EditorCamera;
use crate::engine::camera::projection::{EditorProjection, EditorViewport};
use crate::engine::input::input_commands::InputCommands;
use crate::engine::picking::ray::PickRay;
use crate::engine::scene::display_list::{
    DisplayList, DisplayObject, MaterialCapability, ObjectId, ObjectRole, ObjectTransform,
};
use crate::tools::tool_manager::{ToolManager, ToolMode};

/// New scene object built from the placeholder model and texture.
pub fn placeholder_object(placeholders: &PlaceholderAssets, position: Vec3) -> DisplayObject {
    DisplayObject {
        role: ObjectRole::Scene,
        name: String::new(),
        transform: ObjectTransform::from_position(position),
        model_path: PLACEHOLDER_MODEL.to_owned(),
        texture_path: PLACEHOLDER_TEXTURE.to_owned(),
        mesh: placeholders.mesh.clone(),
        texture: placeholders.texture.clone(),
        material: MaterialCapability::DiffuseTextured,
        bounds: None,
        render: true,
        wireframe: false,
        light: LightParams::default(),
    }
}

/// Append a placeholder object at `position`.
pub fn spawn_object(
    list: &mut DisplayList,
    placeholders: &PlaceholderAssets,
    position: Vec3,
) -> ObjectId {
    list.push(placeholder_object(placeholders, position))
}

/// Append a placeholder object a fixed distance along the cursor ray.
pub fn spawn_from_cast(
    list: &mut DisplayList,
    placeholders: &PlaceholderAssets,
    ray: &PickRay,
) -> ObjectId {
    spawn_object(list, placeholders, ray.point_at(SPAWN_CAST_DISTANCE))
}

// Place a new object under the cursor on left click in place mode
pub fn place_object_on_click(
    input: Res<InputCommands>,
    tool_manager: Res<ToolManager>,
    camera: Res<EditorCamera>,
    projection: Res<EditorProjection>,
    viewport: Res<EditorViewport>,
    placeholders: Res<PlaceholderAssets>,
    mut list: ResMut<DisplayList>,
    mut selection: ResMut<Selection>,
) {
    if !input.mouse_left_pressed || !tool_manager.is_active(ToolMode::Place) {
        return;
    }

    let Some(ray) = PickRay::from_camera(input.cursor(), &camera, &projection, &viewport) else {
        return;
    };

    let id = spawn_from_cast(&mut list, &placeholders, &ray);
    info!("Placed object {id} at {:?}", ray.point_at(SPAWN_CAST_DISTANCE));
    selection.id = Some(id);
}
