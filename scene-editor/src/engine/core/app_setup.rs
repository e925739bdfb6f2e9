use bevy::asset::AssetMetaCheck;
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::CLEAR_COLOUR;

// Crate engine modules
use crate::engine::assets::asset_source::{
    PlaceholderAssets, load_placeholder_assets, replace_failed_assets,
};
use crate::engine::assets::persistence::{SaveSceneEvent, SaveTerrainEvent, handle_save_events};
use crate::engine::assets::scene_graph::{ActiveChunk, SceneGraph};
use crate::engine::camera::editor_camera::{EditorCamera, apply_camera_view, update_editor_camera};
use crate::engine::camera::projection::{EditorProjection, EditorViewport};
use crate::engine::core::app_state::{AppState, SceneLoader, load_scene_graph, start_loading};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::input_commands::{InputCommands, collect_input_commands};
use crate::engine::picking::terrain_pick::TerrainHitPolicy;
use crate::engine::render::display_sync::{
    DisplaySyncState, resolve_mesh_bounds, sync_display_entities,
};
use crate::engine::render::hud::{spawn_hud, update_hud_text};
use crate::engine::render::terrain_mesh::{spawn_terrain_surface, sync_terrain_surface};
use crate::engine::scene::display_list::DisplayList;
use crate::engine::scene::grid::draw_ground_grid;
use crate::engine::scene::terrain_grid::TerrainGrid;
use crate::engine::systems::render_mode::{RenderSettings, render_mode_system};
// Crate tools modules
use crate::tools::object_manager::{
    gizmo::{GizmoAssets, create_gizmo_assets, sync_gizmo_to_selection},
    manipulation::{drag_selected_object, handle_clipboard_commands},
    paint::{ApplyColour, PaintTextures, ResetTexture, handle_paint_events, load_paint_textures},
    placement::place_object_on_click,
    selection::pick_on_click,
    state::{AxisConstraint, Clipboard, DragState, EditLatches, Selection},
};
use crate::tools::status::{EditorStatus, update_editor_status};
use crate::tools::terrain_editor::{TerrainBrush, TerrainEditState, edit_terrain_under_cursor};
use crate::tools::tool_manager::{
    ToolManager, ToolSelectionEvent, handle_tool_keyboard_shortcuts, handle_tool_selection_events,
};

/// Per-frame stages, run in this order every `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorSet {
    /// Device state folded into `InputCommands`, plus shortcuts.
    Input,
    Camera,
    /// Selection, clipboard, movement, placement, terrain edits and gizmo.
    Tools,
    /// Core state mirrored into render entities and HUD.
    Sync,
}

/// Editing core: resources, events and the camera and tool systems. Needs no
/// window or renderer, so it runs under `MinimalPlugins` as well. The render
/// camera pose is written right after the fly camera moves.
pub struct EditorCorePlugin;

impl Plugin for EditorCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                EditorSet::Input,
                EditorSet::Camera,
                EditorSet::Tools,
                EditorSet::Sync,
            )
                .chain(),
        );

        app.init_resource::<InputCommands>()
            .init_resource::<EditorViewport>()
            .init_resource::<EditorProjection>()
            .init_resource::<EditorCamera>()
            .init_resource::<DisplayList>()
            .init_resource::<TerrainGrid>()
            .init_resource::<TerrainHitPolicy>()
            .init_resource::<TerrainBrush>()
            .init_resource::<TerrainEditState>()
            .init_resource::<Selection>()
            .init_resource::<Clipboard>()
            .init_resource::<EditLatches>()
            .init_resource::<AxisConstraint>()
            .init_resource::<DragState>()
            .init_resource::<ToolManager>()
            .init_resource::<RenderSettings>()
            .init_resource::<EditorStatus>()
            .init_resource::<ActiveChunk>()
            .init_resource::<PlaceholderAssets>()
            .init_resource::<PaintTextures>()
            .init_resource::<GizmoAssets>()
            .add_event::<ToolSelectionEvent>()
            .add_event::<ApplyColour>()
            .add_event::<ResetTexture>()
            .add_event::<SaveSceneEvent>()
            .add_event::<SaveTerrainEvent>();

        app.add_systems(
            Update,
            (update_editor_camera, apply_camera_view)
                .chain()
                .in_set(EditorSet::Camera),
        )
        .add_systems(
            Update,
            (
                handle_tool_selection_events,
                pick_on_click,
                drag_selected_object,
                handle_clipboard_commands,
                place_object_on_click,
                edit_terrain_under_cursor,
                handle_paint_events,
                sync_gizmo_to_selection,
                update_editor_status,
                handle_save_events,
            )
                .chain()
                .in_set(EditorSet::Tools),
        );
    }
}

/// Window and device glue feeding the core.
pub struct EditorInputPlugin;

impl Plugin for EditorInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                collect_input_commands,
                handle_tool_keyboard_shortcuts,
                render_mode_system,
            )
                .chain()
                .in_set(EditorSet::Input),
        );
    }
}

/// Camera, lighting, HUD and the render entity sync systems.
pub struct EditorRenderPlugin;

impl Plugin for EditorRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DisplaySyncState>()
            .add_systems(Startup, (spawn_camera, spawn_lighting, spawn_hud))
            .add_systems(OnEnter(AppState::Running), spawn_terrain_surface)
            .add_systems(
                Update,
                (
                    replace_failed_assets,
                    resolve_mesh_bounds,
                    sync_display_entities,
                    sync_terrain_surface,
                    update_hud_text,
                    draw_ground_grid,
                )
                    .chain()
                    .in_set(EditorSet::Sync),
            );
    }
}

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneGraph as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneGraph>::new(&["scene.json"]))
        .add_plugins(WireframePlugin::default())
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        })
        .insert_resource(ClearColor(CLEAR_COLOUR))
        .add_plugins((EditorCorePlugin, EditorInputPlugin, EditorRenderPlugin))
        .init_resource::<SceneLoader>();

    // Tools and sync only touch the scene once it is built
    app.configure_sets(
        Update,
        (EditorSet::Tools, EditorSet::Sync).run_if(in_state(AppState::Running)),
    );

    app.add_systems(
        Startup,
        (
            load_placeholder_assets,
            load_paint_textures,
            create_gizmo_assets,
            start_loading,
        ),
    )
    .add_systems(
        Update,
        load_scene_graph.run_if(in_state(AppState::Loading)),
    );

    app
}

fn spawn_camera(
    mut commands: Commands,
    editor_camera: Res<EditorCamera>,
    projection: Res<EditorProjection>,
    viewport: Res<EditorViewport>,
) {
    commands.spawn((
        Camera3d::default(),
        projection.to_bevy(viewport.aspect()),
        editor_camera.transform(),
    ));
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
