use bevy::prelude::*;
use constants::render_settings::{HUD_COLOUR, HUD_FONT_SIZE};

use crate::engine::camera::editor_camera::EditorCamera;
use crate::tools::status::EditorStatus;

#[derive(Component)]
pub struct HudText;

pub fn hud_text(camera: &EditorCamera, status: &EditorStatus) -> String {
    format!(
        "Cam X: {:.2} Cam Z: {:.2}\n{}",
        camera.position.x,
        camera.position.z,
        status.status_line()
    )
}

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(HUD_COLOUR),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(10.0),
                    left: Val::Px(10.0),
                    ..default()
                },
                HudText,
            ));
        });
}

pub fn update_hud_text(
    camera: Res<EditorCamera>,
    status: Res<EditorStatus>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    if !camera.is_changed() && !status.is_changed() {
        return;
    }

    let line = hud_text(&camera, &status);
    for mut text in &mut query {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}
