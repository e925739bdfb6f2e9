use bevy::prelude::*;

/// Global viewport display toggles.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Scene objects and terrain draw as wireframe. Gizmo handles stay solid.
    pub wireframe: bool,
    /// Debug ground grid overlay.
    pub grid: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            wireframe: false,
            grid: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderToggle {
    Wireframe,
    Grid,
}

impl RenderSettings {
    pub fn toggle(&mut self, toggle: RenderToggle) -> bool {
        let flag = match toggle {
            RenderToggle::Wireframe => &mut self.wireframe,
            RenderToggle::Grid => &mut self.grid,
        };
        *flag = !*flag;
        *flag
    }
}

/// Handle display toggles via keyboard input.
/// Render sync picks the new state up through resource change detection.
pub fn render_mode_system(
    mut settings: ResMut<RenderSettings>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if keyboard.just_pressed(KeyCode::F4) {
        let enabled = settings.toggle(RenderToggle::Wireframe);
        info!("Wireframe: {}", if enabled { "on" } else { "off" });
    }

    if keyboard.just_pressed(KeyCode::F5) {
        let enabled = settings.toggle(RenderToggle::Grid);
        info!("Grid: {}", if enabled { "on" } else { "off" });
    }
}
