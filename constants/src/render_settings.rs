use bevy::color::Color;

/// Vertical field of view of the viewport camera.
pub const FOV_Y_DEGREES: f32 = 70.0;
pub const NEAR_PLANE: f32 = 0.01;
pub const FAR_PLANE: f32 = 1000.0;

/// Debug grid extent (half-size along each axis) and line count.
pub const GRID_HALF_EXTENT: f32 = 512.0;
pub const GRID_DIVISIONS: usize = 512;
pub const GRID_COLOUR: Color = Color::srgb(0.5, 0.5, 0.5);

pub const HUD_FONT_SIZE: f32 = 16.0;
pub const HUD_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);

pub const CLEAR_COLOUR: Color = Color::srgb(0.392, 0.584, 0.929);

/// Axis colours for the gizmo handles (x, y, z).
pub const GIZMO_X_COLOUR: Color = Color::srgb(0.9, 0.1, 0.1);
pub const GIZMO_Y_COLOUR: Color = Color::srgb(0.1, 0.9, 0.1);
pub const GIZMO_Z_COLOUR: Color = Color::srgb(0.1, 0.1, 0.9);
