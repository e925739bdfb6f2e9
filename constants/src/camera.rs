use bevy::math::Vec3;

/// Distance travelled per frame for each held movement key.
pub const MOVE_SPEED: f32 = 0.30;

/// Degrees of yaw/pitch per pixel of mouse drag.
pub const ROTATION_RATE: f32 = 1.0;

/// Pitch is clamped to this many degrees either side of the horizon.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Per-axis interpolation factor applied when easing the look direction.
pub const LOOK_SMOOTHING: f32 = 0.5;

pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 3.7, -3.5);
