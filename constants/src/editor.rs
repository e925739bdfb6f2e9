use bevy::math::Vec3;

/// World units moved per pixel of mouse drag when translating an object.
pub const MOVE_SENSITIVITY: f32 = 0.1;

/// Pasted objects land this far in front of the camera.
pub const PASTE_DISTANCE: f32 = 3.0;

/// Objects spawned from a cursor cast land this far along the ray.
pub const SPAWN_CAST_DISTANCE: f32 = 10.0;

/// Number of render list entries reserved for the translation gizmo.
pub const GIZMO_ENTRY_COUNT: usize = 3;

/// Where hidden gizmo entries are parked.
pub const GIZMO_PARKED_POSITION: Vec3 = Vec3::new(100.0, 100.0, 100.0);

/// Offsets from the selected object for the forward, right and up handles.
pub const GIZMO_OFFSETS: [Vec3; GIZMO_ENTRY_COUNT] = [
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(0.0, 0.0, -0.5),
];

pub const GIZMO_SCALE: f32 = 3.0;

/// Length and thickness of a gizmo handle before `GIZMO_SCALE` is applied.
pub const GIZMO_HANDLE_LENGTH: f32 = 0.5;
pub const GIZMO_HANDLE_THICKNESS: f32 = 0.04;
