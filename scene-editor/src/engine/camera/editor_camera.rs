use bevy::prelude::*;
use constants::camera::{
    INITIAL_POSITION, LOOK_SMOOTHING, MOVE_SPEED, PITCH_LIMIT_DEGREES, ROTATION_RATE,
};

use super::projection::{EditorProjection, EditorViewport};
use crate::engine::input::input_commands::InputCommands;

/// First-person fly camera state.
///
/// Orientation is kept as Euler degrees (`x` pitch, `y` yaw, `z` roll unused).
/// The look direction eases toward the orientation rather than snapping to it.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EditorCamera {
    pub position: Vec3,
    pub orientation: Vec3,
    pub look_direction: Vec3,
    pub look_at: Vec3,
    pub right: Vec3,
    pub previous_mouse: Vec2,
    pub move_speed: f32,
    pub rotation_rate: f32,
}

impl Default for EditorCamera {
    fn default() -> Self {
        Self::new(INITIAL_POSITION)
    }
}

impl EditorCamera {
    pub fn new(position: Vec3) -> Self {
        let look_direction = Vec3::Z;
        Self {
            position,
            orientation: Vec3::ZERO,
            look_direction,
            look_at: position + look_direction,
            right: look_direction.cross(Vec3::Y),
            previous_mouse: Vec2::ZERO,
            move_speed: MOVE_SPEED,
            rotation_rate: ROTATION_RATE,
        }
    }

    pub fn pitch(&self) -> f32 {
        self.orientation.x
    }

    pub fn yaw(&self) -> f32 {
        self.orientation.y
    }

    /// Advance one frame from an input snapshot.
    pub fn update(&mut self, input: &InputCommands) {
        let mouse = input.cursor();

        if input.mouse_right_down {
            let delta = mouse - self.previous_mouse;
            self.orientation.y -= delta.x * self.rotation_rate;
            self.orientation.x -= delta.y * self.rotation_rate;
            self.orientation.x = self
                .orientation
                .x
                .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        }

        let target = Self::direction_from_orientation(self.orientation);
        let eased = self.look_direction.lerp(target, LOOK_SMOOTHING);
        self.look_direction = eased.normalize_or(target.normalize());

        self.right = self.look_direction.cross(Vec3::Y);

        if input.forward {
            self.position += self.look_direction * self.move_speed;
        }
        if input.back {
            self.position -= self.look_direction * self.move_speed;
        }
        if input.right {
            self.position += self.right * self.move_speed;
        }
        if input.left {
            self.position -= self.right * self.move_speed;
        }
        if input.up {
            self.position.y += self.move_speed;
        }
        if input.down {
            self.position.y -= self.move_speed;
        }

        self.look_at = self.position + self.look_direction;

        // Always track the cursor so a drag starting next frame sees a small delta.
        self.previous_mouse = mouse;
    }

    /// Unnormalised spherical-to-Cartesian target for a pitch/yaw pair in degrees.
    fn direction_from_orientation(orientation: Vec3) -> Vec3 {
        let pitch = orientation.x.to_radians();
        let yaw = orientation.y.to_radians();
        Vec3::new(yaw.sin(), pitch.sin(), yaw.cos())
    }

    /// World-to-view matrix.
    pub fn view_from_world(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    /// Camera entity transform equivalent to [`Self::view_from_world`].
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

pub fn update_editor_camera(input: Res<InputCommands>, mut camera: ResMut<EditorCamera>) {
    camera.update(&input);
}

/// Push the fly camera pose and projection onto the render camera.
pub fn apply_camera_view(
    editor_camera: Res<EditorCamera>,
    projection: Res<EditorProjection>,
    viewport: Res<EditorViewport>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
) {
    let Ok((mut transform, mut bevy_projection)) = camera_query.single_mut() else {
        return;
    };

    *transform = editor_camera.transform();
    if projection.is_changed() || viewport.is_changed() {
        *bevy_projection = projection.to_bevy(viewport.aspect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotating(x: f32, y: f32) -> InputCommands {
        InputCommands {
            mouse_x: x,
            mouse_y: y,
            mouse_right_down: true,
            ..default()
        }
    }

    #[test]
    fn pitch_stays_clamped_for_large_drags() {
        let mut camera = EditorCamera::default();
        camera.update(&rotating(0.0, -5000.0));
        assert_eq!(camera.pitch(), PITCH_LIMIT_DEGREES);

        camera.update(&rotating(0.0, 9000.0));
        assert_eq!(camera.pitch(), -PITCH_LIMIT_DEGREES);

        for step in 0..50 {
            let y = if step % 2 == 0 { 400.0 } else { -730.0 };
            camera.update(&rotating(step as f32, y));
            assert!(camera.pitch().abs() <= PITCH_LIMIT_DEGREES);
        }
    }

    #[test]
    fn look_direction_stays_unit_length() {
        let mut camera = EditorCamera::default();
        let frames = [
            rotating(180.0, 0.0),
            rotating(-180.0, 45.0),
            InputCommands { forward: true, left: true, up: true, ..default() },
            rotating(360.0, -120.0),
            rotating(0.0, 0.0),
        ];
        for frame in frames.iter().cycle().take(40) {
            camera.update(frame);
            assert!((camera.look_direction.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn look_direction_eases_toward_the_target() {
        let mut camera = EditorCamera::default();
        camera.previous_mouse = Vec2::ZERO;
        camera.update(&rotating(-90.0, 0.0));

        // Yaw is now +90 degrees; the target is +X but only half the way is covered.
        let expected = Vec3::new(0.5, 0.0, 0.5).normalize();
        assert!(camera.look_direction.abs_diff_eq(expected, 1e-3));
        assert!(camera.yaw() == 90.0);
    }

    #[test]
    fn movement_flags_combine_without_normalising() {
        let mut camera = EditorCamera::default();
        let start = camera.position;
        camera.update(&InputCommands { forward: true, right: true, up: true, ..default() });

        let expected = start
            + camera.look_direction * MOVE_SPEED
            + camera.right * MOVE_SPEED
            + Vec3::Y * MOVE_SPEED;
        assert!(camera.position.abs_diff_eq(expected, 1e-5));
        assert!(camera.look_at.abs_diff_eq(camera.position + camera.look_direction, 1e-6));
    }

    #[test]
    fn previous_mouse_tracks_the_cursor_without_rotating() {
        let mut camera = EditorCamera::default();
        camera.update(&InputCommands { mouse_x: 300.0, mouse_y: 200.0, ..default() });
        assert_eq!(camera.previous_mouse, Vec2::new(300.0, 200.0));

        // Starting a drag at the same spot produces no rotation.
        camera.update(&rotating(300.0, 200.0));
        assert_eq!(camera.orientation, Vec3::ZERO);
    }

    #[test]
    fn right_vector_is_perpendicular_to_look_and_up() {
        let mut camera = EditorCamera::default();
        camera.update(&rotating(-37.0, 12.0));
        assert!(camera.right.dot(camera.look_direction).abs() < 1e-5);
        assert!(camera.right.dot(Vec3::Y).abs() < 1e-5);
    }
}
