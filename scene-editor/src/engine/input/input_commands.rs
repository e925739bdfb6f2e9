use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::projection::EditorViewport;

/// Immutable view of the user's input for one frame.
///
/// Rebuilt from scratch every frame by [`collect_input_commands`]; no field
/// carries state across frames except the cursor position, which holds its
/// last value while the cursor is outside the window.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputCommands {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,

    pub mouse_x: f32,
    pub mouse_y: f32,
    pub mouse_left_down: bool,
    pub mouse_right_down: bool,
    /// Left button went down this frame.
    pub mouse_left_pressed: bool,
    /// Left button came up this frame.
    pub mouse_left_released: bool,

    pub copy: bool,
    pub paste: bool,
    pub cut: bool,
    pub delete: bool,
    /// Forwarded for the host; the editing core keeps no undo history.
    pub redo: bool,

    /// +1 raises terrain, -1 lowers it, 0 while not sculpting.
    pub terrain_direction: f32,
    /// Either control key is held.
    pub modifier: bool,
}

impl InputCommands {
    /// Build a snapshot from device state and a cursor position in window pixels.
    pub fn from_devices(
        keyboard: &ButtonInput<KeyCode>,
        mouse: &ButtonInput<MouseButton>,
        cursor: Vec2,
    ) -> Self {
        let modifier = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
        let lowering = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        let mouse_left_down = mouse.pressed(MouseButton::Left);

        let terrain_direction = match (mouse_left_down, lowering) {
            (false, _) => 0.0,
            (true, false) => 1.0,
            (true, true) => -1.0,
        };

        Self {
            forward: keyboard.pressed(KeyCode::KeyW),
            back: keyboard.pressed(KeyCode::KeyS),
            left: keyboard.pressed(KeyCode::KeyA),
            right: keyboard.pressed(KeyCode::KeyD),
            up: keyboard.pressed(KeyCode::KeyE),
            down: keyboard.pressed(KeyCode::KeyQ),
            mouse_x: cursor.x,
            mouse_y: cursor.y,
            mouse_left_down,
            mouse_right_down: mouse.pressed(MouseButton::Right),
            mouse_left_pressed: mouse.just_pressed(MouseButton::Left),
            mouse_left_released: mouse.just_released(MouseButton::Left),
            copy: modifier && keyboard.pressed(KeyCode::KeyC),
            paste: modifier && keyboard.pressed(KeyCode::KeyV),
            cut: modifier && keyboard.pressed(KeyCode::KeyX),
            delete: keyboard.pressed(KeyCode::Delete),
            redo: modifier && keyboard.pressed(KeyCode::KeyY),
            terrain_direction,
            modifier,
        }
    }

    pub fn cursor(&self) -> Vec2 {
        Vec2::new(self.mouse_x, self.mouse_y)
    }
}

/// Rebuild the frame's [`InputCommands`] and track the viewport size.
pub fn collect_input_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<InputCommands>,
    mut viewport: ResMut<EditorViewport>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    viewport.set_size(window.width(), window.height());

    let cursor = window.cursor_position().unwrap_or(input.cursor());
    *input = InputCommands::from_devices(&keyboard, &mouse, cursor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_flags() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyD);
        keyboard.press(KeyCode::KeyQ);
        let mouse = ButtonInput::<MouseButton>::default();

        let input = InputCommands::from_devices(&keyboard, &mouse, Vec2::new(12.0, 40.0));

        assert!(input.forward && input.right && input.down);
        assert!(!input.back && !input.left && !input.up);
        assert_eq!(input.cursor(), Vec2::new(12.0, 40.0));
    }

    #[test]
    fn clipboard_keys_need_the_modifier() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyC);
        let mouse = ButtonInput::<MouseButton>::default();

        let bare = InputCommands::from_devices(&keyboard, &mouse, Vec2::ZERO);
        assert!(!bare.copy);

        keyboard.press(KeyCode::ControlLeft);
        let held = InputCommands::from_devices(&keyboard, &mouse, Vec2::ZERO);
        assert!(held.copy && held.modifier);
    }

    #[test]
    fn terrain_direction_follows_left_button_and_shift() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        let mut mouse = ButtonInput::<MouseButton>::default();
        assert_eq!(
            InputCommands::from_devices(&keyboard, &mouse, Vec2::ZERO).terrain_direction,
            0.0
        );

        mouse.press(MouseButton::Left);
        let raising = InputCommands::from_devices(&keyboard, &mouse, Vec2::ZERO);
        assert_eq!(raising.terrain_direction, 1.0);
        assert!(raising.mouse_left_pressed);

        keyboard.press(KeyCode::ShiftLeft);
        assert_eq!(
            InputCommands::from_devices(&keyboard, &mouse, Vec2::ZERO).terrain_direction,
            -1.0
        );
    }
}
