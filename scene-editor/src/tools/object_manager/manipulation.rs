use bevy::prelude::*;
use constants::editor::{MOVE_SENSITIVITY, PASTE_DISTANCE};

use super::state::{AxisConstraint, Clipboard, DragState, EditLatches, Selection};
use crate::engine::camera::editor_camera::EditorCamera;
use crate::engine::input::input_commands::InputCommands;
use crate::engine::scene::display_list::{DisplayList, DisplayObject, GizmoAxis, ObjectId};
use crate::error::EditError;
use crate::tools::tool_manager::{ToolManager, ToolMode};

/// Snapshot a scene object into the clipboard, replacing any earlier copy.
pub fn copy(list: &DisplayList, clipboard: &mut Clipboard, id: ObjectId) -> Result<(), EditError> {
    let object = list.check_scene(id)?;
    clipboard.slot = Some(object.clone());
    Ok(())
}

/// Append the clipboard object in front of the camera. No-op while the paste
/// latch is engaged or the clipboard is empty.
pub fn paste(
    list: &mut DisplayList,
    clipboard: &Clipboard,
    latches: &mut EditLatches,
    camera: &EditorCamera,
) -> Option<ObjectId> {
    if latches.paste_engaged {
        return None;
    }
    let mut object = clipboard.slot.clone()?;

    object.transform.position = camera.position + camera.look_direction * PASTE_DISTANCE;
    let id = list.push(object);

    latches.paste_engaged = true;
    latches.erase_engaged = false;
    Some(id)
}

/// Remove a scene object unless the erase latch is engaged. Later ids shift
/// down by one.
pub fn delete(
    list: &mut DisplayList,
    latches: &mut EditLatches,
    id: ObjectId,
) -> Result<Option<DisplayObject>, EditError> {
    list.check_scene(id)?;
    if latches.erase_engaged {
        return Ok(None);
    }

    let removed = list.remove(id)?;
    latches.erase_engaged = true;
    Ok(Some(removed))
}

pub fn cut(
    list: &mut DisplayList,
    clipboard: &mut Clipboard,
    latches: &mut EditLatches,
    id: ObjectId,
) -> Result<Option<DisplayObject>, EditError> {
    copy(list, clipboard, id)?;
    delete(list, latches, id)
}

/// Translate a scene object by a screen drag.
///
/// `delta` is previous minus current cursor position. X and Z follow the
/// negated camera-right proportions, Y follows the vertical drag.
pub fn move_object(
    list: &mut DisplayList,
    constraint: &mut AxisConstraint,
    camera_right: Vec3,
    delta: Vec2,
    id: ObjectId,
    hint: Option<GizmoAxis>,
) -> Result<(), EditError> {
    let object = list.scene_object_mut(id)?;

    let x_proportion = -camera_right.x;
    let z_proportion = -camera_right.z;
    let along_x = delta.x * x_proportion * MOVE_SENSITIVITY;
    let along_y = delta.y * MOVE_SENSITIVITY;
    let along_z = delta.x * z_proportion * MOVE_SENSITIVITY;

    let offset = match constraint.resolve(hint) {
        Some(GizmoAxis::X) => Vec3::new(along_x, 0.0, 0.0),
        Some(GizmoAxis::Y) => Vec3::new(0.0, along_y, 0.0),
        Some(GizmoAxis::Z) => Vec3::new(0.0, 0.0, along_z),
        None => Vec3::new(along_x, along_y, along_z),
    };

    object.transform.position += offset;
    Ok(())
}

/// Copy, cut, delete and paste from the frame's edit keys.
pub fn handle_clipboard_commands(
    input: Res<InputCommands>,
    camera: Res<EditorCamera>,
    mut selection: ResMut<Selection>,
    mut list: ResMut<DisplayList>,
    mut clipboard: ResMut<Clipboard>,
    mut latches: ResMut<EditLatches>,
    mut constraint: ResMut<AxisConstraint>,
) {
    latches.release_unheld(&input);

    if let Some(id) = selection.id {
        if input.copy {
            if let Err(error) = copy(&list, &mut clipboard, id) {
                warn!("Copy ignored: {error}");
            }
        }

        let erased = if input.cut {
            cut(&mut list, &mut clipboard, &mut latches, id)
        } else if input.delete {
            delete(&mut list, &mut latches, id)
        } else {
            Ok(None)
        };

        match erased {
            Ok(Some(_)) => {
                info!("Removed object {id}");
                selection.id = None;
                constraint.clear();
            }
            Ok(None) => {}
            Err(error) => warn!("Erase ignored: {error}"),
        }
    }

    if input.paste {
        if let Some(id) = paste(&mut list, &clipboard, &mut latches, &camera) {
            info!("Pasted object {id}");
        }
    }
}

/// Move the selection while the left button stays down after a pick.
pub fn drag_selected_object(
    input: Res<InputCommands>,
    tool_manager: Res<ToolManager>,
    camera: Res<EditorCamera>,
    selection: Res<Selection>,
    mut drag: ResMut<DragState>,
    mut constraint: ResMut<AxisConstraint>,
    mut list: ResMut<DisplayList>,
) {
    if !drag.active {
        return;
    }

    let released = input.mouse_left_released || !input.mouse_left_down;
    if released || !tool_manager.is_active(ToolMode::Pick) {
        drag.active = false;
        drag.hint = None;
        constraint.clear();
        return;
    }

    let cursor = input.cursor();
    let delta = drag.last_cursor - cursor;
    drag.last_cursor = cursor;

    let Some(id) = selection.id else {
        return;
    };
    if delta == Vec2::ZERO {
        return;
    }

    if let Err(error) = move_object(&mut list, &mut constraint, camera.right, delta, id, drag.hint) {
        warn!("Move ignored: {error}");
        drag.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::display_list::test_support::list_with;

    #[test]
    fn paste_with_empty_clipboard_is_a_no_op() {
        let mut list = list_with(&[Vec3::ZERO]);
        let mut latches = EditLatches::default();
        let camera = EditorCamera::default();

        let pasted = paste(&mut list, &Clipboard::default(), &mut latches, &camera);

        assert_eq!(pasted, None);
        assert_eq!(list.len(), 4);
        assert_eq!(latches, EditLatches::default());
    }

    #[test]
    fn paste_lands_in_front_of_the_camera_once_per_latch() {
        let mut list = list_with(&[Vec3::ONE]);
        let mut clipboard = Clipboard::default();
        let mut latches = EditLatches {
            paste_engaged: false,
            erase_engaged: true,
        };
        let camera = EditorCamera::new(Vec3::new(1.0, 2.0, 3.0));

        copy(&list, &mut clipboard, ObjectId(3)).unwrap();
        let id = paste(&mut list, &clipboard, &mut latches, &camera).unwrap();

        assert_eq!(id, ObjectId(4));
        let pasted = list.get(id).unwrap();
        assert_eq!(pasted.transform.position, camera.position + camera.look_direction * 3.0);
        assert!(latches.paste_engaged);
        assert!(!latches.erase_engaged);

        assert_eq!(paste(&mut list, &clipboard, &mut latches, &camera), None);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn second_delete_without_latch_reset_does_nothing() {
        let mut list = list_with(&[Vec3::X, Vec3::Y, Vec3::Z]);
        let mut latches = EditLatches::default();

        assert!(delete(&mut list, &mut latches, ObjectId(3)).unwrap().is_some());
        assert!(delete(&mut list, &mut latches, ObjectId(3)).unwrap().is_none());
        assert_eq!(list.scene_len(), 2);
    }

    #[test]
    fn invalid_ids_are_errors() {
        let mut list = list_with(&[Vec3::ZERO]);
        let mut clipboard = Clipboard::default();
        let mut latches = EditLatches::default();
        let mut constraint = AxisConstraint::default();

        assert_eq!(
            copy(&list, &mut clipboard, ObjectId(7)),
            Err(EditError::InvalidObjectId { id: 7, len: 4 })
        );
        assert_eq!(
            delete(&mut list, &mut latches, ObjectId(0)).unwrap_err(),
            EditError::GizmoObject(0)
        );
        assert_eq!(
            move_object(&mut list, &mut constraint, Vec3::X, Vec2::ONE, ObjectId(5), None),
            Err(EditError::InvalidObjectId { id: 5, len: 4 })
        );
        assert!(!clipboard.is_valid());
        assert!(!latches.erase_engaged);
    }

    #[test]
    fn cut_keeps_a_copy_and_removes_the_object() {
        let mut list = list_with(&[Vec3::new(4.0, 0.0, 0.0)]);
        let mut clipboard = Clipboard::default();
        let mut latches = EditLatches::default();

        cut(&mut list, &mut clipboard, &mut latches, ObjectId(3)).unwrap();

        assert_eq!(list.scene_len(), 0);
        let copied = clipboard.slot.as_ref().unwrap();
        assert_eq!(copied.transform.position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn constrained_moves_touch_one_axis() {
        let mut list = list_with(&[Vec3::ZERO]);
        let id = ObjectId(3);
        let right = Vec3::NEG_X;

        let mut constraint = AxisConstraint::default();
        move_object(&mut list, &mut constraint, right, Vec2::new(2.0, 5.0), id, Some(GizmoAxis::X))
            .unwrap();
        let position = list.get(id).unwrap().transform.position;
        assert!((position - Vec3::new(0.2, 0.0, 0.0)).length() < 1e-6);

        // the axis sticks even when a different hint arrives
        move_object(&mut list, &mut constraint, right, Vec2::new(0.0, 3.0), id, Some(GizmoAxis::Y))
            .unwrap();
        let position = list.get(id).unwrap().transform.position;
        assert!((position - Vec3::new(0.2, 0.0, 0.0)).length() < 1e-6);

        constraint.clear();
        move_object(&mut list, &mut constraint, right, Vec2::new(0.0, 3.0), id, Some(GizmoAxis::Y))
            .unwrap();
        let position = list.get(id).unwrap().transform.position;
        assert!((position - Vec3::new(0.2, 0.3, 0.0)).length() < 1e-6);
    }

    #[test]
    fn unconstrained_move_uses_all_three_axes() {
        let mut list = list_with(&[Vec3::ZERO]);
        let mut constraint = AxisConstraint::default();

        move_object(
            &mut list,
            &mut constraint,
            Vec3::new(-0.6, 0.0, -0.8),
            Vec2::new(1.0, 1.0),
            ObjectId(3),
            None,
        )
        .unwrap();

        let position = list.get(ObjectId(3)).unwrap().transform.position;
        assert!((position - Vec3::new(0.06, 0.1, 0.08)).length() < 1e-6);
    }
}
