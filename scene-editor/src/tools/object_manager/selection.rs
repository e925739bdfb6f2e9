use bevy::prelude::*;

use super::state::{AxisConstraint, DragState, Selection};
use crate::engine::camera::editor_camera::EditorCamera;
use crate::engine::camera::projection::{EditorProjection, EditorViewport};
use crate::engine::input::input_commands::InputCommands;
use crate::engine::picking::object_pick::pick_object;
use crate::engine::picking::ray::PickRay;
use crate::engine::scene::display_list::{DisplayList, GizmoAxis, ObjectId, ObjectRole};
use crate::tools::tool_manager::{ToolManager, ToolMode};

/// What a pick-mode click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A gizmo handle of the current selection.
    Handle(GizmoAxis),
    Object(ObjectId),
    Nothing,
}

/// Resolve a click ray. Gizmo handles only count while something is selected.
pub fn resolve_click(list: &DisplayList, ray: &PickRay, has_selection: bool) -> ClickTarget {
    let Some(hit) = pick_object(list, ray, !has_selection) else {
        return ClickTarget::Nothing;
    };

    match list.get(hit.id).map(|object| object.role) {
        Some(ObjectRole::Gizmo(axis)) => ClickTarget::Handle(axis),
        Some(ObjectRole::Scene) => ClickTarget::Object(hit.id),
        None => ClickTarget::Nothing,
    }
}

// Selects on left click in pick mode and starts a drag on the selection
pub fn pick_on_click(
    input: Res<InputCommands>,
    tool_manager: Res<ToolManager>,
    camera: Res<EditorCamera>,
    projection: Res<EditorProjection>,
    viewport: Res<EditorViewport>,
    list: Res<DisplayList>,
    mut selection: ResMut<Selection>,
    mut drag: ResMut<DragState>,
    mut constraint: ResMut<AxisConstraint>,
) {
    if !input.mouse_left_pressed || !tool_manager.is_active(ToolMode::Pick) {
        return;
    }

    let Some(ray) = PickRay::from_camera(input.cursor(), &camera, &projection, &viewport) else {
        return;
    };

    constraint.clear();
    let target = resolve_click(&list, &ray, selection.id.is_some());
    debug!("Pick at {:?}: {:?}", input.cursor(), target);

    *drag = match target {
        ClickTarget::Handle(axis) => DragState {
            active: true,
            hint: Some(axis),
            last_cursor: input.cursor(),
        },
        ClickTarget::Object(id) => {
            if selection.id != Some(id) {
                info!("Selected object {id}");
                selection.id = Some(id);
            }
            DragState {
                active: true,
                hint: None,
                last_cursor: input.cursor(),
            }
        }
        ClickTarget::Nothing => {
            if selection.id.take().is_some() {
                info!("Selection cleared");
            }
            DragState::default()
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::display_list::test_support::list_with;

    fn forward_ray() -> PickRay {
        PickRay::new(Vec3::ZERO, Vec3::Z).unwrap()
    }

    #[test]
    fn handles_are_ignored_without_a_selection() {
        let mut list = list_with(&[Vec3::new(0.0, 0.0, 8.0)]);
        for (_, entry) in list.gizmo_entries_mut() {
            entry.transform.position = Vec3::new(0.0, 0.0, 3.0);
        }

        assert_eq!(resolve_click(&list, &forward_ray(), false), ClickTarget::Object(ObjectId(3)));
        assert_eq!(
            resolve_click(&list, &forward_ray(), true),
            ClickTarget::Handle(GizmoAxis::Z)
        );
    }

    #[test]
    fn empty_space_resolves_to_nothing() {
        let list = list_with(&[Vec3::new(5.0, 0.0, 8.0)]);
        assert_eq!(resolve_click(&list, &forward_ray(), true), ClickTarget::Nothing);
    }
}
