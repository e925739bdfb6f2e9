use bevy::prelude::*;
use constants::editor::{
    GIZMO_ENTRY_COUNT, GIZMO_HANDLE_LENGTH, GIZMO_HANDLE_THICKNESS, GIZMO_OFFSETS,
    GIZMO_PARKED_POSITION,
};

use super::state::Selection;
use crate::engine::scene::display_list::{
    DisplayList, DisplayObject, GizmoAxis, LocalBounds, ObjectId, ObjectRole,
};

/// Meshes for the three translation handles, one per axis.
#[derive(Resource, Debug, Clone, Default)]
pub struct GizmoAssets {
    pub x: Handle<Mesh>,
    pub y: Handle<Mesh>,
    pub z: Handle<Mesh>,
}

impl GizmoAssets {
    pub fn create(meshes: &mut Assets<Mesh>) -> Self {
        let mut handle = |axis: GizmoAxis| {
            let bounds = handle_bounds(axis);
            let size = bounds.max - bounds.min;
            let mesh = Cuboid::new(size.x, size.y, size.z)
                .mesh()
                .build()
                .translated_by((bounds.min + bounds.max) * 0.5);
            meshes.add(mesh)
        };

        Self {
            x: handle(GizmoAxis::X),
            y: handle(GizmoAxis::Y),
            z: handle(GizmoAxis::Z),
        }
    }

    pub fn mesh(&self, axis: GizmoAxis) -> Handle<Mesh> {
        match axis {
            GizmoAxis::X => self.x.clone(),
            GizmoAxis::Y => self.y.clone(),
            GizmoAxis::Z => self.z.clone(),
        }
    }

    /// Parked, hidden gizmo entries in list order.
    pub fn display_objects(&self) -> [DisplayObject; GIZMO_ENTRY_COUNT] {
        GizmoAxis::ENTRY_ORDER
            .map(|axis| DisplayObject::gizmo(axis, self.mesh(axis), handle_bounds(axis)))
    }
}

/// Build the handle meshes and seed the render list with the parked gizmo.
pub fn create_gizmo_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut list: ResMut<DisplayList>,
) {
    let gizmo = GizmoAssets::create(&mut meshes);
    list.rebuild(gizmo.display_objects(), Vec::new());
    commands.insert_resource(gizmo);
}

/// Bar running from the handle origin along its axis.
pub fn handle_bounds(axis: GizmoAxis) -> LocalBounds {
    let direction = axis.direction();
    let half_thickness = Vec3::splat(GIZMO_HANDLE_THICKNESS * 0.5);
    let half_extents = half_thickness.max(direction * GIZMO_HANDLE_LENGTH * 0.5);
    LocalBounds::from_half_extents(direction * GIZMO_HANDLE_LENGTH * 0.5, half_extents)
}

/// Place the gizmo on the selected scene object, or park it hidden.
pub fn update_gizmo(list: &mut DisplayList, selected: Option<ObjectId>) {
    let target = selected
        .and_then(|id| list.get(id))
        .filter(|object| object.role == ObjectRole::Scene)
        .map(|object| object.transform);

    for (index, (_, entry)) in list.gizmo_entries_mut().enumerate() {
        match target {
            Some(transform) => {
                entry.transform.position = transform.position + GIZMO_OFFSETS[index];
                entry.transform.rotation = transform.rotation;
                entry.render = true;
            }
            None => {
                entry.transform.position = GIZMO_PARKED_POSITION;
                entry.render = false;
            }
        }
    }
}

/// Keep the gizmo on the selection after any selection or list change.
pub fn sync_gizmo_to_selection(selection: Res<Selection>, mut list: ResMut<DisplayList>) {
    if !selection.is_changed() && !list.is_changed() {
        return;
    }
    update_gizmo(&mut list, selection.id);
}
