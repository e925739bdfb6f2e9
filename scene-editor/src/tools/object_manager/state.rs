use bevy::prelude::*;

use crate::engine::input::input_commands::InputCommands;
use crate::engine::scene::display_list::{DisplayObject, GizmoAxis, ObjectId};

// Resources
/// Currently selected render list entry.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub id: Option<ObjectId>,
}

/// Single-object copy buffer.
#[derive(Resource, Debug, Clone, Default)]
pub struct Clipboard {
    pub slot: Option<DisplayObject>,
}

impl Clipboard {
    pub fn is_valid(&self) -> bool {
        self.slot.is_some()
    }
}

/// One-shot guards so a held paste or delete key acts once.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditLatches {
    pub paste_engaged: bool,
    pub erase_engaged: bool,
}

impl EditLatches {
    /// Release the latches whose keys are no longer held.
    pub fn release_unheld(&mut self, input: &InputCommands) {
        if !input.paste {
            self.paste_engaged = false;
        }
        if !input.delete && !input.cut {
            self.erase_engaged = false;
        }
    }
}

/// Sticky translation axis. Once adopted it holds until cleared.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisConstraint {
    pub axis: Option<GizmoAxis>,
}

impl AxisConstraint {
    /// Keep the current axis, otherwise adopt `hint`.
    pub fn resolve(&mut self, hint: Option<GizmoAxis>) -> Option<GizmoAxis> {
        if self.axis.is_none() {
            self.axis = hint;
        }
        self.axis
    }

    pub fn clear(&mut self) {
        self.axis = None;
    }
}

/// Left-button drag in progress on the selection.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    /// Axis of the gizmo handle the drag started on.
    pub hint: Option<GizmoAxis>,
    pub last_cursor: Vec2,
}
