//! Render list editing: selection, clipboard, translation and placement.
//!
//! ## Selection and dragging
//!
//! In pick mode a left click casts a ray through the cursor:
//! - Hitting a scene object selects it and starts an unconstrained drag
//! - Hitting a gizmo handle of the current selection starts a drag locked
//!   to that handle's axis (the axis sticks until the button is released)
//! - Hitting nothing clears the selection
//!
//! The gizmo entries (the first three render list entries) follow the
//! selection and are parked at a far-off hidden position otherwise.
//!
//! ## Clipboard
//!
//! ```text
//! Ctrl+C  copy selection into the single clipboard slot
//! Ctrl+X  copy, then delete
//! Delete  remove selection (once per key press, erase latch)
//! Ctrl+V  append clipboard copy 3 units in front of the camera
//!         (once per key press, paste latch; releases the erase latch)
//! ```
//!
//! ## Texturing
//!
//! `ApplyColour` and `ResetTexture` events swap the diffuse texture of
//! textured scene objects. Gizmo handles are untextured and never change.

/// Clipboard operations and axis-constrained translation.
pub mod manipulation;

/// Translation gizmo meshes and placement around the selection.
pub mod gizmo;

/// Solid colour painting and texture reset.
pub mod paint;

/// Placeholder object spawning at a point or along the cursor ray.
pub mod placement;

/// Click resolution into selection, handle drags or deselection.
pub mod selection;

/// Selection, clipboard, latches, sticky axis and drag state resources.
pub mod state;
