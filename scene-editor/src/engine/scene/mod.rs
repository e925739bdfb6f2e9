//! Editable scene state.
//!
//! Holds the render list and the terrain height field, plus the debug grid
//! overlay drawn around them.

/// Ordered render list with gizmo entries, object roles and local bounds.
pub mod display_list;

/// World-space reference grid drawn with line gizmos.
pub mod grid;

/// 128×128 height field with cached normals.
pub mod terrain_grid;
