//! Interactive editing tools driven by the frame's input snapshot.
//!
//! ## Tool Manager Architecture
//!
//! The `ToolManager` resource holds exactly one active `ToolMode`:
//! - Tools are switched via keyboard shortcuts or `ToolSelectionEvent`s from the host
//! - Switching tools ends any object drag in progress
//!
//! ### Tool Activation Flow
//!
//! ```text
//! Keyboard/Host Input
//!   └─> ToolSelectionEvent
//!       └─> handle_tool_selection_events()
//!           ├─> Activate requested tool
//!           └─> Cancel drag state
//! ```
//!
//! ## Available Tools
//!
//! ### Mouse Pick (`ToolMode::Pick`)
//! - **Activation**: `F1`
//! - **Workflow**:
//!   1. Left click selects the nearest object under the cursor
//!   2. Dragging moves the selection (screen-relative X/Z, vertical drag for Y)
//!   3. Dragging a gizmo handle locks the move to that handle's axis
//!
//! ### Place Object (`ToolMode::Place`)
//! - **Activation**: `F2`
//! - **Workflow**: left click drops the placeholder object 10 units along the
//!   cursor ray and selects it
//!
//! ### Edit Terrain (`ToolMode::TerrainEdit`)
//! - **Activation**: `F3`
//! - **Workflow**:
//!   1. Holding the left button raises terrain under the cursor (`Shift` lowers)
//!   2. Normals are rebuilt once the button is released
//!
//! ## Other Shortcuts
//!
//! - `1`/`2`/`3` paint the selection red/green/blue, `0` restores its texture
//! - `Ctrl+S` saves the scene graph, `Ctrl+T` saves the heightmap
//! - `F4` toggles wireframe, `F5` toggles the grid

/// Selection, clipboard, gizmo, placement and painting of render list entries.
pub mod object_manager;

/// Editor status snapshot and status line text.
pub mod status;

/// Terrain brush and the sculpting system.
pub mod terrain_editor;

/// Tool manager coordinating exclusive tool activation and keyboard shortcuts.
pub mod tool_manager;
