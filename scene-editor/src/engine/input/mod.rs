//! Input glue between the window and the editing core.
//!
//! Raw keyboard, mouse and cursor state is folded into a single
//! `InputCommands` snapshot once per frame, before any camera or tool system
//! runs. Everything downstream reads the snapshot rather than the devices.

/// Per-frame input snapshot and the system that rebuilds it.
pub mod input_commands;
