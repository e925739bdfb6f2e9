//! Mirrors the editing core into Bevy render entities.
//!
//! The core never touches entities directly. Sync systems run last in the
//! frame and copy the render list, terrain grid and status into meshes,
//! materials and HUD text.

/// Render list to mesh entity sync, materials and wireframe flags.
///
/// Respawns entities when the list structure changes and updates transforms in place otherwise.
pub mod display_sync;

/// Status overlay text.
pub mod hud;

/// Terrain grid to triangle mesh conversion and terrain entity sync.
pub mod terrain_mesh;
