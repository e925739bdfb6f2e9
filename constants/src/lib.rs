//! Shared tuning constants for the scene editor.
//!
//! Grouped by the subsystem that consumes them so the editor crate can pull
//! in only what it needs, e.g. `constants::terrain::OUTER_RADIUS`.

/// Fly camera movement, rotation and initial pose.
pub mod camera;

/// Editing tool sensitivities, gizmo layout and clipboard placement.
pub mod editor;

/// Asset paths for scene data, placeholder assets and paint textures.
pub mod paths;

/// Projection, debug grid and HUD settings.
pub mod render_settings;

/// Heightfield resolution, world extent and sculpting brush.
pub mod terrain;
