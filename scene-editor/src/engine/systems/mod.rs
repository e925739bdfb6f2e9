//! Runtime display toggles.

/// Wireframe and grid toggles with their keyboard handling.
pub mod render_mode;
