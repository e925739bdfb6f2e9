//! Viewport camera for scene navigation.
//!
//! A first-person fly camera driven by the per-frame input snapshot, plus the
//! projection and viewport state that picking needs to unproject the cursor.

/// Fly camera resource and the systems applying it to the render camera.
pub mod editor_camera;

/// Perspective projection settings and viewport dimensions.
pub mod projection;
