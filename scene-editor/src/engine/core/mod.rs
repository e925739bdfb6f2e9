//! Core application setup and state management.
//!
//! Handles the application lifecycle, window configuration, the loading to
//! running transition and the plugin split between editing core, input glue
//! and rendering.

/// Application setup, frame stage ordering and plugin configuration.
///
/// Creates the main app with the window, JSON scene graph loading, wireframe
/// support and the editor plugins.
pub mod app_setup;

/// Application state machine and scene graph loading.
///
/// Moves from loading the scene graph to running once the render list and terrain are built.
pub mod app_state;

/// Window configuration for the native build.
pub mod window_config;
