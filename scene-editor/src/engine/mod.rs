pub mod assets;
pub mod camera;
pub mod core;
pub mod input;
pub mod picking;
pub mod render;
pub mod scene;
pub mod systems;
