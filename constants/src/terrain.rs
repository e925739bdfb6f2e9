/// Vertices along each side of the terrain grid.
pub const RESOLUTION: usize = 128;

/// World-space side length of the terrain chunk.
pub const SIZE_METRES: f32 = 512.0;

/// Height units per heightmap byte.
pub const HEIGHT_SCALE: f32 = 0.25;

pub const MIN_HEIGHT: f32 = 0.0;
pub const MAX_HEIGHT: f32 = 64.0;

/// Full-strength brush radius.
pub const INNER_RADIUS: f32 = 15.0;

/// Beyond this radius the brush has no effect.
pub const OUTER_RADIUS: f32 = 25.0;

/// Height change per application at full strength.
pub const STEP: f32 = 0.25;

/// Width of the linear falloff band between the inner and outer radius.
pub const FALLOFF_WIDTH: f32 = 10.0;
