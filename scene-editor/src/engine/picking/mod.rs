//! Ray casts from the cursor into the scene.
//!
//! Rays are built by unprojecting the cursor through the editor's finite
//! projection, then tested against object boxes or terrain quads.

/// Closest render list entry under a ray.
pub mod object_pick;

/// Cursor ray construction and slab-method box tests.
pub mod ray;

/// Ray against the terrain height field with first-found or nearest policy.
pub mod terrain_pick;
