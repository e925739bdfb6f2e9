//! Scene records and the asset seam.
//!
//! Handles the JSON scene graph, placeholder and fallback handles,
//! and the thin file adapters used when saving.

/// `AssetSource` seam plus placeholder handles and load-failure fallback.
pub mod asset_source;

/// Heightmap and scene file load/save.
pub mod persistence;

/// Scene graph asset: object records, light parameters and the terrain chunk.
pub mod scene_graph;
