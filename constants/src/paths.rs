/// Scene graph loaded at startup, relative to the asset root.
pub const SCENE_GRAPH_PATH: &str = "database/scene.scene.json";

/// Destination for "save scene".
pub const SCENE_SAVE_PATH: &str = "assets/database/scene.scene.json";

/// Prefix joined onto asset-relative paths when touching the filesystem directly.
pub const ASSET_ROOT: &str = "assets";

pub const PLACEHOLDER_MODEL: &str = "database/data/placeholder.glb";
pub const PLACEHOLDER_TEXTURE: &str = "database/data/placeholder.dds";
pub const ERROR_TEXTURE: &str = "database/data/Error.dds";

pub const RED_TEXTURE: &str = "database/data/red.dds";
pub const GREEN_TEXTURE: &str = "database/data/green.dds";
pub const BLUE_TEXTURE: &str = "database/data/blue.dds";
