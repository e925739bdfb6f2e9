use bevy::prelude::*;
use constants::terrain::{HEIGHT_SCALE, SIZE_METRES};
use serde::{Deserialize, Serialize};

use super::asset_source::AssetSource;
use crate::engine::scene::display_list::{DisplayList, DisplayObject, ObjectRole};

/// Light kinds carried on scene records. Only copied through the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightType {
    #[default]
    None,
    Directional,
    Point,
    Spot,
}

/// Light parameters of a scene record, copied verbatim onto display objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightParams {
    pub light_type: LightType,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub spot_cutoff: f32,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            light_type: LightType::None,
            diffuse: [1.0, 1.0, 1.0],
            specular: [1.0, 1.0, 1.0],
            spot_cutoff: 0.0,
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

/// One persisted scene object. Rotation is Euler degrees (x pitch, y yaw, z roll).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: u32,
    #[serde(default)]
    pub chunk_id: u32,
    #[serde(default)]
    pub name: String,
    pub model_path: String,
    #[serde(default)]
    pub tex_diffuse_path: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    #[serde(default = "enabled")]
    pub editor_render: bool,
    #[serde(default)]
    pub editor_wireframe: bool,
    #[serde(default)]
    pub light: LightParams,
}

/// Terrain chunk record: where the heightmap lives and how it is scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkObject {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub heightmap_path: String,
    #[serde(default)]
    pub tex_diffuse_path: String,
    #[serde(default = "default_size")]
    pub size_metres: f32,
    #[serde(default = "default_height_scale")]
    pub height_scale: f32,
    #[serde(default = "default_tiling")]
    pub texture_tiling: f32,
}

impl Default for ChunkObject {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            heightmap_path: String::new(),
            tex_diffuse_path: String::new(),
            size_metres: SIZE_METRES,
            height_scale: HEIGHT_SCALE,
            texture_tiling: default_tiling(),
        }
    }
}

/// Scene graph as a Bevy asset. Mirrors the JSON file exactly: an ordered
/// object list plus the terrain chunk.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub chunk: ChunkObject,
}

/// Terrain chunk record of the loaded scene, kept for saving the heightmap.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActiveChunk(pub ChunkObject);

impl SceneGraph {
    /// Rebuild persisted records from the render list. Gizmo entries are skipped
    /// and ids are reassigned in list order.
    pub fn from_display_list(list: &DisplayList, chunk: ChunkObject) -> Self {
        let objects = list
            .iter()
            .filter(|(_, object)| object.role == ObjectRole::Scene)
            .enumerate()
            .map(|(index, (_, object))| object.to_record(index as u32, chunk.id))
            .collect();

        Self { objects, chunk }
    }

    /// Display objects for every record, in file order.
    pub fn display_objects(&self, source: &impl AssetSource) -> Vec<DisplayObject> {
        self.objects
            .iter()
            .map(|record| DisplayObject::from_record(record, source))
            .collect()
    }
}

impl DisplayObject {
    /// Persisted form of a scene display object.
    pub fn to_record(&self, id: u32, chunk_id: u32) -> SceneObject {
        SceneObject {
            id,
            chunk_id,
            name: self.name.clone(),
            model_path: self.model_path.clone(),
            tex_diffuse_path: self.texture_path.clone(),
            position: self.transform.position.to_array(),
            rotation: self.transform.rotation.to_array(),
            scale: self.transform.scale.to_array(),
            editor_render: self.render,
            editor_wireframe: self.wireframe,
            light: self.light,
        }
    }
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn enabled() -> bool {
    true
}

fn default_size() -> f32 {
    SIZE_METRES
}

fn default_height_scale() -> f32 {
    HEIGHT_SCALE
}

fn default_tiling() -> f32 {
    8.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::asset_source::test_support::StubSource;
    use crate::engine::scene::display_list::test_support::gizmo_entries;

    #[test]
    fn sparse_records_fill_in_defaults() {
        let json = r#"{
            "objects": [
                { "id": 4, "model_path": "database/data/rock.glb", "position": [1.0, 2.0, 3.0] }
            ],
            "chunk": { "id": 0, "heightmap_path": "database/data/heightmap.raw" }
        }"#;

        let graph: SceneGraph = serde_json::from_str(json).unwrap();
        let object = &graph.objects[0];

        assert_eq!(object.id, 4);
        assert_eq!(object.scale, [1.0, 1.0, 1.0]);
        assert_eq!(object.rotation, [0.0, 0.0, 0.0]);
        assert!(object.editor_render);
        assert!(!object.editor_wireframe);
        assert_eq!(object.light.light_type, LightType::None);
        assert_eq!(graph.chunk.size_metres, SIZE_METRES);
        assert_eq!(graph.chunk.height_scale, HEIGHT_SCALE);
    }

    #[test]
    fn records_survive_a_trip_through_the_render_list() {
        let json = r#"{
            "objects": [
                { "id": 10, "model_path": "a.glb", "tex_diffuse_path": "a.dds", "position": [1.0, 0.0, 0.0] },
                { "id": 20, "model_path": "b.glb", "position": [0.0, 2.0, 0.0], "editor_wireframe": true }
            ],
            "chunk": { "id": 3, "heightmap_path": "h.raw" }
        }"#;
        let graph: SceneGraph = serde_json::from_str(json).unwrap();
        let source = StubSource::default();

        let mut list = DisplayList::with_gizmo(gizmo_entries());
        for object in graph.display_objects(&source) {
            list.push(object);
        }
        let saved = SceneGraph::from_display_list(&list, graph.chunk.clone());

        assert_eq!(*source.models.borrow(), vec!["a.glb".to_owned(), "b.glb".to_owned()]);
        assert_eq!(saved.objects.len(), 2);
        assert_eq!(saved.objects[0].id, 0);
        assert_eq!(saved.objects[1].id, 1);
        assert_eq!(saved.objects[1].chunk_id, 3);
        assert_eq!(saved.objects[0].tex_diffuse_path, "a.dds");
        assert!(saved.objects[1].editor_wireframe);
        assert_eq!(saved.objects[1].position, [0.0, 2.0, 0.0]);
    }

    #[test]
    fn light_type_uses_lowercase_names() {
        let json = r#"{ "light_type": "spot", "spot_cutoff": 30.0 }"#;
        let light: LightParams = serde_json::from_str(json).unwrap();

        assert_eq!(light.light_type, LightType::Spot);
        assert_eq!(light.spot_cutoff, 30.0);
        assert_eq!(light.constant, 1.0);
    }
}
