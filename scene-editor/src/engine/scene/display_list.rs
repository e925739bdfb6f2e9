//! Render list owned by the editing core.
//!
//! Entries are addressed by position. The first three entries of a populated
//! list are the translation gizmo; everything after them is scene content.

use std::fmt;

use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use constants::editor::{GIZMO_ENTRY_COUNT, GIZMO_PARKED_POSITION, GIZMO_SCALE};

use crate::engine::assets::asset_source::AssetSource;
use crate::engine::assets::scene_graph::{LightParams, SceneObject};
use crate::error::EditError;

/// Position of an entry in the render list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// World axis a gizmo entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    /// Gizmo entries in list order: forward, right, up.
    pub const ENTRY_ORDER: [GizmoAxis; GIZMO_ENTRY_COUNT] = [GizmoAxis::Z, GizmoAxis::X, GizmoAxis::Y];

    pub fn direction(self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GizmoAxis::X => "X",
            GizmoAxis::Y => "Y",
            GizmoAxis::Z => "Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectRole {
    Gizmo(GizmoAxis),
    Scene,
}

impl ObjectRole {
    pub fn is_gizmo(self) -> bool {
        matches!(self, ObjectRole::Gizmo(_))
    }

    pub fn gizmo_axis(self) -> Option<GizmoAxis> {
        match self {
            ObjectRole::Gizmo(axis) => Some(axis),
            ObjectRole::Scene => None,
        }
    }
}

/// Whether an object's material accepts a diffuse texture. Fixed when the
/// object is built; texture changes on untextured objects are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialCapability {
    DiffuseTextured,
    Untextured,
}

/// Position, Euler rotation in degrees and scale of a display object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

impl ObjectTransform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Yaw, then pitch, then roll.
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y.to_radians(),
            self.rotation.x.to_radians(),
            self.rotation.z.to_radians(),
        )
    }

    pub fn world_from_local(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }

    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.position,
            rotation: self.rotation_quat(),
            scale: self.scale,
        }
    }
}

/// Axis-aligned box in object-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for LocalBounds {
    fn default() -> Self {
        Self::from_half_extents(Vec3::ZERO, Vec3::splat(0.5))
    }
}

impl LocalBounds {
    pub fn from_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::from_half_extents(Vec3::from(aabb.center), Vec3::from(aabb.half_extents))
    }
}

/// Render record derived from a scene object, or one of the gizmo handles.
#[derive(Debug, Clone)]
pub struct DisplayObject {
    pub role: ObjectRole,
    pub name: String,
    pub transform: ObjectTransform,
    pub model_path: String,
    pub texture_path: String,
    pub mesh: Handle<Mesh>,
    pub texture: Handle<Image>,
    pub material: MaterialCapability,
    /// Local box; `None` until the mesh has loaded, picking then uses a unit cube.
    pub bounds: Option<LocalBounds>,
    pub render: bool,
    pub wireframe: bool,
    pub light: LightParams,
}

impl DisplayObject {
    /// Scene object loaded from asset paths. An empty texture path resolves to
    /// the error texture.
    pub fn scene(
        model_path: &str,
        texture_path: &str,
        transform: ObjectTransform,
        source: &impl AssetSource,
    ) -> Self {
        Self {
            role: ObjectRole::Scene,
            name: String::new(),
            transform,
            model_path: model_path.to_owned(),
            texture_path: texture_path.to_owned(),
            mesh: source.model(model_path),
            texture: source.texture_or_error(texture_path),
            material: MaterialCapability::DiffuseTextured,
            bounds: None,
            render: true,
            wireframe: false,
            light: LightParams::default(),
        }
    }

    pub fn from_record(record: &SceneObject, source: &impl AssetSource) -> Self {
        let transform = ObjectTransform {
            position: Vec3::from_array(record.position),
            rotation: Vec3::from_array(record.rotation),
            scale: Vec3::from_array(record.scale),
        };

        Self {
            name: record.name.clone(),
            render: record.editor_render,
            wireframe: record.editor_wireframe,
            light: record.light,
            ..Self::scene(&record.model_path, &record.tex_diffuse_path, transform, source)
        }
    }

    /// Gizmo handle for one axis, parked out of view and hidden.
    pub fn gizmo(axis: GizmoAxis, mesh: Handle<Mesh>, bounds: LocalBounds) -> Self {
        Self {
            role: ObjectRole::Gizmo(axis),
            name: format!("gizmo {}", axis.label()),
            transform: ObjectTransform {
                position: GIZMO_PARKED_POSITION,
                rotation: Vec3::ZERO,
                scale: Vec3::splat(GIZMO_SCALE),
            },
            model_path: String::new(),
            texture_path: String::new(),
            mesh,
            texture: Handle::default(),
            material: MaterialCapability::Untextured,
            bounds: Some(bounds),
            render: false,
            wireframe: false,
            light: LightParams::default(),
        }
    }

    pub fn local_bounds(&self) -> LocalBounds {
        self.bounds.unwrap_or_default()
    }

    /// Swap the diffuse texture. Returns `false` for untextured materials.
    pub fn set_texture(&mut self, path: &str, texture: Handle<Image>) -> bool {
        match self.material {
            MaterialCapability::DiffuseTextured => {
                self.texture_path = path.to_owned();
                self.texture = texture;
                true
            }
            MaterialCapability::Untextured => false,
        }
    }
}

/// Ordered render list. `revision` changes whenever entries are added,
/// removed or swap their assets, so render sync knows to respawn.
#[derive(Resource, Debug, Default)]
pub struct DisplayList {
    objects: Vec<DisplayObject>,
    revision: u64,
}

impl DisplayList {
    pub fn with_gizmo(gizmo: [DisplayObject; GIZMO_ENTRY_COUNT]) -> Self {
        let mut list = Self::default();
        list.rebuild(gizmo, Vec::new());
        list
    }

    /// Replace the whole list: gizmo entries first, then scene objects in order.
    pub fn rebuild(
        &mut self,
        gizmo: [DisplayObject; GIZMO_ENTRY_COUNT],
        scene: impl IntoIterator<Item = DisplayObject>,
    ) {
        self.objects.clear();
        self.objects.extend(gizmo);
        self.objects.extend(scene);
        self.mark_structure_changed();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn scene_len(&self) -> usize {
        self.objects
            .iter()
            .filter(|object| object.role == ObjectRole::Scene)
            .count()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn mark_structure_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn get(&self, id: ObjectId) -> Option<&DisplayObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut DisplayObject> {
        self.objects.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &DisplayObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut DisplayObject)> {
        self.objects
            .iter_mut()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    /// Gizmo entries with their axes, in list order.
    pub fn gizmo_entries_mut(&mut self) -> impl Iterator<Item = (GizmoAxis, &mut DisplayObject)> {
        self.objects
            .iter_mut()
            .filter_map(|object| object.role.gizmo_axis().map(|axis| (axis, object)))
    }

    /// Validates that `id` addresses an existing entry.
    pub fn check(&self, id: ObjectId) -> Result<&DisplayObject, EditError> {
        self.objects.get(id.0).ok_or(EditError::InvalidObjectId {
            id: id.0,
            len: self.objects.len(),
        })
    }

    /// Validates that `id` addresses an existing scene entry.
    pub fn check_scene(&self, id: ObjectId) -> Result<&DisplayObject, EditError> {
        let object = self.check(id)?;
        if object.role.is_gizmo() {
            return Err(EditError::GizmoObject(id.0));
        }
        Ok(object)
    }

    pub fn scene_object_mut(&mut self, id: ObjectId) -> Result<&mut DisplayObject, EditError> {
        self.check_scene(id)?;
        Ok(&mut self.objects[id.0])
    }

    /// Append and return the new entry's id (the list length before insert).
    pub fn push(&mut self, object: DisplayObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        self.mark_structure_changed();
        id
    }

    /// Remove a scene entry; later ids shift down by one.
    pub fn remove(&mut self, id: ObjectId) -> Result<DisplayObject, EditError> {
        self.check_scene(id)?;
        let removed = self.objects.remove(id.0);
        self.mark_structure_changed();
        Ok(removed)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn gizmo_entries_lead_the_list() {
        let list = list_with(&[Vec3::ZERO]);

        let roles: Vec<_> = list.iter().map(|(_, object)| object.role).collect();
        assert_eq!(
            roles,
            vec![
                ObjectRole::Gizmo(GizmoAxis::Z),
                ObjectRole::Gizmo(GizmoAxis::X),
                ObjectRole::Gizmo(GizmoAxis::Y),
                ObjectRole::Scene,
            ]
        );
        assert_eq!(list.scene_len(), 1);
    }

    #[test]
    fn remove_shifts_later_ids_down() {
        let mut list = list_with(&[Vec3::X, Vec3::Y, Vec3::Z]);
        let revision = list.revision();

        let removed = list.remove(ObjectId(4)).unwrap();

        assert_eq!(removed.transform.position, Vec3::Y);
        assert_eq!(list.get(ObjectId(4)).unwrap().transform.position, Vec3::Z);
        assert_eq!(list.len(), 5);
        assert_ne!(list.revision(), revision);
    }

    #[test]
    fn invalid_and_gizmo_ids_are_rejected() {
        let mut list = list_with(&[Vec3::ZERO]);

        assert_eq!(
            list.remove(ObjectId(9)).unwrap_err(),
            EditError::InvalidObjectId { id: 9, len: 4 }
        );
        assert_eq!(list.remove(ObjectId(1)).unwrap_err(), EditError::GizmoObject(1));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn push_returns_length_before_insert() {
        let mut list = list_with(&[]);
        assert_eq!(list.push(scene_object(Vec3::ONE)), ObjectId(3));
    }

    #[test]
    fn untextured_material_keeps_its_texture() {
        let mut gizmo = gizmo_entries();
        assert!(!gizmo[0].set_texture("red.dds", Handle::default()));
        assert!(gizmo[0].texture_path.is_empty());

        let mut object = scene_object(Vec3::ZERO);
        assert!(object.set_texture("red.dds", Handle::default()));
        assert_eq!(object.texture_path, "red.dds");
    }

    #[test]
    fn rotation_applies_yaw_about_world_up() {
        let transform = ObjectTransform {
            position: Vec3::ZERO,
            rotation: Vec3::new(0.0, 90.0, 0.0),
            scale: Vec3::ONE,
        };

        let forward = transform.rotation_quat() * Vec3::Z;
        assert!((forward - Vec3::X).length() < 1e-5);
    }
}
