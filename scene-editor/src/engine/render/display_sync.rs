use bevy::pbr::wireframe::{NoWireframe, Wireframe};
use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;
use constants::render_settings::{GIZMO_X_COLOUR, GIZMO_Y_COLOUR, GIZMO_Z_COLOUR};

use crate::engine::scene::display_list::{
    DisplayList, DisplayObject, GizmoAxis, LocalBounds, MaterialCapability, ObjectId, ObjectRole,
};
use crate::engine::systems::render_mode::RenderSettings;

/// Render entity mirroring one render list entry.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntity(pub ObjectId);

/// Render list revision the current display entities were spawned from.
#[derive(Resource, Debug, Default)]
pub struct DisplaySyncState {
    spawned_revision: Option<u64>,
}

impl DisplaySyncState {
    pub fn needs_respawn(&self, list: &DisplayList) -> bool {
        self.spawned_revision != Some(list.revision())
    }
}

pub fn gizmo_colour(axis: GizmoAxis) -> Color {
    match axis {
        GizmoAxis::X => GIZMO_X_COLOUR,
        GizmoAxis::Y => GIZMO_Y_COLOUR,
        GizmoAxis::Z => GIZMO_Z_COLOUR,
    }
}

/// Material for one entry: gizmo handles are flat axis colours, scene
/// objects sample their diffuse texture.
pub fn display_material(object: &DisplayObject) -> StandardMaterial {
    match (object.role, object.material) {
        (ObjectRole::Gizmo(axis), _) => StandardMaterial {
            base_color: gizmo_colour(axis),
            unlit: true,
            ..default()
        },
        (ObjectRole::Scene, MaterialCapability::DiffuseTextured) => StandardMaterial {
            base_color_texture: Some(object.texture.clone()),
            ..default()
        },
        (ObjectRole::Scene, MaterialCapability::Untextured) => StandardMaterial::default(),
    }
}

/// Scene objects draw as wireframe only while global wireframe mode is on.
/// Gizmo handles never do. A record's own `wireframe` flag is only persisted.
pub fn draws_wireframe(object: &DisplayObject, settings: &RenderSettings) -> bool {
    object.role == ObjectRole::Scene && settings.wireframe
}

fn visibility_of(object: &DisplayObject) -> Visibility {
    if object.render {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Mirror the render list into mesh entities. Structural changes respawn
/// everything; otherwise only transforms, visibility and wireframe update.
pub fn sync_display_entities(
    mut commands: Commands,
    list: Res<DisplayList>,
    settings: Res<RenderSettings>,
    mut state: ResMut<DisplaySyncState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut entities: Query<(Entity, &DisplayEntity, &mut Transform, &mut Visibility)>,
) {
    if state.needs_respawn(&list) {
        for (entity, ..) in &entities {
            commands.entity(entity).despawn();
        }

        for (id, object) in list.iter() {
            let mut entity = commands.spawn((
                DisplayEntity(id),
                Mesh3d(object.mesh.clone()),
                MeshMaterial3d(materials.add(display_material(object))),
                object.transform.to_transform(),
                visibility_of(object),
            ));

            if object.role.is_gizmo() {
                entity.insert(NoWireframe);
            } else if draws_wireframe(object, &settings) {
                entity.insert(Wireframe);
            }
        }

        debug!("Spawned {} display entities", list.len());
        state.spawned_revision = Some(list.revision());
        return;
    }

    if !list.is_changed() && !settings.is_changed() {
        return;
    }

    for (entity, display, mut transform, mut visibility) in &mut entities {
        let Some(object) = list.get(display.0) else {
            continue;
        };

        transform.set_if_neq(object.transform.to_transform());
        visibility.set_if_neq(visibility_of(object));

        if settings.is_changed() && !object.role.is_gizmo() {
            if draws_wireframe(object, &settings) {
                commands.entity(entity).insert(Wireframe);
            } else {
                commands.entity(entity).remove::<Wireframe>();
            }
        }
    }
}

/// Fill in local bounds from mesh data once a model has finished loading.
pub fn resolve_mesh_bounds(meshes: Res<Assets<Mesh>>, mut list: ResMut<DisplayList>) {
    for (id, object) in list.bypass_change_detection().iter_mut() {
        if object.bounds.is_some() {
            continue;
        }

        let Some(aabb) = meshes.get(&object.mesh).and_then(Mesh::compute_aabb) else {
            continue;
        };

        object.bounds = Some(LocalBounds::from_aabb(&aabb));
        debug!("Bounds resolved for object {id}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::display_list::test_support::list_with;

    fn sync_app(list: DisplayList) -> App {
        let mut app = App::new();
        app.insert_resource(list)
            .init_resource::<RenderSettings>()
            .init_resource::<DisplaySyncState>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<Mesh>>()
            .add_systems(Update, (resolve_mesh_bounds, sync_display_entities).chain());
        app
    }

    fn display_entities(app: &mut App) -> Vec<(ObjectId, Transform, Visibility)> {
        let mut query = app
            .world_mut()
            .query::<(&DisplayEntity, &Transform, &Visibility)>();
        let mut found: Vec<_> = query
            .iter(app.world())
            .map(|(display, transform, visibility)| (display.0, *transform, *visibility))
            .collect();
        found.sort_by_key(|(id, ..)| id.0);
        found
    }

    #[test]
    fn one_entity_per_entry_with_hidden_gizmo() {
        let mut app = sync_app(list_with(&[Vec3::new(1.0, 2.0, 3.0)]));
        app.update();

        let entities = display_entities(&mut app);
        assert_eq!(entities.len(), 4);
        assert_eq!(entities[0].2, Visibility::Hidden);
        assert_eq!(entities[3].1.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(entities[3].2, Visibility::Inherited);
    }

    #[test]
    fn moves_update_in_place_and_pushes_respawn() {
        let mut app = sync_app(list_with(&[Vec3::ZERO]));
        app.update();

        app.world_mut()
            .resource_mut::<DisplayList>()
            .get_mut(ObjectId(3))
            .unwrap()
            .transform
            .position = Vec3::X;
        app.update();
        let entities = display_entities(&mut app);
        assert_eq!(entities.len(), 4);
        assert_eq!(entities[3].1.translation, Vec3::X);

        let extra = app
            .world()
            .resource::<DisplayList>()
            .get(ObjectId(3))
            .unwrap()
            .clone();
        app.world_mut().resource_mut::<DisplayList>().push(extra);
        app.update();
        assert_eq!(display_entities(&mut app).len(), 5);
    }

    #[test]
    fn wireframe_skips_gizmo_handles() {
        let mut app = sync_app(list_with(&[Vec3::ZERO]));
        app.world_mut().resource_mut::<RenderSettings>().wireframe = true;
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<&DisplayEntity, With<Wireframe>>();
        let wireframed: Vec<_> = query.iter(app.world()).map(|display| display.0).collect();
        assert_eq!(wireframed, vec![ObjectId(3)]);

        app.world_mut().resource_mut::<RenderSettings>().wireframe = false;
        app.update();
        let mut query = app
            .world_mut()
            .query_filtered::<&DisplayEntity, With<Wireframe>>();
        assert_eq!(query.iter(app.world()).count(), 0);
    }

    #[test]
    fn record_wireframe_flag_needs_global_mode() {
        let mut list = list_with(&[Vec3::ZERO]);
        list.get_mut(ObjectId(3)).unwrap().wireframe = true;
        let mut app = sync_app(list);
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<&DisplayEntity, With<Wireframe>>();
        assert_eq!(query.iter(app.world()).count(), 0);

        app.world_mut().resource_mut::<RenderSettings>().wireframe = true;
        app.update();
        let mut query = app
            .world_mut()
            .query_filtered::<&DisplayEntity, With<Wireframe>>();
        let wireframed: Vec<_> = query.iter(app.world()).map(|display| display.0).collect();
        assert_eq!(wireframed, vec![ObjectId(3)]);
    }

    #[test]
    fn gizmo_material_is_unlit_axis_colour() {
        let list = list_with(&[]);
        let (_, handle) = list.iter().next().unwrap();
        let material = display_material(handle);

        assert!(material.unlit);
        assert!(material.base_color_texture.is_none());
        assert_eq!(material.base_color, GIZMO_Z_COLOUR);
    }
}
