use bevy::prelude::*;
use constants::paths::{BLUE_TEXTURE, GREEN_TEXTURE, PLACEHOLDER_TEXTURE, RED_TEXTURE};

use crate::engine::assets::asset_source::{AssetSource, PlaceholderAssets};
use crate::engine::scene::display_list::{DisplayList, ObjectId};
use crate::error::EditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintColour {
    Red,
    Green,
    Blue,
}

impl PaintColour {
    pub fn texture_path(self) -> &'static str {
        match self {
            PaintColour::Red => RED_TEXTURE,
            PaintColour::Green => GREEN_TEXTURE,
            PaintColour::Blue => BLUE_TEXTURE,
        }
    }
}

/// Solid colour textures used for painting, loaded once.
#[derive(Resource, Debug, Clone, Default)]
pub struct PaintTextures {
    pub red: Handle<Image>,
    pub green: Handle<Image>,
    pub blue: Handle<Image>,
}

impl PaintTextures {
    pub fn load(source: &impl AssetSource) -> Self {
        Self {
            red: source.texture(RED_TEXTURE),
            green: source.texture(GREEN_TEXTURE),
            blue: source.texture(BLUE_TEXTURE),
        }
    }

    pub fn handle(&self, colour: PaintColour) -> Handle<Image> {
        match colour {
            PaintColour::Red => self.red.clone(),
            PaintColour::Green => self.green.clone(),
            PaintColour::Blue => self.blue.clone(),
        }
    }
}

pub fn load_paint_textures(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(PaintTextures::load(asset_server.as_ref()));
}

/// Paint a scene object with a solid colour texture.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyColour {
    pub id: ObjectId,
    pub colour: PaintColour,
}

/// Restore a scene object's placeholder texture.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTexture {
    pub id: ObjectId,
}

/// Swap a scene object's texture. Returns `Ok(false)` when the object's
/// material takes no texture.
pub fn retexture(
    list: &mut DisplayList,
    id: ObjectId,
    path: &str,
    texture: Handle<Image>,
) -> Result<bool, EditError> {
    let object = list.scene_object_mut(id)?;
    let changed = object.set_texture(path, texture);
    if changed {
        list.mark_structure_changed();
    }
    Ok(changed)
}

pub fn handle_paint_events(
    mut colour_events: EventReader<ApplyColour>,
    mut reset_events: EventReader<ResetTexture>,
    paint: Res<PaintTextures>,
    placeholders: Res<PlaceholderAssets>,
    mut list: ResMut<DisplayList>,
) {
    let requests = colour_events
        .read()
        .map(|event| (event.id, event.colour.texture_path(), paint.handle(event.colour)))
        .chain(
            reset_events
                .read()
                .map(|event| (event.id, PLACEHOLDER_TEXTURE, placeholders.texture.clone())),
        );

    for (id, path, texture) in requests {
        match retexture(&mut list, id, path, texture) {
            Ok(true) => info!("Object {id} textured with {path}"),
            Ok(false) => debug!("Object {id} has an untextured material"),
            Err(error) => warn!("Texture change ignored: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::display_list::test_support::list_with;

    #[test]
    fn paint_then_reset_restores_the_placeholder() {
        let mut list = list_with(&[Vec3::ZERO]);
        let id = ObjectId(3);

        assert_eq!(retexture(&mut list, id, RED_TEXTURE, Handle::default()), Ok(true));
        assert_eq!(list.get(id).unwrap().texture_path, RED_TEXTURE);

        let revision = list.revision();
        retexture(&mut list, id, PLACEHOLDER_TEXTURE, Handle::default()).unwrap();
        assert_eq!(list.get(id).unwrap().texture_path, PLACEHOLDER_TEXTURE);
        assert_ne!(list.revision(), revision);
    }

    #[test]
    fn gizmo_entries_cannot_be_painted() {
        let mut list = list_with(&[Vec3::ZERO]);
        assert_eq!(
            retexture(&mut list, ObjectId(2), BLUE_TEXTURE, Handle::default()),
            Err(EditError::GizmoObject(2))
        );
    }

    #[test]
    fn paint_events_retexture_the_target() {
        let mut app = App::new();
        app.add_event::<ApplyColour>()
            .add_event::<ResetTexture>()
            .init_resource::<PaintTextures>()
            .init_resource::<PlaceholderAssets>()
            .insert_resource(list_with(&[Vec3::ZERO, Vec3::ONE]))
            .add_systems(Update, handle_paint_events);

        app.world_mut().send_event(ApplyColour {
            id: ObjectId(4),
            colour: PaintColour::Green,
        });
        app.update();

        let list = app.world().resource::<DisplayList>();
        assert_eq!(list.get(ObjectId(4)).unwrap().texture_path, GREEN_TEXTURE);
        assert_eq!(list.get(ObjectId(3)).unwrap().texture_path, "texture.dds");
    }
}
