use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;
use constants::paths::{ERROR_TEXTURE, PLACEHOLDER_MODEL, PLACEHOLDER_TEXTURE};

use crate::engine::scene::display_list::DisplayList;

/// Seam between the editing core and asset loading. Models resolve to the
/// first primitive of a glTF file; textures load by path.
pub trait AssetSource {
    fn model(&self, path: &str) -> Handle<Mesh>;
    fn texture(&self, path: &str) -> Handle<Image>;

    /// Textures with no path go straight to the error texture.
    fn texture_or_error(&self, path: &str) -> Handle<Image> {
        if path.is_empty() {
            self.texture(ERROR_TEXTURE)
        } else {
            self.texture(path)
        }
    }
}

impl AssetSource for AssetServer {
    fn model(&self, path: &str) -> Handle<Mesh> {
        self.load(
            GltfAssetLabel::Primitive {
                mesh: 0,
                primitive: 0,
            }
            .from_asset(path.to_owned()),
        )
    }

    fn texture(&self, path: &str) -> Handle<Image> {
        self.load(path.to_owned())
    }
}

/// Handles for the placeholder object and fallback textures, loaded once.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlaceholderAssets {
    pub mesh: Handle<Mesh>,
    pub texture: Handle<Image>,
    pub error_texture: Handle<Image>,
}

impl PlaceholderAssets {
    pub fn load(source: &impl AssetSource) -> Self {
        Self {
            mesh: source.model(PLACEHOLDER_MODEL),
            texture: source.texture(PLACEHOLDER_TEXTURE),
            error_texture: source.texture(ERROR_TEXTURE),
        }
    }
}

pub fn load_placeholder_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(PlaceholderAssets::load(asset_server.as_ref()));
}

/// Swap failed model and texture loads for the placeholder mesh and the
/// error texture.
pub fn replace_failed_assets(
    asset_server: Res<AssetServer>,
    placeholders: Res<PlaceholderAssets>,
    mut display_list: ResMut<DisplayList>,
) {
    let failed = |id: UntypedAssetId| {
        matches!(asset_server.get_load_state(id), Some(LoadState::Failed(_)))
    };

    let broken: Vec<_> = display_list
        .iter()
        .filter(|(_, object)| {
            (failed(object.mesh.id().untyped()) && object.mesh != placeholders.mesh)
                || (failed(object.texture.id().untyped())
                    && object.texture != placeholders.error_texture)
        })
        .map(|(id, _)| id)
        .collect();

    if broken.is_empty() {
        return;
    }

    for id in broken {
        let Some(object) = display_list.get_mut(id) else {
            continue;
        };

        if failed(object.mesh.id().untyped()) && object.mesh != placeholders.mesh {
            warn!(
                "Model '{}' failed to load for object {}, using placeholder",
                object.model_path, id
            );
            object.mesh = placeholders.mesh.clone();
            object.bounds = None;
        }

        if failed(object.texture.id().untyped()) && object.texture != placeholders.error_texture {
            warn!(
                "Texture '{}' failed to load for object {}, using error texture",
                object.texture_path, id
            );
            object.texture = placeholders.error_texture.clone();
        }
    }
    display_list.mark_structure_changed();
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use super::*;

    /// Records requested paths and hands out default handles.
    #[derive(Default)]
    pub struct StubSource {
        pub models: RefCell<Vec<String>>,
        pub textures: RefCell<Vec<String>>,
    }

    impl AssetSource for StubSource {
        fn model(&self, path: &str) -> Handle<Mesh> {
            self.models.borrow_mut().push(path.to_owned());
            Handle::default()
        }

        fn texture(&self, path: &str) -> Handle<Image> {
            self.textures.borrow_mut().push(path.to_owned());
            Handle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubSource;
    use super::*;

    #[test]
    fn empty_texture_path_requests_error_texture() {
        let source = StubSource::default();

        source.texture_or_error("");
        source.texture_or_error("database/data/rock.dds");

        assert_eq!(
            *source.textures.borrow(),
            vec![ERROR_TEXTURE.to_owned(), "database/data/rock.dds".to_owned()]
        );
    }

    #[test]
    fn placeholders_load_their_fixed_paths() {
        let source = StubSource::default();
        PlaceholderAssets::load(&source);

        assert_eq!(*source.models.borrow(), vec![PLACEHOLDER_MODEL.to_owned()]);
        assert_eq!(
            *source.textures.borrow(),
            vec![PLACEHOLDER_TEXTURE.to_owned(), ERROR_TEXTURE.to_owned()]
        );
    }
}
