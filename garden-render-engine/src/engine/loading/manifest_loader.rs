use bevy::prelude::*;

use crate::engine::assets::garden_manifest::GardenManifest;
use crate::engine::camera::viewport_camera::ViewportCamera;

const GARDEN_MANIFEST_PATH: &str = "gardens/demo_garden.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<GardenManifest>>,
    loaded: bool,
}

/// Kick off the manifest load at startup.
pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading garden manifest from: {}", GARDEN_MANIFEST_PATH);
    loader.handle = Some(asset_server.load(GARDEN_MANIFEST_PATH));
}

/// Promote the manifest to a resource once the asset has loaded and frame
/// the camera on the garden.
pub fn load_manifest_system(
    mut loader: ResMut<ManifestLoader>,
    manifests: Res<Assets<GardenManifest>>,
    mut commands: Commands,
) {
    if loader.loaded {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };
    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    info!(
        "Loaded garden '{}' with {} raised beds",
        manifest.name,
        manifest.raised_beds.len()
    );
    for bed in &manifest.raised_beds {
        for field in bed.invalid_fields() {
            warn!(
                "Bed {}: field index {} is outside the 3x3 grid, skipping",
                bed.id, field.position_index
            );
        }
    }

    commands.insert_resource(ViewportCamera::with_bounds(&manifest.bounds));
    commands.insert_resource(manifest.clone());
    loader.loaded = true;
}
