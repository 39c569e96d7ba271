use bevy::prelude::*;

use crate::engine::mesh::snow_overlay::SnowOverlayCache;
use crate::engine::render::snow_material::SnowMaterial;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Resource)]
pub struct SeasonState {
    pub season: Season,
}

impl Default for SeasonState {
    fn default() -> Self {
        Self {
            season: Season::Summer,
        }
    }
}

/// Marks an entity whose mesh is swapped for its snow overlay in winter.
/// Keeps the summer handles so the swap can be reversed.
#[derive(Component)]
pub struct SnowReceiver {
    pub base_mesh: Handle<Mesh>,
    pub base_material: Handle<StandardMaterial>,
}

/// Number keys 1-4 select the season.
pub fn season_input_system(mut season: ResMut<SeasonState>, keyboard: Res<ButtonInput<KeyCode>>) {
    let selected = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(Season::Spring)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(Season::Summer)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(Season::Autumn)
    } else if keyboard.just_pressed(KeyCode::Digit4) {
        Some(Season::Winter)
    } else {
        None
    };

    if let Some(selected) = selected {
        if season.season != selected {
            info!("Season changed to {:?}", selected);
            season.season = selected;
        }
    }
}

/// Swap receiver meshes for their cached snow overlays on entering winter,
/// and restore the summer mesh and material on leaving it.
pub fn apply_season_overlays(
    season: Res<SeasonState>,
    mut cache: ResMut<SnowOverlayCache>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut snow_materials: ResMut<Assets<SnowMaterial>>,
    mut receivers: Query<(Entity, &SnowReceiver, &mut Mesh3d)>,
    mut commands: Commands,
    mut snow_material: Local<Option<Handle<SnowMaterial>>>,
) {
    if !season.is_changed() {
        return;
    }

    if season.season == Season::Winter {
        let material = snow_material
            .get_or_insert_with(|| snow_materials.add(SnowMaterial::default()))
            .clone();

        for (entity, receiver, mut mesh) in &mut receivers {
            match cache.get_or_generate(&receiver.base_mesh, &mut meshes) {
                Ok(overlay) => {
                    mesh.0 = overlay;
                    commands
                        .entity(entity)
                        .remove::<MeshMaterial3d<StandardMaterial>>()
                        .insert(MeshMaterial3d(material.clone()));
                }
                Err(err) => warn!("Skipping snow overlay: {err}"),
            }
        }
    } else {
        for (entity, receiver, mut mesh) in &mut receivers {
            mesh.0 = receiver.base_mesh.clone();
            commands
                .entity(entity)
                .remove::<MeshMaterial3d<SnowMaterial>>()
                .insert(MeshMaterial3d(receiver.base_material.clone()));
        }
    }
}
