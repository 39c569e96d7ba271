use bevy::prelude::*;

use crate::engine::assets::garden_manifest::GardenManifest;

/// Top-level application phase: the manifest loads first, then the garden
/// runs.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Enter `Running` once the garden manifest resource exists.
pub fn transition_to_running(
    manifest: Option<Res<GardenManifest>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if manifest.is_some() {
        next_state.set(AppState::Running);
    }
}
