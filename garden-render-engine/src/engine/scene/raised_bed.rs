use bevy::prelude::*;
use constants::garden::{FIELD_COUNT, PLANT_MARKER_RADIUS, SOIL_HEIGHT};

use crate::engine::assets::garden_manifest::{GardenManifest, RaisedBedData};
use crate::engine::mesh::bed_geometry::{create_raised_bed_mesh, create_soil_mesh};
use crate::engine::scene::season::SnowReceiver;

#[derive(Component)]
pub struct RaisedBed {
    pub id: u32,
}

#[derive(Component)]
pub struct FieldCell {
    pub bed_id: u32,
    pub position_index: usize,
}

#[derive(Component)]
pub struct GardenGround;

/// Spawn the garden described by the manifest: ground plane, raised beds
/// with soil surfaces, and a marker per occupied planting field.
pub fn spawn_garden(
    mut commands: Commands,
    manifest: Res<GardenManifest>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_ground(&mut commands, &manifest, &mut meshes, &mut materials);

    // All beds share one planter mesh and one soil mesh, so the snow overlay
    // is generated once per shape no matter how many beds the garden has.
    let bed_mesh = meshes.add(create_raised_bed_mesh());
    let soil_mesh = meshes.add(create_soil_mesh());
    let bed_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.32, 0.2),
        perceptual_roughness: 0.9,
        ..default()
    });
    let soil_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.17, 0.1),
        perceptual_roughness: 1.0,
        ..default()
    });

    for bed in &manifest.raised_beds {
        spawn_raised_bed(
            &mut commands,
            bed,
            &bed_mesh,
            &soil_mesh,
            &bed_material,
            &soil_material,
            &mut meshes,
            &mut materials,
        );
    }

    info!(
        "Spawned {} raised beds for garden '{}'",
        manifest.raised_beds.len(),
        manifest.name
    );
}

fn spawn_ground(
    commands: &mut Commands,
    manifest: &GardenManifest,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let size = manifest.bounds.size();
    let center = manifest.bounds.center();

    let ground_mesh = meshes.add(Plane3d::default().mesh().size(size.x, size.z));
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.45, 0.25),
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(ground_mesh.clone()),
        MeshMaterial3d(ground_material.clone()),
        Transform::from_xyz(center.x, manifest.bounds.ground_height(), center.z),
        GardenGround,
        SnowReceiver {
            base_mesh: ground_mesh,
            base_material: ground_material,
        },
    ));
}

fn spawn_raised_bed(
    commands: &mut Commands,
    bed: &RaisedBedData,
    bed_mesh: &Handle<Mesh>,
    soil_mesh: &Handle<Mesh>,
    bed_material: &Handle<StandardMaterial>,
    soil_material: &Handle<StandardMaterial>,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let bed_position = bed.world_position();

    commands.spawn((
        Mesh3d(bed_mesh.clone()),
        MeshMaterial3d(bed_material.clone()),
        Transform::from_translation(bed_position),
        RaisedBed { id: bed.id },
        SnowReceiver {
            base_mesh: bed_mesh.clone(),
            base_material: bed_material.clone(),
        },
    ));

    commands.spawn((
        Mesh3d(soil_mesh.clone()),
        MeshMaterial3d(soil_material.clone()),
        Transform::from_translation(bed_position),
        SnowReceiver {
            base_mesh: soil_mesh.clone(),
            base_material: soil_material.clone(),
        },
    ));

    for field in &bed.fields {
        // Out-of-range indices were already reported at load time.
        if field.position_index >= FIELD_COUNT {
            continue;
        }
        let marker_position =
            bed.field_world_position(field.position_index) + Vec3::Y * SOIL_HEIGHT;
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(PLANT_MARKER_RADIUS))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: plant_colour(&field.plant),
                ..default()
            })),
            Transform::from_translation(marker_position),
            FieldCell {
                bed_id: bed.id,
                position_index: field.position_index,
            },
        ));
    }
}

fn plant_colour(plant: &str) -> Color {
    match plant {
        "carrot" => Color::srgb(0.9, 0.5, 0.1),
        "radish" => Color::srgb(0.8, 0.15, 0.2),
        "lettuce" => Color::srgb(0.4, 0.7, 0.3),
        "cabbage" => Color::srgb(0.5, 0.75, 0.5),
        _ => Color::srgb(0.35, 0.6, 0.3),
    }
}
