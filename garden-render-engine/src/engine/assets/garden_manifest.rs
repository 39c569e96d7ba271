use bevy::prelude::*;
use constants::field_layout::{BedOrientation, field_world_offset};
use constants::garden::FIELD_COUNT;
use serde::{Deserialize, Serialize};

use super::bounds::GardenBounds;

/// Complete garden description as a Bevy asset. Mirrors the JSON structure
/// exactly; loaded once at startup and inserted as a resource.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct GardenManifest {
    pub name: String,
    pub bounds: GardenBounds,
    pub raised_beds: Vec<RaisedBedData>,
}

/// One raised bed: world placement, grid orientation, and occupied fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaisedBedData {
    pub id: u32,
    pub position: [f32; 3],
    pub orientation: BedOrientation,
    #[serde(default)]
    pub fields: Vec<FieldData>,
}

/// An occupied planting field within a raised bed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldData {
    pub position_index: usize,
    pub plant: String,
}

impl RaisedBedData {
    pub fn world_position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// World position of a field cell centre on this bed's ground plane.
    pub fn field_world_position(&self, position_index: usize) -> Vec3 {
        self.world_position() + field_world_offset(position_index, self.orientation)
    }

    /// Fields with indices outside the 3x3 grid, for load-time validation.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldData> {
        self.fields
            .iter()
            .filter(|field| field.position_index >= FIELD_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST_JSON: &str = r#"{
        "name": "Test garden",
        "bounds": {
            "min_x": -4.0, "max_x": 4.0,
            "min_y": 0.0, "max_y": 2.0,
            "min_z": -4.0, "max_z": 4.0
        },
        "raised_beds": [
            {
                "id": 1,
                "position": [1.0, 0.0, -2.0],
                "orientation": "vertical",
                "fields": [
                    { "position_index": 4, "plant": "carrot" },
                    { "position_index": 0, "plant": "lettuce" }
                ]
            },
            {
                "id": 2,
                "position": [-1.5, 0.0, 1.0],
                "orientation": "horizontal"
            }
        ]
    }"#;

    #[test]
    fn manifest_deserialises_from_json() {
        let manifest: GardenManifest = serde_json::from_str(MANIFEST_JSON).expect("valid JSON");
        assert_eq!(manifest.name, "Test garden");
        assert_eq!(manifest.raised_beds.len(), 2);
        assert_eq!(
            manifest.raised_beds[0].orientation,
            BedOrientation::Vertical
        );
        assert_eq!(manifest.raised_beds[0].fields.len(), 2);
        // fields defaults to empty when omitted
        assert!(manifest.raised_beds[1].fields.is_empty());
    }

    #[test]
    fn centre_field_lands_on_bed_position() {
        let manifest: GardenManifest = serde_json::from_str(MANIFEST_JSON).expect("valid JSON");
        let bed = &manifest.raised_beds[0];
        assert_eq!(bed.field_world_position(4), Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn out_of_range_field_indices_are_reported() {
        let mut manifest: GardenManifest =
            serde_json::from_str(MANIFEST_JSON).expect("valid JSON");
        manifest.raised_beds[0].fields.push(FieldData {
            position_index: 9,
            plant: "pumpkin".into(),
        });
        assert_eq!(manifest.raised_beds[0].invalid_fields().count(), 1);
        assert_eq!(manifest.raised_beds[1].invalid_fields().count(), 0);
    }
}
