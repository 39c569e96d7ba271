use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Ground extents of the garden in world coordinates. Used for camera
/// framing and sizing the ground plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl GardenBounds {
    /// Centre point for camera framing and scene navigation.
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.max_x + self.min_x) * 0.5,
            (self.max_y + self.min_y) * 0.5,
            (self.max_z + self.min_z) * 0.5,
        )
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        Vec3::new(
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }

    pub fn ground_height(&self) -> f32 {
        self.min_y
    }
}
