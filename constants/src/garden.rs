/// Raised beds hold a fixed 3x3 planting grid.
pub const FIELD_GRID_SIZE: usize = 3;

/// Number of planting fields per raised bed.
pub const FIELD_COUNT: usize = FIELD_GRID_SIZE * FIELD_GRID_SIZE;

/// Edge length of a single planting field in metres.
pub const FIELD_CELL_SIZE: f32 = 0.3;

/// Outer edge length of a raised bed in metres.
pub const BED_SIZE: f32 = FIELD_CELL_SIZE * FIELD_GRID_SIZE as f32;

/// Height of the raised bed planter walls in metres.
pub const BED_HEIGHT: f32 = 0.25;

/// Height of the soil surface inside a raised bed, relative to the bed base.
pub const SOIL_HEIGHT: f32 = 0.2;

/// Inset of the soil surface from the planter walls in metres.
pub const SOIL_INSET: f32 = 0.02;

/// Radius of the marker sphere placed on an occupied planting field.
pub const PLANT_MARKER_RADIUS: f32 = 0.05;
