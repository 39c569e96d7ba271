pub mod bounds;
pub mod garden_manifest;
