pub mod bed_geometry;
pub mod snow_overlay;
