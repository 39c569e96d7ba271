pub mod snow_material;
