use bevy::math::{Vec2, Vec4};
use bevy::render::render_resource::ShaderType;

/// Uniform parameters for the snow overlay material. Mirrors the WGSL
/// `SnowSettings` struct layout exactly.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct SnowSettings {
    /// Base surface colour where no snow has settled.
    pub base_colour: Vec4,
    /// Colour of settled snow.
    pub snow_colour: Vec4,
    /// Fraction of the snow-layer range that reads as covered, in `[0, 1]`.
    pub coverage: f32,
    /// How strongly coverage ignores surface slope: 0 = only up-facing
    /// surfaces collect snow, 1 = slope is ignored entirely.
    pub up_bias: f32,
    pub _padding: Vec2,
}

pub const SNOW_SETTINGS: SnowSettings = SnowSettings {
    base_colour: Vec4::new(0.35, 0.27, 0.2, 1.0),
    snow_colour: Vec4::new(0.93, 0.95, 0.98, 1.0),
    coverage: 0.65,
    up_bias: 0.4,
    _padding: Vec2::ZERO,
};

impl Default for SnowSettings {
    fn default() -> Self {
        SNOW_SETTINGS
    }
}
