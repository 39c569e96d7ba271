//! Snow accumulation material.
//!
//! Consumes the per-vertex `SnowLayer` attribute written by the overlay
//! generator and blends the snow colour over up-facing surfaces and skirt
//! rims. The geometry contract lives in `mesh::snow_overlay`; this material
//! is only the shading end of it.
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};
use constants::render_settings::SnowSettings;

use crate::engine::mesh::snow_overlay::ATTRIBUTE_SNOW_LAYER;

const SNOW_SHADER_PATH: &str = "shaders/snow_overlay.wgsl";

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SnowMaterial {
    #[uniform(0)]
    pub settings: SnowSettings,
}

impl Default for SnowMaterial {
    fn default() -> Self {
        Self {
            settings: SnowSettings::default(),
        }
    }
}

impl Material for SnowMaterial {
    fn vertex_shader() -> ShaderRef {
        SNOW_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SNOW_SHADER_PATH.into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Overlay meshes carry the SnowLayer attribute alongside the
        // standard position/normal pair.
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_NORMAL.at_shader_location(1),
            ATTRIBUTE_SNOW_LAYER.at_shader_location(8),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        Ok(())
    }
}
