//! Snow overlay geometry generation.
//!
//! Takes an arbitrary triangle mesh and extrudes a thin quad "skirt" along
//! every boundary edge (an edge referenced by exactly one triangle), writing
//! a per-vertex `SnowLayer` scalar that the snow material blends on. Closed
//! meshes come back unchanged apart from the added attribute.
use std::collections::HashMap;

use bevy::asset::{AssetEvent, AssetId, RenderAssetUsages};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, MeshVertexAttribute, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_resource::VertexFormat;
use thiserror::Error;

/// Per-vertex snow coverage scalar: 1.0 on exposed surfaces and skirt rims,
/// 0.0 at the base of an extruded skirt.
pub const ATTRIBUTE_SNOW_LAYER: MeshVertexAttribute =
    MeshVertexAttribute::new("SnowLayer", 978122767, VertexFormat::Float32);

/// Snow-layer value assigned to every vertex of the source mesh.
pub const SURFACE_SNOW_LAYER: f32 = 1.0;

/// Snow-layer value at the lower rim of a skirt quad.
pub const SKIRT_BASE_LAYER: f32 = 0.0;

/// Squared-length threshold below which an edge or outward direction is
/// treated as degenerate and produces no skirt.
const DEGENERATE_EDGE_EPSILON: f32 = 1e-8;

#[derive(Debug, Error)]
pub enum SnowOverlayError {
    #[error("source mesh has no position attribute")]
    MissingPositions,
    #[error("source mesh position attribute is not Float32x3")]
    InvalidPositionFormat,
    #[error("source mesh asset is not loaded")]
    SourceMeshUnavailable,
}

/// One undirected mesh edge and the number of triangles referencing it.
struct EdgeInfo {
    start: u32,
    end: u32,
    count: u32,
}

/// Build the snow overlay mesh for `source`.
///
/// The output carries the source positions, normals and UVs (when present),
/// the `SnowLayer` attribute, and two extra triangles per boundary edge.
/// Degenerate boundary edges (near-zero length or parallel to world up) are
/// skipped. The only failure mode is a missing or malformed position
/// attribute; the source mesh is never mutated.
pub fn generate_snow_overlay(source: &Mesh) -> Result<Mesh, SnowOverlayError> {
    let source_positions = source
        .attribute(Mesh::ATTRIBUTE_POSITION)
        .ok_or(SnowOverlayError::MissingPositions)?
        .as_float3()
        .ok_or(SnowOverlayError::InvalidPositionFormat)?;
    let mut positions: Vec<[f32; 3]> = source_positions.to_vec();

    // Unindexed meshes are sequential triangle soups.
    let mut indices: Vec<u32> = match source.indices() {
        Some(indices) => indices.iter().map(|i| i as u32).collect(),
        None => (0..positions.len() as u32).collect(),
    };

    let mut normals: Vec<[f32; 3]> = match source
        .attribute(Mesh::ATTRIBUTE_NORMAL)
        .and_then(VertexAttributeValues::as_float3)
    {
        Some(normals) => normals.to_vec(),
        None => compute_vertex_normals(&positions, &indices),
    };

    let mut uvs: Option<Vec<[f32; 2]>> = match source.attribute(Mesh::ATTRIBUTE_UV_0) {
        Some(VertexAttributeValues::Float32x2(uvs)) => Some(uvs.clone()),
        _ => None,
    };

    let mut snow_layer = vec![SURFACE_SNOW_LAYER; positions.len()];
    let centre = bounding_box_centre(&positions);

    for edge in boundary_edges(&indices) {
        let a = Vec3::from(positions[edge.start as usize]);
        let b = Vec3::from(positions[edge.end as usize]);

        let edge_vector = b - a;
        if edge_vector.length_squared() < DEGENERATE_EDGE_EPSILON {
            continue;
        }

        // Horizontal direction facing away from the edge; undefined for
        // edges parallel to world up, which get no skirt.
        let mut outward = edge_vector.cross(Vec3::Y);
        if outward.length_squared() < DEGENERATE_EDGE_EPSILON {
            continue;
        }
        outward = outward.normalize();

        // Push the skirt away from the mesh interior.
        let midpoint = (a + b) * 0.5;
        if (midpoint - centre).dot(outward) < 0.0 {
            outward = -outward;
        }

        // topA, topB, baseB, baseA
        let base = positions.len() as u32;
        positions.extend_from_slice(&[a.to_array(), b.to_array(), b.to_array(), a.to_array()]);
        normals.extend_from_slice(&[outward.to_array(); 4]);
        snow_layer.extend_from_slice(&[
            SURFACE_SNOW_LAYER,
            SURFACE_SNOW_LAYER,
            SKIRT_BASE_LAYER,
            SKIRT_BASE_LAYER,
        ]);
        if let Some(uvs) = uvs.as_mut() {
            uvs.extend_from_slice(&[[0.0, 0.0]; 4]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let vertex_count = positions.len();
    let mut overlay = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    overlay.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    overlay.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    overlay.insert_attribute(ATTRIBUTE_SNOW_LAYER, snow_layer);
    if let Some(uvs) = uvs {
        overlay.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    }
    overlay.insert_indices(pack_indices(indices, vertex_count));

    Ok(overlay)
}

/// Area-weighted per-vertex normals for an indexed triangle list. Vertices
/// not referenced by any triangle fall back to world up.
pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let a = Vec3::from(positions[triangle[0] as usize]);
        let b = Vec3::from(positions[triangle[1] as usize]);
        let c = Vec3::from(positions[triangle[2] as usize]);
        // Cross product length is proportional to triangle area, so larger
        // faces weigh more in the average.
        let face_normal = (b - a).cross(c - a);
        for index in triangle {
            accumulated[*index as usize] += face_normal;
        }
    }

    accumulated
        .into_iter()
        .map(|normal| normal.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}

/// Census every undirected edge and keep those referenced by exactly one
/// triangle. Sorted by vertex index so repeated runs emit identical geometry.
fn boundary_edges(indices: &[u32]) -> Vec<EdgeInfo> {
    let mut census: HashMap<(u32, u32), EdgeInfo> = HashMap::new();

    for triangle in indices.chunks_exact(3) {
        for (start, end) in [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ] {
            census
                .entry((start.min(end), start.max(end)))
                .and_modify(|edge| edge.count += 1)
                .or_insert(EdgeInfo {
                    start,
                    end,
                    count: 1,
                });
        }
    }

    let mut edges: Vec<EdgeInfo> = census
        .into_values()
        .filter(|edge| edge.count == 1)
        .collect();
    edges.sort_by_key(|edge| (edge.start.min(edge.end), edge.start.max(edge.end)));
    edges
}

fn bounding_box_centre(positions: &[[f32; 3]]) -> Vec3 {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for position in positions {
        min = min.min(Vec3::from(*position));
        max = max.max(Vec3::from(*position));
    }
    if positions.is_empty() {
        Vec3::ZERO
    } else {
        (min + max) * 0.5
    }
}

/// 16-bit indices when the vertex count allows it, 32-bit otherwise.
fn pack_indices(indices: Vec<u32>, vertex_count: usize) -> Indices {
    if vertex_count <= u16::MAX as usize {
        Indices::U16(indices.into_iter().map(|index| index as u16).collect())
    } else {
        Indices::U32(indices)
    }
}

/// Process-lifetime cache of generated overlays, keyed by source mesh asset
/// id. Owned by the scene layer; entries are evicted when the source asset
/// is removed, so unreferenced sources can be reclaimed.
#[derive(Resource, Default)]
pub struct SnowOverlayCache {
    entries: HashMap<AssetId<Mesh>, Handle<Mesh>>,
}

impl SnowOverlayCache {
    /// Return the cached overlay for `source`, generating and storing it on
    /// first use. Distinct source meshes never share an entry, even when
    /// geometrically identical.
    pub fn get_or_generate(
        &mut self,
        source: &Handle<Mesh>,
        meshes: &mut Assets<Mesh>,
    ) -> Result<Handle<Mesh>, SnowOverlayError> {
        if let Some(overlay) = self.entries.get(&source.id()) {
            return Ok(overlay.clone());
        }
        let source_mesh = meshes
            .get(source)
            .ok_or(SnowOverlayError::SourceMeshUnavailable)?;
        let overlay = generate_snow_overlay(source_mesh)?;
        let overlay = meshes.add(overlay);
        self.entries.insert(source.id(), overlay.clone());
        Ok(overlay)
    }

    pub fn evict(&mut self, source: AssetId<Mesh>) -> Option<Handle<Mesh>> {
        self.entries.remove(&source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drop cache entries whose source mesh asset has been removed. The overlay
/// handle drops with the entry, releasing the generated asset as well.
pub fn evict_removed_sources(
    mut cache: ResMut<SnowOverlayCache>,
    mut events: EventReader<AssetEvent<Mesh>>,
) {
    for event in events.read() {
        if let AssetEvent::Removed { id } = event {
            cache.evict(*id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn census_finds_no_boundary_on_closed_surface() {
        // Tetrahedron over vertices 0..4: every edge shared by two faces.
        let indices = [0, 1, 2, 0, 3, 1, 1, 3, 2, 2, 3, 0];
        assert!(boundary_edges(&indices).is_empty());
    }

    #[test]
    fn census_finds_every_edge_of_a_lone_triangle() {
        let indices = [0, 1, 2];
        let edges = boundary_edges(&indices);
        assert_eq!(edges.len(), 3);
        for edge in &edges {
            assert_eq!(edge.count, 1);
        }
    }

    #[test]
    fn census_excludes_shared_interior_edge() {
        // Two triangles forming a quad; the diagonal (1, 2) is interior.
        let indices = [0, 1, 2, 2, 1, 3];
        let edges = boundary_edges(&indices);
        assert_eq!(edges.len(), 4);
        assert!(
            edges
                .iter()
                .all(|edge| (edge.start.min(edge.end), edge.start.max(edge.end)) != (1, 2))
        );
    }

    #[test]
    fn vertex_normals_point_up_for_flat_ground() {
        let positions = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        for normal in normals {
            assert!((Vec3::from(normal) - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn unreferenced_vertices_fall_back_to_up() {
        let positions = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [5.0, 5.0, 5.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], Vec3::Y.to_array());
    }

    #[test]
    fn index_width_follows_vertex_count() {
        assert!(matches!(pack_indices(vec![0, 1, 2], 3), Indices::U16(_)));
        assert!(matches!(
            pack_indices(vec![0, 1, 2], u16::MAX as usize + 1),
            Indices::U32(_)
        ));
    }
}
