//! Procedural raised-bed geometry.
//!
//! Planter meshes are welded (walls share their vertical and bottom edges)
//! so the only boundary edges are the four along the open top rim. That is
//! exactly where the snow overlay generator grows its skirt in winter.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::garden::{BED_HEIGHT, BED_SIZE, SOIL_HEIGHT, SOIL_INSET};

use super::snow_overlay::compute_vertex_normals;

/// Open-topped planter box centred on the bed origin: four walls and a
/// bottom from eight welded corner vertices, no top face.
pub fn create_raised_bed_mesh() -> Mesh {
    let half = BED_SIZE * 0.5;

    // Bottom ring b0..b3 counter-clockwise seen from above, top ring above.
    let positions: Vec<[f32; 3]> = vec![
        [-half, 0.0, -half],
        [half, 0.0, -half],
        [half, 0.0, half],
        [-half, 0.0, half],
        [-half, BED_HEIGHT, -half],
        [half, BED_HEIGHT, -half],
        [half, BED_HEIGHT, half],
        [-half, BED_HEIGHT, half],
    ];

    let indices: Vec<u32> = vec![
        // Bottom, facing down
        0, 1, 2, 0, 2, 3, //
        // Wall z = -half
        0, 4, 5, 0, 5, 1, //
        // Wall x = +half
        1, 5, 6, 1, 6, 2, //
        // Wall z = +half
        2, 6, 7, 2, 7, 3, //
        // Wall x = -half
        3, 7, 4, 3, 4, 0,
    ];

    let normals = compute_vertex_normals(&positions, &indices);

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U16(indices.into_iter().map(|i| i as u16).collect()));
    mesh
}

/// Flat soil surface inset inside the planter walls. An open quad, so the
/// overlay generator grows a short skirt around the soil rim.
pub fn create_soil_mesh() -> Mesh {
    let inset = BED_SIZE * 0.5 - SOIL_INSET;

    let positions: Vec<[f32; 3]> = vec![
        [-inset, SOIL_HEIGHT, -inset],
        [inset, SOIL_HEIGHT, -inset],
        [inset, SOIL_HEIGHT, inset],
        [-inset, SOIL_HEIGHT, inset],
    ];
    let normals: Vec<[f32; 3]> = vec![[0.0, 1.0, 0.0]; 4];
    let uvs: Vec<[f32; 2]> = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let indices: Vec<u16> = vec![0, 2, 1, 0, 3, 2];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U16(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raised_bed_mesh_has_welded_walls_and_bottom() {
        let mesh = create_raised_bed_mesh();
        assert_eq!(mesh.count_vertices(), 8);
        let indices = mesh.indices().expect("bed mesh is indexed");
        assert_eq!(indices.len(), 30); // 10 triangles
    }

    #[test]
    fn soil_mesh_faces_up() {
        let mesh = create_soil_mesh();
        let normals = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .and_then(|values| values.as_float3())
            .expect("soil mesh has normals");
        for normal in normals {
            assert_eq!(*normal, [0.0, 1.0, 0.0]);
        }
    }
}
