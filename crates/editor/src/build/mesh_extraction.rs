//! Mesh extraction and coloring

use glam::Vec3;

use crate::csg::Solid;
use crate::render::mesh::MeshData;

/// Base tube color
pub const TUBE_COLOR: [f32; 3] = [0.25, 0.41, 0.88];
/// Color of the selected tube
pub const SELECTED_COLOR: [f32; 3] = [1.0, 0.41, 0.71];
/// Color of the joint overlap preview
pub const PREVIEW_COLOR: [f32; 3] = [0.9, 0.16, 0.16];

/// Extract flat-shaded MeshData from a solid.
///
/// Vertices are split per triangle so each face carries its own normal.
/// Returns None for empty geometry.
pub fn extract_mesh_data(solid: &Solid, color: [f32; 3]) -> Option<MeshData> {
    let (positions, indices) = solid.triangles();

    if positions.is_empty() || indices.is_empty() {
        tracing::debug!("extract_mesh_data: empty mesh");
        return None;
    }

    let tri_count = indices.len() / 3;
    let mut vertices = Vec::with_capacity(tri_count * 3 * 9);
    let mut new_indices = Vec::with_capacity(tri_count * 3);

    for tri in 0..tri_count {
        let i0 = indices[tri * 3] as usize;
        let i1 = indices[tri * 3 + 1] as usize;
        let i2 = indices[tri * 3 + 2] as usize;

        let p0 = Vec3::new(
            positions[i0 * 3],
            positions[i0 * 3 + 1],
            positions[i0 * 3 + 2],
        );
        let p1 = Vec3::new(
            positions[i1 * 3],
            positions[i1 * 3 + 1],
            positions[i1 * 3 + 2],
        );
        let p2 = Vec3::new(
            positions[i2 * 3],
            positions[i2 * 3 + 1],
            positions[i2 * 3 + 2],
        );

        let normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();

        let base = (tri * 3) as u32;
        for p in [p0, p1, p2] {
            vertices.extend_from_slice(&[
                p.x, p.y, p.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
            ]);
        }
        new_indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    Some(MeshData {
        vertices,
        indices: new_indices,
    })
}
