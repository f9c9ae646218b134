//! Mesh validation utilities.
//!
//! `MeshValidator` provides integrity checks over the render-boundary mesh
//! buffers: correct stride, in-range indices, normalized normals, AABB
//! dimensions.

use crate::render::aabb::Aabb;
use crate::render::mesh::MeshData;

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    /// Create a new validator for the given mesh.
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    /// Number of vertices (vertices buffer length / 9).
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / 9
    }

    /// Number of triangles (indices buffer length / 3).
    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Check that the vertex buffer length is a multiple of 9 (the stride).
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % 9 == 0
    }

    /// Check that the index buffer length is a multiple of 3.
    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// Check that all indices are within the valid vertex range.
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// Check that all vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        let count = self.vertex_count();
        for i in 0..count {
            let base = i * 9;
            let nx = self.mesh.vertices[base + 3];
            let ny = self.mesh.vertices[base + 4];
            let nz = self.mesh.vertices[base + 5];
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            if (len - 1.0).abs() > epsilon {
                return false;
            }
        }
        true
    }

    /// Color of the first vertex, or None for an empty mesh.
    pub fn first_color(&self) -> Option<[f32; 3]> {
        if self.vertex_count() == 0 {
            return None;
        }
        Some([
            self.mesh.vertices[6],
            self.mesh.vertices[7],
            self.mesh.vertices[8],
        ])
    }

    /// Compute the axis-aligned bounding box of the mesh.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Compute the dimensions (width, height, depth) of the bounding box.
    pub fn dimensions(&self) -> [f64; 3] {
        self.aabb().dimensions()
    }

    /// Check that the AABB dimensions are approximately equal to `expected`.
    pub fn has_dimensions_approx(&self, expected: [f64; 3], tolerance: f64) -> bool {
        let dims = self.dimensions();
        (0..3).all(|i| (dims[i] - expected[i]).abs() < tolerance)
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of 9",
                self.mesh.vertices.len()
            ));
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={}): {:?}",
                max_idx, out_of_range
            ));
        }

        if self.vertex_count() > 0 && !self.are_normals_normalized(0.1) {
            errors.push("Some normals are not unit-length (epsilon=0.1)".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_triangle() -> MeshData {
        MeshData {
            vertices: vec![
                // vertex 0: pos(0,0,0) normal(0,0,1) color(0.5,0.5,0.5)
                0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5, //
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5, //
                0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5,
            ],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = simple_triangle();
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.vertex_count(), 3);
        assert_eq!(v.triangle_count(), 1);
    }

    #[test]
    fn test_stride_invalid() {
        let bad = MeshData {
            vertices: vec![0.0; 10], // not multiple of 9
            indices: vec![],
        };
        assert!(!MeshValidator::new(&bad).is_stride_valid());
    }

    #[test]
    fn test_indices_out_of_range() {
        let bad = MeshData {
            vertices: vec![0.0; 9], // 1 vertex
            indices: vec![0, 1, 2],
        };
        assert!(!MeshValidator::new(&bad).are_indices_in_range());
    }

    #[test]
    fn test_normals_not_normalized() {
        let bad = MeshData {
            vertices: vec![
                0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.5, 0.5, 0.5, // normal length = 5
            ],
            indices: vec![0],
        };
        assert!(!MeshValidator::new(&bad).are_normals_normalized(0.01));
    }

    #[test]
    fn test_dimensions() {
        let mesh = simple_triangle();
        let v = MeshValidator::new(&mesh);
        assert!(v.has_dimensions_approx([1.0, 1.0, 0.0], 0.001));
        assert!(!v.has_dimensions_approx([2.0, 1.0, 0.0], 0.001));
    }

    #[test]
    fn test_first_color() {
        let mesh = simple_triangle();
        assert_eq!(MeshValidator::new(&mesh).first_color(), Some([0.5, 0.5, 0.5]));
    }

    #[test]
    fn test_validate_all_ok() {
        let mesh = simple_triangle();
        let errors = MeshValidator::new(&mesh).validate_all();
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
    }

    #[test]
    fn test_validate_all_catches_bad_stride() {
        let bad = MeshData {
            vertices: vec![0.0; 10],
            indices: vec![0, 1, 2],
        };
        let errors = MeshValidator::new(&bad).validate_all();
        assert!(errors.iter().any(|e| e.contains("multiple of 9")));
    }

    #[test]
    fn test_validate_all_catches_bad_indices() {
        let bad = MeshData {
            vertices: vec![0.0; 9],
            indices: vec![0, 5, 2],
        };
        let errors = MeshValidator::new(&bad).validate_all();
        assert!(errors.iter().any(|e| e.contains("out of range")));
    }

    #[test]
    fn test_tube_mesh_passes_validation() {
        let solid = crate::build::tube::tube_solid(&shared::TubeSpec::default()).unwrap();
        let mesh = crate::build::extract_mesh_data(&solid, crate::build::TUBE_COLOR).unwrap();
        let v = MeshValidator::new(&mesh);
        assert!(v.validate_all().is_empty());
        // uncut tube spans exactly its spec'd extents
        assert!(v.has_dimensions_approx([1.0, 1.0, 3.0], 0.001));
    }
}
