use glam::{DMat4, DQuat, DVec3, EulerRot};

use shared::Transform;

use super::mesh::MeshData;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn from_bounds(min: [f64; 3], max: [f64; 3]) -> Self {
        Self {
            min: DVec3::from_array(min),
            max: DVec3::from_array(max),
        }
    }

    /// Compute AABB from MeshData (9 floats per vertex: pos+normal+color)
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);

        let stride = 9;
        let count = data.vertices.len() / stride;
        for i in 0..count {
            let base = i * stride;
            let p = DVec3::new(
                data.vertices[base] as f64,
                data.vertices[base + 1] as f64,
                data.vertices[base + 2] as f64,
            );
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Center of the bounding box
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Extents along each axis
    pub fn dimensions(&self) -> [f64; 3] {
        [
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        ]
    }

    /// Overlap test, inclusive of touching faces
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// AABB of this box's eight corners pushed through `matrix`
    pub fn transformed(&self, matrix: &DMat4) -> Aabb {
        let corners = [
            DVec3::new(self.min.x, self.min.y, self.min.z),
            DVec3::new(self.max.x, self.min.y, self.min.z),
            DVec3::new(self.min.x, self.max.y, self.min.z),
            DVec3::new(self.max.x, self.max.y, self.min.z),
            DVec3::new(self.min.x, self.min.y, self.max.z),
            DVec3::new(self.max.x, self.min.y, self.max.z),
            DVec3::new(self.min.x, self.max.y, self.max.z),
            DVec3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);
        for corner in corners {
            let p = matrix.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }

        Aabb { min, max }
    }
}

/// World matrix of a transform: scale, then X/Y/Z rotation, then translation.
pub fn world_matrix(t: &Transform) -> DMat4 {
    let rotation = DQuat::from_euler(
        EulerRot::ZYX,
        t.rotation[2].to_radians(),
        t.rotation[1].to_radians(),
        t.rotation[0].to_radians(),
    );
    DMat4::from_scale_rotation_translation(
        DVec3::from_array(t.scale),
        rotation,
        DVec3::from_array(t.position),
    )
}
