//! Boundary to the manifold CSG backend.
//!
//! `Solid` wraps `manifold_rs::Manifold` with exactly the surface the editor
//! needs: box construction, booleans, transform application (and its
//! inverse), mesh extraction, and mesh-derived volume/bounds queries.

use manifold_rs::Manifold;
use shared::Transform;

/// A boolean-combinable volumetric object.
pub struct Solid {
    manifold: Manifold,
}

impl Solid {
    /// Box centered at the origin, built by extruding the cross-section
    /// rectangle from z = 0 to z = `length` and re-centering along Z.
    pub fn centered_box(width: f64, height: f64, length: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        // CCW cross-section in the XY plane
        let polygon: Vec<f64> = vec![-hw, -hh, hw, -hh, hw, hh, -hw, hh];
        let manifold = Manifold::extrude(&[polygon.as_slice()], length, 1, 0.0, 1.0, 1.0)
            .translate(0.0, 0.0, -length / 2.0);
        Self { manifold }
    }

    /// Boolean difference (self − other)
    pub fn subtract(&self, other: &Solid) -> Solid {
        Solid {
            manifold: self.manifold.difference(&other.manifold),
        }
    }

    /// Boolean intersection (self ∩ other)
    pub fn intersect(&self, other: &Solid) -> Solid {
        Solid {
            manifold: self.manifold.intersection(&other.manifold),
        }
    }

    /// Boolean union (self ∪ other)
    pub fn union(&self, other: &Solid) -> Solid {
        Solid {
            manifold: self.manifold.union(&other.manifold),
        }
    }

    /// True when the solid has no geometry
    pub fn is_empty(&self) -> bool {
        self.manifold.is_empty()
    }

    /// Apply a transform: scale, then rotation (X, Y, Z), then translation.
    pub fn transformed(&self, t: &Transform) -> Solid {
        let [tx, ty, tz] = t.position;
        let [rx, ry, rz] = t.rotation;
        let [sx, sy, sz] = t.scale;

        let mut m = self.manifold.scale(sx, sy, sz);
        if rx != 0.0 || ry != 0.0 || rz != 0.0 {
            m = m.rotate(rx, ry, rz);
        }
        if tx != 0.0 || ty != 0.0 || tz != 0.0 {
            m = m.translate(tx, ty, tz);
        }
        Solid { manifold: m }
    }

    /// Apply the inverse of `transformed`.
    ///
    /// The caller must ensure the transform is invertible
    /// ([`Transform::is_invertible`]); every scale component is divided by.
    pub fn inverse_transformed(&self, t: &Transform) -> Solid {
        let [tx, ty, tz] = t.position;
        let [rx, ry, rz] = t.rotation;
        let [sx, sy, sz] = t.scale;

        let mut m = self.manifold.translate(-tx, -ty, -tz);
        // Undo the X-then-Y-then-Z rotation in reverse order
        if rz != 0.0 {
            m = m.rotate(0.0, 0.0, -rz);
        }
        if ry != 0.0 {
            m = m.rotate(0.0, -ry, 0.0);
        }
        if rx != 0.0 {
            m = m.rotate(-rx, 0.0, 0.0);
        }
        if sx != 1.0 || sy != 1.0 || sz != 1.0 {
            m = m.scale(1.0 / sx, 1.0 / sy, 1.0 / sz);
        }
        Solid { manifold: m }
    }

    /// Flat vertex positions `[x0, y0, z0, x1, ...]` and triangle indices
    pub fn triangles(&self) -> (Vec<f32>, Vec<u32>) {
        let mesh = self.manifold.to_mesh();
        (mesh.vertices(), mesh.indices())
    }

    /// Signed volume of the mesh via the divergence theorem.
    ///
    /// Positive for well-formed closed meshes.
    pub fn volume(&self) -> f64 {
        let (verts, indices) = self.triangles();
        let mut vol = 0.0;
        for tri in indices.chunks(3) {
            let (i0, i1, i2) = (
                tri[0] as usize * 3,
                tri[1] as usize * 3,
                tri[2] as usize * 3,
            );
            let v0 = [verts[i0] as f64, verts[i0 + 1] as f64, verts[i0 + 2] as f64];
            let v1 = [verts[i1] as f64, verts[i1 + 1] as f64, verts[i1 + 2] as f64];
            let v2 = [verts[i2] as f64, verts[i2 + 1] as f64, verts[i2 + 2] as f64];
            vol += v0[0] * (v1[1] * v2[2] - v2[1] * v1[2])
                - v1[0] * (v0[1] * v2[2] - v2[1] * v0[2])
                + v2[0] * (v0[1] * v1[2] - v1[1] * v0[2]);
        }
        (vol / 6.0).abs()
    }

    /// Axis-aligned bounds `(min, max)` of the mesh, or None when empty.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let (verts, _) = self.triangles();
        if verts.is_empty() {
            return None;
        }
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for chunk in verts.chunks(3) {
            for i in 0..3 {
                let v = chunk[i] as f64;
                if v < min[i] {
                    min[i] = v;
                }
                if v > max[i] {
                    max[i] = v;
                }
            }
        }
        Some((min, max))
    }
}
