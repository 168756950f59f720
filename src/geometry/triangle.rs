use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};

/// A triangle whose vertices are interpreted as lying near the unit sphere.
///
/// Vertices are stored exactly as given; normalization onto the sphere
/// happens only when the boundary is tessellated. There is no identity or
/// adjacency here, a triangle is just its ordered vertex triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalTriangle {
    /// First vertex.
    pub a: Vector3,
    /// Second vertex.
    pub b: Vector3,
    /// Third vertex.
    pub c: Vector3,
}

impl SphericalTriangle {
    /// Creates a triangle from its three vertices.
    #[must_use]
    pub fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> [Vector3; 3] {
        [self.a, self.b, self.c]
    }

    /// Splits the triangle into four children at its Euclidean edge
    /// midpoints: three corner triangles followed by the center triangle.
    ///
    /// The midpoints are straight-line averages, not spherical midpoints.
    /// Children therefore dip slightly inside the sphere; tessellation
    /// re-normalizes them onto the surface.
    #[must_use]
    pub fn subdivide(&self) -> [Self; 4] {
        let m1 = (self.a + self.b) / 2.0;
        let m2 = (self.b + self.c) / 2.0;
        let m3 = (self.c + self.a) / 2.0;
        [
            Self::new(self.a, m1, m3),
            Self::new(m1, self.b, m2),
            Self::new(m2, self.c, m3),
            Self::new(m1, m2, m3),
        ]
    }

    /// Projects the vertices onto the unit sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex is zero-length.
    pub fn normalized_vertices(&self) -> Result<[Vector3; 3]> {
        let mut out = [Vector3::zeros(); 3];
        for (slot, v) in out.iter_mut().zip(self.vertices()) {
            let len = v.norm();
            if len < TOLERANCE {
                return Err(GeometryError::ZeroVector.into());
            }
            *slot = v / len;
        }
        Ok(out)
    }
}
