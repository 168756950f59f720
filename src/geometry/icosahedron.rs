use crate::math::Vector3;

use super::SphericalTriangle;

/// The regular icosahedron used as the base mesh for sphere approximation.
///
/// Twelve vertices on a common circumsphere and twenty triangular faces
/// indexing into them. Both tables are fixed constants (up to the golden
/// ratio φ = (1+√5)/2 in the coordinates); the combinatorial structure is
/// that of the regular icosahedron: every vertex touches exactly five faces
/// and every face is equilateral.
#[derive(Debug, Clone)]
pub struct Icosahedron {
    vertices: [Vector3; 12],
    faces: [[usize; 3]; 20],
}

/// Face index triples. Constant table; the union of the face edges forms a
/// closed, orientable triangulated sphere.
const FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

impl Icosahedron {
    /// Builds the base icosahedron.
    #[must_use]
    pub fn new() -> Self {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;

        // The 12 cyclic permutations of (0, ±1, ±φ), written out explicitly.
        let vertices = [
            Vector3::new(-1.0, phi, 0.0),
            Vector3::new(1.0, phi, 0.0),
            Vector3::new(-1.0, -phi, 0.0),
            Vector3::new(1.0, -phi, 0.0),
            Vector3::new(0.0, -1.0, phi),
            Vector3::new(0.0, 1.0, phi),
            Vector3::new(0.0, -1.0, -phi),
            Vector3::new(0.0, 1.0, -phi),
            Vector3::new(phi, 0.0, -1.0),
            Vector3::new(phi, 0.0, 1.0),
            Vector3::new(-phi, 0.0, -1.0),
            Vector3::new(-phi, 0.0, 1.0),
        ];

        Self {
            vertices,
            faces: FACES,
        }
    }

    /// Returns the 12 vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Vector3; 12] {
        &self.vertices
    }

    /// Returns the 20 faces as index triples into [`Self::vertices`].
    #[must_use]
    pub fn faces(&self) -> &[[usize; 3]; 20] {
        &self.faces
    }

    /// Returns the radius of the circumscribed sphere (`√(1+φ²)`).
    #[must_use]
    pub fn circumradius(&self) -> f64 {
        self.vertices[0].norm()
    }

    /// Iterates over the faces as triangles with resolved vertex positions.
    pub fn triangles(&self) -> impl Iterator<Item = SphericalTriangle> + '_ {
        self.faces
            .iter()
            .map(|&[i, j, k]| SphericalTriangle::new(self.vertices[i], self.vertices[j], self.vertices[k]))
    }
}

impl Default for Icosahedron {
    fn default() -> Self {
        Self::new()
    }
}
