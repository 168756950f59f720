use crate::geometry::SphericalTriangle;

slotmap::new_key_type! {
    /// Unique identifier for a triangle in the store.
    pub struct TriangleId;
}

/// Data associated with a stored triangle.
#[derive(Debug, Clone)]
pub struct TriangleData {
    /// The triangle geometry, vertices kept exactly as created.
    pub triangle: SphericalTriangle,
    /// Whether this entry was produced by subdividing a parent.
    ///
    /// Set once at creation time and carried with the entry, so the
    /// display marking survives any reordering of the store.
    pub from_subdivision: bool,
}

impl TriangleData {
    /// Creates an entry for a base icosahedron face.
    #[must_use]
    pub fn base(triangle: SphericalTriangle) -> Self {
        Self {
            triangle,
            from_subdivision: false,
        }
    }

    /// Creates an entry for a child produced by subdivision.
    #[must_use]
    pub fn child(triangle: SphericalTriangle) -> Self {
        Self {
            triangle,
            from_subdivision: true,
        }
    }
}
