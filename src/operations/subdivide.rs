use crate::error::Result;
use crate::topology::{TriangleData, TriangleId, TriangleStore};

/// Subdivides the triangle at a display index into four children.
///
/// The parent is removed with pop-replace semantics (the last entry moves
/// into the vacated slot) and the children are appended at the end of the
/// display order, marked as subdivision descendants. The store grows by
/// three. Children are ordinary entries and can be subdivided again; depth
/// is unbounded.
pub struct SubdivideTriangle {
    index: usize,
}

impl SubdivideTriangle {
    /// Creates a new `SubdivideTriangle` operation.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Executes the subdivision, returning the IDs of the four children.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range; the store is left
    /// untouched in that case.
    pub fn execute(&self, store: &mut TriangleStore) -> Result<[TriangleId; 4]> {
        let parent = store.remove_at(self.index)?;
        let children = parent.triangle.subdivide();
        Ok(children.map(|triangle| store.insert(TriangleData::child(triangle))))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use crate::geometry::Icosahedron;

    use super::*;

    #[test]
    fn store_grows_by_three() {
        let mut store = TriangleStore::from_icosahedron(&Icosahedron::new());
        SubdivideTriangle::new(0).execute(&mut store).unwrap();
        assert_eq!(store.len(), 23);
    }

    #[test]
    fn children_are_appended_and_marked() {
        let mut store = TriangleStore::from_icosahedron(&Icosahedron::new());
        let ids = SubdivideTriangle::new(5).execute(&mut store).unwrap();

        for (offset, id) in ids.iter().enumerate() {
            assert_eq!(store.id_at(19 + offset).unwrap(), *id);
            assert!(store.get(*id).unwrap().from_subdivision);
        }
        assert_eq!(
            store.subdivided_indices(),
            BTreeSet::from([19, 20, 21, 22])
        );
    }

    #[test]
    fn last_face_moves_into_the_vacated_slot() {
        let ico = Icosahedron::new();
        let mut store = TriangleStore::from_icosahedron(&ico);
        let last = ico.triangles().nth(19).unwrap();

        SubdivideTriangle::new(0).execute(&mut store).unwrap();

        let moved = store.get(store.id_at(0).unwrap()).unwrap();
        assert_eq!(moved.triangle.vertices(), last.vertices());
    }

    #[test]
    fn children_match_the_flat_subdivision_of_the_parent() {
        let ico = Icosahedron::new();
        let mut store = TriangleStore::from_icosahedron(&ico);
        let parent = ico.triangles().next().unwrap();

        let ids = SubdivideTriangle::new(0).execute(&mut store).unwrap();

        for (id, expected) in ids.iter().zip(parent.subdivide()) {
            let child = store.get(*id).unwrap();
            assert_eq!(child.triangle.vertices(), expected.vertices());
        }
    }

    #[test]
    fn out_of_range_index_leaves_the_store_untouched() {
        let mut store = TriangleStore::from_icosahedron(&Icosahedron::new());
        assert!(SubdivideTriangle::new(20).execute(&mut store).is_err());
        assert_eq!(store.len(), 20);
        assert!(store.subdivided_indices().is_empty());
    }

    #[test]
    fn children_can_be_subdivided_again() {
        let mut store = TriangleStore::from_icosahedron(&Icosahedron::new());
        SubdivideTriangle::new(0).execute(&mut store).unwrap();
        // Slot 22 holds the center child of the first subdivision.
        SubdivideTriangle::new(22).execute(&mut store).unwrap();
        assert_eq!(store.len(), 26);
    }
}
