pub mod triangle;

pub use triangle::{TriangleData, TriangleId};

use std::collections::BTreeSet;

use crate::error::StoreError;
use crate::geometry::Icosahedron;
use slotmap::SlotMap;

/// Arena that owns every triangle of a session, plus the display order the
/// external layer indexes into.
///
/// Entries are addressed by generational [`TriangleId`]s, so an id stays
/// valid (or becomes detectably stale) no matter how the display order
/// shifts. The "descends from a subdivision" mark lives on the entry itself
/// rather than in a separate index set, which keeps it correct across
/// removals by construction.
#[derive(Debug, Default)]
pub struct TriangleStore {
    triangles: SlotMap<TriangleId, TriangleData>,
    order: Vec<TriangleId>,
}

impl TriangleStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the 20 faces of the base icosahedron.
    #[must_use]
    pub fn from_icosahedron(icosahedron: &Icosahedron) -> Self {
        let mut store = Self::new();
        for triangle in icosahedron.triangles() {
            store.insert(TriangleData::base(triangle));
        }
        store
    }

    /// Returns the number of stored triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the store holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a triangle at the end of the display order and returns its ID.
    pub fn insert(&mut self, data: TriangleData) -> TriangleId {
        let id = self.triangles.insert(data);
        self.order.push(id);
        id
    }

    /// Resolves a display index to the ID stored there.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn id_at(&self, index: usize) -> Result<TriangleId, StoreError> {
        self.order
            .get(index)
            .copied()
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.order.len(),
            })
    }

    /// Returns a reference to the triangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is stale.
    pub fn get(&self, id: TriangleId) -> Result<&TriangleData, StoreError> {
        self.triangles.get(id).ok_or(StoreError::TriangleNotFound)
    }

    /// Removes the triangle at a display index and returns its data.
    ///
    /// Pop-replace semantics: the last entry of the display order moves into
    /// the vacated slot, so all other indices stay put.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<TriangleData, StoreError> {
        let id = self.id_at(index)?;
        let data = self
            .triangles
            .remove(id)
            .ok_or(StoreError::TriangleNotFound)?;
        self.order.swap_remove(index);
        Ok(data)
    }

    /// Iterates over the triangles in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TriangleId, &TriangleData)> + '_ {
        self.order.iter().map(move |&id| (id, &self.triangles[id]))
    }

    /// Returns the display indices of entries that descend from a
    /// subdivision, derived on demand from the per-entry marks.
    #[must_use]
    pub fn subdivided_indices(&self) -> BTreeSet<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, (_, data))| data.from_subdivision)
            .map(|(index, _)| index)
            .collect()
    }
}
