use std::collections::BTreeSet;

use crate::error::{Result, StoreError};
use crate::geometry::Icosahedron;
use crate::operations::SubdivideTriangle;
use crate::tessellation::{
    BackdropStyle, Color, LineStyle, RenderPath, TessellateBackdrop, TessellateTriangle,
    TessellationParams, TriangleMesh,
};
use crate::topology::{TriangleId, TriangleStore};

/// One interactive session over the subdividable icosahedron.
///
/// Owns all state with a session lifetime: the base icosahedron (built once),
/// the triangle store seeded with its 20 faces, the current selection, and
/// the backdrop mesh (built once). Nothing persists beyond the session; drop
/// it and the state is gone.
///
/// Interactions are synchronous and single-threaded: each [`Session::select`]
/// or [`Session::subdivide_selected`] mutates the state, and
/// [`Session::build_scene`] recomputes the full renderable scene from
/// scratch. A failed interaction leaves the state untouched.
pub struct Session {
    icosahedron: Icosahedron,
    store: TriangleStore,
    selection: usize,
    backdrop: TriangleMesh,
    params: TessellationParams,
}

/// Everything the display layer needs for one frame: the translucent
/// context sphere plus one boundary path per stored triangle, in display
/// order.
#[derive(Debug)]
pub struct Scene<'a> {
    /// The context sphere mesh, cached on the session.
    pub backdrop: &'a TriangleMesh,
    /// Fill color and opacity for the backdrop.
    pub backdrop_style: BackdropStyle,
    /// Triangle boundary paths, index-aligned with the store.
    pub paths: Vec<RenderPath>,
}

impl Session {
    /// Creates a session: 20 base faces, selection on index 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the backdrop grid parameters are invalid.
    pub fn new(params: TessellationParams) -> Result<Self> {
        let icosahedron = Icosahedron::new();
        let store = TriangleStore::from_icosahedron(&icosahedron);
        let backdrop = TessellateBackdrop::new(params).execute()?;
        Ok(Self {
            icosahedron,
            store,
            selection: 0,
            backdrop,
            params,
        })
    }

    /// Returns the base icosahedron.
    #[must_use]
    pub fn icosahedron(&self) -> &Icosahedron {
        &self.icosahedron
    }

    /// Returns the triangle store.
    #[must_use]
    pub fn store(&self) -> &TriangleStore {
        &self.store
    }

    /// Returns the currently selected display index.
    #[must_use]
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Returns the number of stored triangles, for display as a count.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.store.len()
    }

    /// Returns the display indices to color as subdivision descendants.
    #[must_use]
    pub fn subdivided_indices(&self) -> BTreeSet<usize> {
        self.store.subdivided_indices()
    }

    /// Selects the triangle at a display index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range; the previous selection
    /// is kept.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.store.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.store.len(),
            }
            .into());
        }
        self.selection = index;
        Ok(())
    }

    /// Subdivides the selected triangle into four children.
    ///
    /// The selection index is kept; after the pop-replace removal it refers
    /// to the entry that moved into the vacated slot. The store only grows,
    /// so the selection always stays in range.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection index is out of range.
    pub fn subdivide_selected(&mut self) -> Result<[TriangleId; 4]> {
        SubdivideTriangle::new(self.selection).execute(&mut self.store)
    }

    /// Rebuilds the full renderable scene from the current state.
    ///
    /// Subdivision descendants are colored [`Color::SUBDIVIDED`], the
    /// selected entry [`Color::SELECTED`] (descendant coloring wins), and
    /// everything else [`Color::BASE`].
    ///
    /// # Errors
    ///
    /// Returns an error if any triangle fails to tessellate.
    pub fn build_scene(&self) -> Result<Scene<'_>> {
        let mut paths = Vec::with_capacity(self.store.len());
        for (index, (_, data)) in self.store.iter().enumerate() {
            let color = if data.from_subdivision {
                Color::SUBDIVIDED
            } else if index == self.selection {
                Color::SELECTED
            } else {
                Color::BASE
            };
            let path =
                TessellateTriangle::new(data.triangle, LineStyle::new(color), self.params)
                    .execute()?;
            paths.push(path);
        }
        Ok(Scene {
            backdrop: &self.backdrop,
            backdrop_style: BackdropStyle::default(),
            paths,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn session() -> Session {
        Session::new(TessellationParams::default()).unwrap()
    }

    #[test]
    fn fresh_session_has_20_faces_and_selection_0() {
        let s = session();
        assert_eq!(s.triangle_count(), 20);
        assert_eq!(s.selection(), 0);
        assert!(s.subdivided_indices().is_empty());
    }

    #[test]
    fn three_subdivisions_grow_20_23_26_29() {
        let mut s = session();
        for expected in [23, 26, 29] {
            s.subdivide_selected().unwrap();
            assert_eq!(s.triangle_count(), expected);
        }
    }

    #[test]
    fn subdividing_slot_0_moves_the_last_face_in() {
        let mut s = session();
        let last = s.icosahedron().triangles().nth(19).unwrap();

        s.select(0).unwrap();
        s.subdivide_selected().unwrap();

        let moved = s.store().get(s.store().id_at(0).unwrap()).unwrap();
        assert_eq!(moved.triangle.vertices(), last.vertices());
    }

    #[test]
    fn subdivided_indices_mark_the_appended_children() {
        let mut s = session();
        s.subdivide_selected().unwrap();
        assert_eq!(s.subdivided_indices(), BTreeSet::from([19, 20, 21, 22]));
    }

    #[test]
    fn select_out_of_range_keeps_the_previous_selection() {
        let mut s = session();
        s.select(7).unwrap();
        assert!(s.select(20).is_err());
        assert_eq!(s.selection(), 7);
    }

    #[test]
    fn children_can_be_selected_and_subdivided() {
        let mut s = session();
        s.subdivide_selected().unwrap();
        s.select(22).unwrap();
        s.subdivide_selected().unwrap();
        assert_eq!(s.triangle_count(), 26);
        // The re-subdivided child's children are marked too.
        assert!(s.subdivided_indices().contains(&25));
    }

    #[test]
    fn scene_has_one_path_per_triangle() {
        let mut s = session();
        s.subdivide_selected().unwrap();
        let scene = s.build_scene().unwrap();
        assert_eq!(scene.paths.len(), 23);
        assert!(scene
            .paths
            .iter()
            .all(|p| p.polyline.points.len() == 150));
    }

    #[test]
    fn scene_coloring_follows_selection_and_subdivision() {
        let mut s = session();
        s.subdivide_selected().unwrap();
        s.select(3).unwrap();
        let scene = s.build_scene().unwrap();

        assert_eq!(scene.paths[3].style.color, Color::SELECTED);
        for i in 19..23 {
            assert_eq!(scene.paths[i].style.color, Color::SUBDIVIDED);
        }
        assert_eq!(scene.paths[0].style.color, Color::BASE);
    }

    #[test]
    fn backdrop_is_reused_across_scenes() {
        let s = session();
        let first = s.build_scene().unwrap();
        let second = s.build_scene().unwrap();
        assert!(std::ptr::eq(first.backdrop, second.backdrop));
    }
}
