use crate::error::Result;
use crate::geometry::SphericalTriangle;
use crate::math::{great_circle_arc, Point3};

use super::{LineStyle, Polyline, RenderPath, TessellationParams};

/// Tessellates a triangle's boundary into a single line-mode path.
///
/// The three vertices are projected onto the unit sphere, then the three
/// great-circle arcs a→b, b→c, c→a are sampled and concatenated in order
/// into one continuous polyline (`3 * arc_samples` points, 150 at the
/// defaults).
pub struct TessellateTriangle {
    triangle: SphericalTriangle,
    style: LineStyle,
    params: TessellationParams,
}

impl TessellateTriangle {
    /// Creates a new `TessellateTriangle` operation.
    #[must_use]
    pub fn new(triangle: SphericalTriangle, style: LineStyle, params: TessellationParams) -> Self {
        Self {
            triangle,
            style,
            params,
        }
    }

    /// Executes the tessellation, returning the boundary path.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is zero-length, if two vertices are
    /// antipodal, or if fewer than 2 arc samples are configured.
    pub fn execute(&self) -> Result<RenderPath> {
        let [a, b, c] = self.triangle.normalized_vertices()?;

        let mut points = Vec::with_capacity(3 * self.params.arc_samples);
        for (start, end) in [(a, b), (b, c), (c, a)] {
            let arc = great_circle_arc(&start, &end, self.params.arc_samples)?;
            points.extend(arc.into_iter().map(Point3::from));
        }

        Ok(RenderPath {
            polyline: Polyline { points },
            style: self.style,
        })
    }
}
