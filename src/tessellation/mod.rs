mod tessellate_backdrop;
mod tessellate_triangle;

pub use tessellate_backdrop::TessellateBackdrop;
pub use tessellate_triangle::TessellateTriangle;

use crate::error::{Result, TessellationError};
use crate::math::{Point3, Vector3};

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Number of points sampled along each great-circle arc.
    pub arc_samples: usize,
    /// Longitude bands of the backdrop sphere grid.
    pub backdrop_longitudes: usize,
    /// Latitude bands of the backdrop sphere grid.
    pub backdrop_latitudes: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            arc_samples: 50,
            backdrop_longitudes: 40,
            backdrop_latitudes: 20,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Unsubdivided base faces.
    pub const BASE: Self = Self::new(255, 0, 0);
    /// The currently selected face.
    pub const SELECTED: Self = Self::new(0, 0, 255);
    /// Faces that descend from a subdivision.
    pub const SUBDIVIDED: Self = Self::new(0, 128, 0);
    /// The translucent context sphere.
    pub const BACKDROP: Self = Self::new(200, 200, 200);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fill parameters for the translucent backdrop sphere.
#[derive(Debug, Clone, Copy)]
pub struct BackdropStyle {
    /// Fill color.
    pub color: Color,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self {
            color: Color::BACKDROP,
            opacity: 0.3,
        }
    }
}

/// Stroke parameters for a rendered line path.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in display units.
    pub width: f64,
}

impl LineStyle {
    /// Default stroke width for triangle boundaries.
    pub const DEFAULT_WIDTH: f64 = 2.0;

    /// Creates a style with the default stroke width.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            width: Self::DEFAULT_WIDTH,
        }
    }

    /// Sets the stroke width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn with_width(mut self, width: f64) -> Result<Self> {
        if width <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        self.width = width;
        Ok(self)
    }
}

/// A renderable line-mode trace: one polyline with its stroke style.
#[derive(Debug, Clone)]
pub struct RenderPath {
    /// The ordered points of the trace.
    pub polyline: Polyline,
    /// Stroke color and width.
    pub style: LineStyle,
}
