use std::f64::consts::{PI, TAU};

use crate::error::{Result, TessellationError};
use crate::math::{Point3, Vector3};

use super::{TessellationParams, TriangleMesh};

/// Tessellates the translucent unit sphere drawn behind the triangles.
///
/// Builds a longitude/latitude grid: `backdrop_longitudes` bands around the
/// equator and `backdrop_latitudes` bands from pole to pole, each grid quad
/// split into two triangles. Normals point outward, so they equal the vertex
/// positions. The mesh depends only on the parameters and is built once per
/// session.
pub struct TessellateBackdrop {
    params: TessellationParams,
}

impl TessellateBackdrop {
    /// Creates a new `TessellateBackdrop` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning the sphere mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is too coarse to enclose a volume
    /// (fewer than 3 longitude or 2 latitude bands).
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let nu = self.params.backdrop_longitudes;
        let nv = self.params.backdrop_latitudes;
        if nu < 3 || nv < 2 {
            return Err(TessellationError::InvalidParameters(format!(
                "backdrop grid {nu}x{nv} is too coarse; need at least 3x2"
            ))
            .into());
        }

        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve((nu + 1) * (nv + 1));
        mesh.normals.reserve((nu + 1) * (nv + 1));
        mesh.indices.reserve(2 * nu * nv);

        // Vertex grid: longitude u in [0, 2π], latitude v in [0, π] from the
        // north pole. The u = 0 and u = 2π columns are duplicated so index
        // arithmetic stays a plain row scan.
        for j in 0..=nv {
            let v = PI * j as f64 / nv as f64;
            for i in 0..=nu {
                let u = TAU * i as f64 / nu as f64;
                let p = Vector3::new(v.sin() * u.cos(), v.sin() * u.sin(), v.cos());
                mesh.vertices.push(Point3::from(p));
                mesh.normals.push(p);
            }
        }

        for j in 0..nv {
            for i in 0..nu {
                let a = (j * (nu + 1) + i) as u32;
                let b = a + 1;
                let c = a + (nu + 1) as u32;
                let d = c + 1;
                mesh.indices.push([a, c, b]);
                mesh.indices.push([b, c, d]);
            }
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn grid_sizes_match_the_params() {
        let params = TessellationParams::default();
        let mesh = TessellateBackdrop::new(params).execute().unwrap();
        assert_eq!(mesh.vertices.len(), 41 * 21);
        assert_eq!(mesh.normals.len(), 41 * 21);
        assert_eq!(mesh.indices.len(), 2 * 40 * 20);
    }

    #[test]
    fn vertices_lie_on_the_unit_sphere() {
        let mesh = TessellateBackdrop::new(TessellationParams::default())
            .execute()
            .unwrap();
        for v in &mesh.vertices {
            assert_relative_eq!(v.coords.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn normals_equal_positions() {
        let mesh = TessellateBackdrop::new(TessellationParams::default())
            .execute()
            .unwrap();
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
            assert_relative_eq!(v.coords, *n, epsilon = 1e-12);
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let mesh = TessellateBackdrop::new(TessellationParams::default())
            .execute()
            .unwrap();
        let count = mesh.vertices.len() as u32;
        assert!(mesh
            .indices
            .iter()
            .flatten()
            .all(|&i| i < count));
    }

    #[test]
    fn poles_sit_on_the_z_axis() {
        let mesh = TessellateBackdrop::new(TessellationParams::default())
            .execute()
            .unwrap();
        assert_relative_eq!(mesh.vertices[0].z, 1.0, epsilon = 1e-12);
        let last = mesh.vertices[mesh.vertices.len() - 1];
        assert_relative_eq!(last.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn too_coarse_a_grid_fails() {
        let params = TessellationParams {
            backdrop_longitudes: 2,
            ..TessellationParams::default()
        };
        assert!(TessellateBackdrop::new(params).execute().is_err());
    }
}
