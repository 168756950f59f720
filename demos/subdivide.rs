//! Terminal demo: drive a subdivision session and log what the display
//! layer would receive.
//!
//! ```text
//! cargo run --example subdivide
//! ```

use sphaera::session::Session;
use sphaera::tessellation::TessellationParams;
use sphaera::Result;

fn main() -> Result<()> {
    // Default: INFO for the demo. Override with RUST_LOG (e.g. RUST_LOG=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut session = Session::new(TessellationParams::default())?;
    tracing::info!(triangles = session.triangle_count(), "session created");

    // Subdivide face 0, then one of the children, then another base face.
    for index in [0, 22, 5] {
        session.select(index)?;
        let children = session.subdivide_selected()?;
        tracing::info!(
            selected = index,
            triangles = session.triangle_count(),
            ?children,
            "subdivided"
        );
    }

    let scene = session.build_scene()?;
    tracing::info!(
        backdrop_vertices = scene.backdrop.vertices.len(),
        backdrop_triangles = scene.backdrop.indices.len(),
        paths = scene.paths.len(),
        "scene rebuilt"
    );
    for index in session.subdivided_indices() {
        tracing::debug!(index, "marked as subdivided");
    }

    Ok(())
}
