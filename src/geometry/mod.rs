pub mod icosahedron;
pub mod triangle;

pub use icosahedron::Icosahedron;
pub use triangle::SphericalTriangle;
