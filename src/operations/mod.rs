mod subdivide;

pub use subdivide::SubdivideTriangle;
