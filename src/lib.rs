//! Procedural surface mesher: samples a height function over a regular
//! grid, triangulates the grid, and computes the bounds a renderer needs
//! to frame the result. Uploading to a GPU is the caller's business; the
//! buffers here are already packed for it.

pub mod engine;
pub mod examples;
pub mod mesh;

pub use engine::{HeightFn, MeshCommand, MeshEngine, MeshResult};
pub use examples::{SURFACE_EXAMPLES, SurfaceExample};
pub use mesh::{Extents, MeshError, SurfaceMesh, Vert};
