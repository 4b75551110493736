pub mod bounds;
pub mod grid;
pub mod surface;
pub mod vertex;

pub use bounds::{Extents, channel_max, channel_min};
pub use grid::{check_grid, expected_vertex_count, triangulate_grid};
pub use surface::{SurfaceMesh, sample_surface, sample_surface_into};
pub use vertex::Vert;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MeshError {
    #[error("vertex list does not match grid: expected {expected} vertices, got {actual}")]
    GridMismatch { expected: usize, actual: usize },
}
