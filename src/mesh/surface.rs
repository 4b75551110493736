use crate::mesh::bounds::Extents;
use crate::mesh::grid::{expected_vertex_count, triangulate_grid};
use crate::mesh::vertex::Vert;

/// Sample `height` over a regular grid and append one vertex per grid
/// point to `out`, in row-major order: outer loop over X, inner over Y,
/// both boundary steps included. Channel 3 is a 0.0/1.0 toggle that flips
/// once per emitted vertex across the whole traversal — it is not reset
/// at row boundaries, so its phase depends only on how many vertices have
/// been emitted so far.
///
/// Appending lets several surfaces share one buffer; the toggle restarts
/// at 0.0 on each call.
pub fn sample_surface_into(
    out: &mut Vec<Vert<4>>,
    origin: (f32, f32),
    step: (f32, f32),
    steps: (usize, usize),
    height: impl Fn(f32, f32) -> f32,
) {
    debug_assert!(origin.0.is_finite() && origin.1.is_finite());
    debug_assert!(step.0.is_finite() && step.1.is_finite());

    let (steps_x, steps_y) = steps;
    out.reserve(expected_vertex_count(steps_x, steps_y));

    let mut color = false;
    for ix in 0..=steps_x {
        for iy in 0..=steps_y {
            let x = origin.0 + ix as f32 * step.0;
            let y = origin.1 + iy as f32 * step.1;
            let c = if color { 1.0 } else { 0.0 };

            out.push(Vert::new([x, y, height(x, y), c]));
            color = !color;
        }
    }
}

/// [`sample_surface_into`] into a fresh list.
pub fn sample_surface(
    origin: (f32, f32),
    step: (f32, f32),
    steps: (usize, usize),
    height: impl Fn(f32, f32) -> f32,
) -> Vec<Vert<4>> {
    let mut vertices = Vec::new();
    sample_surface_into(&mut vertices, origin, step, steps, height);
    vertices
}

/// A height-mapped surface ready for upload: packed vertices, triangle
/// indices into them, and the spatial bounds for camera framing.
pub struct SurfaceMesh {
    pub vertices: Vec<Vert<4>>,
    pub indices: Vec<u32>,
    pub extents: Extents<4>,
}

impl SurfaceMesh {
    pub fn build(
        origin: (f32, f32),
        step: (f32, f32),
        steps: (usize, usize),
        height: impl Fn(f32, f32) -> f32,
    ) -> Self {
        let vertices = sample_surface(origin, step, steps, height);
        let indices = triangulate_grid(steps.0, steps.1);
        let extents = Extents::spatial(&vertices);
        Self {
            vertices,
            indices,
            extents,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer contents: 4 f32 channels per vertex, 16-byte stride.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Element buffer contents: u32 indices, triangle list.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
