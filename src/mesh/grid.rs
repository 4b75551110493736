use crate::mesh::MeshError;

/// Number of vertices a row-major grid sample of `steps_x` by `steps_y`
/// cells produces (both boundary rows included).
pub fn expected_vertex_count(steps_x: usize, steps_y: usize) -> usize {
    (steps_x + 1) * (steps_y + 1)
}

/// Emit the triangle index list for a grid of `steps_x` by `steps_y` cells,
/// two triangles per cell with a fixed diagonal and winding. Indices refer
/// to a vertex list in the row-major order of [`sample_surface`].
///
/// [`sample_surface`]: crate::mesh::surface::sample_surface
pub fn triangulate_grid(steps_x: usize, steps_y: usize) -> Vec<u32> {
    let stride = steps_x as u32 + 1;
    let mut triangles = vec![0u32; 6 * steps_x * steps_y];

    // vi walks the vertex list: one step per cell, one extra per row
    // transition to skip the row's last column.
    let mut ti = 0;
    let mut vi = 0u32;
    for _y in 0..steps_y {
        for _x in 0..steps_x {
            triangles[ti] = vi;
            triangles[ti + 1] = vi + stride;
            triangles[ti + 2] = vi + 1;

            triangles[ti + 3] = vi + 1;
            triangles[ti + 4] = vi + stride;
            triangles[ti + 5] = vi + stride + 1;

            ti += 6;
            vi += 1;
        }
        vi += 1;
    }

    triangles
}

/// Validate that a vertex list length matches the grid the indices were
/// (or will be) generated for. A mismatch means every emitted index is
/// suspect, so callers should check before uploading anything.
pub fn check_grid(vertex_count: usize, steps_x: usize, steps_y: usize) -> Result<(), MeshError> {
    let expected = expected_vertex_count(steps_x, steps_y);
    if vertex_count != expected {
        return Err(MeshError::GridMismatch {
            expected,
            actual: vertex_count,
        });
    }
    Ok(())
}
