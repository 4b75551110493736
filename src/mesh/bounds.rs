use glam::Vec3;

use crate::mesh::vertex::Vert;

/// Channel-wise maximum over the first `channels` channels of a non-empty
/// vertex list. Channels past the bound are copied from the first vertex
/// unreduced, so with `channels == N - 1` the attribute channel passes
/// through untouched.
pub fn channel_max<const N: usize>(list: &[Vert<N>], channels: usize) -> Vert<N> {
    assert!(!list.is_empty(), "channel_max over an empty vertex list");
    debug_assert!(channels <= N);

    let mut max = list[0];
    for i in 0..channels {
        for v in list {
            if v[i] > max[i] {
                max[i] = v[i];
            }
        }
    }
    max
}

/// Channel-wise minimum; same bound semantics as [`channel_max`].
pub fn channel_min<const N: usize>(list: &[Vert<N>], channels: usize) -> Vert<N> {
    assert!(!list.is_empty(), "channel_min over an empty vertex list");
    debug_assert!(channels <= N);

    let mut min = list[0];
    for i in 0..channels {
        for v in list {
            if v[i] < min[i] {
                min[i] = v[i];
            }
        }
    }
    min
}

/// Per-channel bounds of a vertex list, used to frame a mesh: dimensions,
/// center and uniform scale all derive from (min, max).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents<const N: usize> {
    pub min: Vert<N>,
    pub max: Vert<N>,
}

impl<const N: usize> Extents<N> {
    /// Single pass computing both ends over the first `channels` channels.
    pub fn measure(list: &[Vert<N>], channels: usize) -> Self {
        assert!(!list.is_empty(), "extents of an empty vertex list");
        debug_assert!(channels <= N);

        let mut min = list[0];
        let mut max = list[0];
        for v in list {
            for i in 0..channels {
                if v[i] < min[i] {
                    min[i] = v[i];
                }
                if v[i] > max[i] {
                    max[i] = v[i];
                }
            }
        }
        Self { min, max }
    }

    /// Bounds over every channel except the last, which carries attribute
    /// data rather than geometry.
    pub fn spatial(list: &[Vert<N>]) -> Self {
        Self::measure(list, N.saturating_sub(1))
    }

    pub fn dimension(&self, i: usize) -> f32 {
        self.max[i] - self.min[i]
    }

    pub fn center(&self, i: usize) -> f32 {
        self.min[i] + self.dimension(i) / 2.0
    }

    pub fn size3(&self) -> Vec3 {
        Vec3::new(self.dimension(0), self.dimension(1), self.dimension(2))
    }

    pub fn center3(&self) -> Vec3 {
        Vec3::new(self.center(0), self.center(1), self.center(2))
    }

    pub fn largest_dimension(&self) -> f32 {
        self.size3().max_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_corners(attr: f32) -> Vec<Vert<4>> {
        let mut verts = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    verts.push(Vert::new([x, y, z, attr]));
                }
            }
        }
        verts
    }

    #[test]
    fn single_vertex_is_its_own_extremum() {
        let list = [Vert::new([3.0, -2.0, 7.5, 0.25])];
        assert_eq!(channel_max(&list, 3), list[0]);
        assert_eq!(channel_min(&list, 3), list[0]);
    }

    #[test]
    fn cube_corner_extrema() {
        let verts = cube_corners(0.0);
        let max = channel_max(&verts, 3);
        let min = channel_min(&verts, 3);
        assert_eq!(max.channels, [1.0, 1.0, 1.0, 0.0]);
        assert_eq!(min.channels, [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn order_independent() {
        let mut verts = cube_corners(0.0);
        let max = channel_max(&verts, 3);
        let min = channel_min(&verts, 3);
        verts.reverse();
        verts.swap(1, 5);
        assert_eq!(channel_max(&verts, 3), max);
        assert_eq!(channel_min(&verts, 3), min);
    }

    #[test]
    fn attribute_channel_passes_through() {
        let verts = [
            Vert::new([0.0, 0.0, 0.0, 0.5]),
            Vert::new([2.0, 3.0, 4.0, 9.0]),
        ];
        let max = channel_max(&verts, 3);
        assert_eq!(max.channels, [2.0, 3.0, 4.0, 0.5]);
    }

    #[test]
    fn repeated_calls_agree() {
        let verts = cube_corners(1.0);
        assert_eq!(channel_max(&verts, 3), channel_max(&verts, 3));
        assert_eq!(channel_min(&verts, 3), channel_min(&verts, 3));
    }

    #[test]
    fn measure_matches_separate_reductions() {
        let verts = cube_corners(0.5);
        let ext = Extents::measure(&verts, 3);
        assert_eq!(ext.min, channel_min(&verts, 3));
        assert_eq!(ext.max, channel_max(&verts, 3));
        assert_eq!(ext, Extents::spatial(&verts));
    }

    #[test]
    fn framing_derivations() {
        let verts = [
            Vert::new([-2.0, 0.0, 1.0, 0.0]),
            Vert::new([4.0, 1.0, 3.0, 1.0]),
        ];
        let ext = Extents::spatial(&verts);
        assert_eq!(ext.size3(), Vec3::new(6.0, 1.0, 2.0));
        assert_eq!(ext.center3(), Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(ext.largest_dimension(), 6.0);
    }
}
