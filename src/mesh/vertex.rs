use std::fmt;
use std::ops::{Index, IndexMut};

/// A vertex with `N` f32 channels. Channels 0..3 are position (x, y, z);
/// anything after that is per-vertex attribute data (color, selection, ...).
/// Plain value type, copied freely.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vert<const N: usize> {
    pub channels: [f32; N],
}

impl<const N: usize> Vert<N> {
    pub const fn new(channels: [f32; N]) -> Self {
        Self { channels }
    }
}

impl<const N: usize> From<[f32; N]> for Vert<N> {
    fn from(channels: [f32; N]) -> Self {
        Self { channels }
    }
}

impl<const N: usize> Index<usize> for Vert<N> {
    type Output = f32;

    fn index(&self, idx: usize) -> &f32 {
        &self.channels[idx]
    }
}

impl<const N: usize> IndexMut<usize> for Vert<N> {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.channels[idx]
    }
}

impl<const N: usize> fmt::Display for Vert<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.channels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// The bytemuck derives don't handle const-generic types; repr(transparent)
// over [f32; N] has no padding for any N.
unsafe impl<const N: usize> bytemuck::Zeroable for Vert<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vert<N> {}
