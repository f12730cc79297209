use crate::types::{BoundingBox, Point};

/// A scrollbar axis.
///
/// The engine never duplicates per-axis logic: everything axis-specific is a
/// field selection on this descriptor, and both axes are driven by iterating
/// [`Orientation::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Both axes, in the order the write phases iterate them.
    pub const ALL: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    pub fn other(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The host style variable carrying the viewport size along this axis.
    pub fn viewport_size_var(self) -> &'static str {
        match self {
            Self::Vertical => "--viewport-height",
            Self::Horizontal => "--viewport-width",
        }
    }

    /// Selects this axis's coordinate from a point (`y` for vertical, `x` for
    /// horizontal — the `pageY`/`pageX` and `clientY`/`clientX` mapping).
    pub fn coord_of(self, p: Point) -> f32 {
        match self {
            Self::Vertical => p.y,
            Self::Horizontal => p.x,
        }
    }

    /// Selects this axis's extent from a bounding box (`height`/`width`).
    pub fn size_of(self, b: BoundingBox) -> f32 {
        match self {
            Self::Vertical => b.height,
            Self::Horizontal => b.width,
        }
    }

    /// Selects this axis's leading edge from a bounding box (`top`/`left`).
    pub fn start_of(self, b: BoundingBox) -> f32 {
        match self {
            Self::Vertical => b.y,
            Self::Horizontal => b.x,
        }
    }
}

/// Per-axis storage indexed by [`Orientation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisPair<T> {
    pub vertical: T,
    pub horizontal: T,
}

impl<T> AxisPair<T> {
    pub fn new(vertical: T, horizontal: T) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Builds a pair with the same value on both axes.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            vertical: value.clone(),
            horizontal: value,
        }
    }

    pub fn get(&self, orientation: Orientation) -> &T {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }

    pub fn get_mut(&mut self, orientation: Orientation) -> &mut T {
        match orientation {
            Orientation::Vertical => &mut self.vertical,
            Orientation::Horizontal => &mut self.horizontal,
        }
    }
}

impl<T> core::ops::Index<Orientation> for AxisPair<T> {
    type Output = T;

    fn index(&self, orientation: Orientation) -> &T {
        self.get(orientation)
    }
}

impl<T> core::ops::IndexMut<Orientation> for AxisPair<T> {
    fn index_mut(&mut self, orientation: Orientation) -> &mut T {
        self.get_mut(orientation)
    }
}
