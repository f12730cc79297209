use crate::orientation::AxisPair;

/// Identifies a pointer device for capture bookkeeping.
pub type PointerId = u32;

/// A position in host coordinates (page or client space, caller-defined).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bounding box measured live from the host render tree.
///
/// `x`/`y` are the leading edges in client space (`left`/`top`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A positioned pointer event delivered by the host input source.
///
/// `page` coordinates are stable under viewport scrolling (drag origins);
/// `client` coordinates are relative to the visible page area (track jumps,
/// compared against live bounding boxes).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub page: Point,
    pub client: Point,
}

/// Raw per-axis sizes measured by the host.
///
/// `viewport_size` and `scrollbar_track_size` are content-box sizes;
/// `viewport_scroll_size` is the total scrollable content size.
/// `overflow_hidden` reflects the axis's overflow style policy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisMeasurement {
    pub viewport_size: f32,
    pub viewport_scroll_size: f32,
    pub scrollbar_track_size: f32,
    pub overflow_hidden: bool,
}

/// Freshly measured geometry for both axes.
pub type Measurements = AxisPair<AxisMeasurement>;

/// Native scroll positions for both axes (`scrollTop`/`scrollLeft`).
pub type ScrollPositions = AxisPair<f32>;

/// Which end of an axis a boundary flag refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Start,
    End,
}

/// How an issued scroll command should move the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}
