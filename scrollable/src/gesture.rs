use crate::geometry::AxisGeometry;
use crate::orientation::Orientation;
use crate::types::{BoundingBox, PointerId};

/// Per-axis drag tracking for thumb gestures.
///
/// Each orientation's state is fully independent: per-axis pointer capture
/// makes two simultaneous single-pointer drags (one per axis, multi-touch)
/// structurally possible without corrupting each other.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct DragState {
    /// Idle ↔ Dragging flag.
    pub is_scrolling: bool,
    /// Cached-track-size / live-track-size at drag start; corrects for
    /// transform scaling applied between measurements.
    pub scrolling_ratio: f32,
    /// Pointer page coordinate at drag start.
    pub origin_coord: f32,
    /// Native scroll position at drag start.
    pub origin_scroll: f32,
    /// The capturing pointer; released exactly once, at drag end.
    pub pointer: Option<PointerId>,
}

impl DragState {
    pub(crate) fn begin(
        &mut self,
        scrolling_ratio: f32,
        origin_coord: f32,
        origin_scroll: f32,
        pointer: PointerId,
    ) {
        self.is_scrolling = true;
        self.scrolling_ratio = scrolling_ratio;
        self.origin_coord = origin_coord;
        self.origin_scroll = origin_scroll;
        self.pointer = Some(pointer);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ratio between the cached track size and a live-measured one.
///
/// The live bounding box is measured at gesture time because a CSS transform
/// can change the visual size without firing a resize notification. A
/// degenerate live size yields `1.0` (no correction).
pub(crate) fn live_scaling_ratio(
    orientation: Orientation,
    geometry: &AxisGeometry,
    live_track: BoundingBox,
) -> f32 {
    let live = orientation.size_of(live_track);
    let ratio = geometry.scrollbar_track_size / live;
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Scroll position for a drag move: origin plus the pointer delta converted
/// from scrollbar space to viewport space.
pub(crate) fn drag_scroll_position(drag: &DragState, ratio: f32, coord: f32) -> f32 {
    let thumb_offset = coord - drag.origin_coord;
    drag.origin_scroll + thumb_offset / ratio * drag.scrolling_ratio
}

/// Target scroll position for a track jump: centers the thumb on the pointer
/// coordinate, then converts to viewport space.
pub(crate) fn track_jump_target(
    orientation: Orientation,
    geometry: &AxisGeometry,
    coord: f32,
    live_track: BoundingBox,
    live_thumb: BoundingBox,
) -> f32 {
    let track_start = orientation.start_of(live_track);
    let thumb_size = orientation.size_of(live_thumb);
    let target_thumb = coord - track_start - thumb_size / 2.0;
    let scaling = live_scaling_ratio(orientation, geometry, live_track);
    target_thumb / geometry.viewport_to_scrollbar_ratio * scaling
}
