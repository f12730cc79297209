use crate::types::AxisMeasurement;

/// Cached per-axis geometry derived from host measurements.
///
/// Owned exclusively by the component; mutated only by the layout
/// synchronizer (on resize) and the scroll synchronizer (on scroll), read by
/// the gesture controller and the write phases. Never read stale across a
/// resize: every derived field is recomputed whenever its inputs change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisGeometry {
    /// Visible size of the viewport along the axis (px, quantized to 0.1).
    pub viewport_size: f32,
    /// Total scrollable content size along the axis.
    pub viewport_scroll_size: f32,
    /// Size of the synthetic track along the axis (px, quantized to 0.1).
    pub scrollbar_track_size: f32,
    /// `scrollbar_track_size / viewport_scroll_size`; maps scroll-position
    /// space to scrollbar-position space. Forced to `0` when not finite.
    pub viewport_to_scrollbar_ratio: f32,
    /// Current native scroll position along the axis.
    pub scroll_position: f32,
    /// `viewport_scroll_size - viewport_size`, clamped to `>= 0`.
    pub max_scroll_position: f32,
    /// The axis's overflow policy is "hidden": content must not exceed the
    /// viewport, so the axis never scrolls.
    pub overflow_hidden: bool,
    /// Drives scrollbar visibility. False whenever `overflow_hidden` is set
    /// or the ratio is unusable, regardless of the size comparison.
    pub is_overflowing: bool,
}

impl AxisGeometry {
    /// Recomputes the cache from freshly measured raw sizes.
    ///
    /// Idempotent: identical measurements yield identical cache state.
    pub(crate) fn sync(&mut self, m: AxisMeasurement) {
        self.overflow_hidden = m.overflow_hidden;
        self.viewport_size = quantize_size(m.viewport_size);
        self.viewport_scroll_size = m.viewport_scroll_size;
        self.scrollbar_track_size = quantize_size(m.scrollbar_track_size);

        let ratio = self.scrollbar_track_size / self.viewport_scroll_size;
        self.viewport_to_scrollbar_ratio = if ratio.is_finite() { ratio } else { 0.0 };
        self.max_scroll_position = (self.viewport_scroll_size - self.viewport_size).max(0.0);
        self.is_overflowing = !self.overflow_hidden
            && self.ratio_is_usable()
            && self.viewport_scroll_size > ceil_px(self.viewport_size);
    }

    /// Records a scroll notification. Cheap; safe to call per event.
    pub(crate) fn record_scroll(&mut self, position: f32) {
        if position.is_finite() {
            self.scroll_position = position;
        }
    }

    /// Thumb length for the current geometry: `viewport_size * ratio`.
    /// Never exceeds `scrollbar_track_size` while overflowing.
    pub fn thumb_size(&self) -> f32 {
        self.viewport_size * self.viewport_to_scrollbar_ratio
    }

    /// Thumb translation for the current scroll position.
    pub fn thumb_offset(&self) -> f32 {
        self.scroll_position * self.viewport_to_scrollbar_ratio
    }

    /// Clamps a scroll position into `[0, max_scroll_position]`.
    pub fn clamp_scroll_position(&self, position: f32) -> f32 {
        position.clamp(0.0, self.max_scroll_position)
    }

    pub(crate) fn ratio_is_usable(&self) -> bool {
        self.viewport_to_scrollbar_ratio.is_finite() && self.viewport_to_scrollbar_ratio > 0.0
    }
}

/// Quantizes a measured size to the cache granularity of 0.1 px. Sizes are
/// non-negative, so truncation equals flooring.
pub(crate) fn quantize_size(size: f32) -> f32 {
    if !size.is_finite() || size <= 0.0 {
        return 0.0;
    }
    ((size * 10.0) as i64) as f32 / 10.0
}

/// `ceil` for non-negative px values, available without `std`.
pub(crate) fn ceil_px(value: f32) -> f32 {
    let truncated = (value as i64) as f32;
    if truncated < value {
        truncated + 1.0
    } else {
        truncated
    }
}
