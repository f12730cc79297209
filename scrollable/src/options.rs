use crate::types::Measurements;

/// When the host shows the synthetic scrollbars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollbarVisibility {
    /// Revealed on hover, focus, touch scrolling, and thumb drags.
    #[default]
    WhileInteracting,
    /// Permanently visible (the `scrollbar-visibility="always"` attribute).
    Always,
}

/// Which edge of the viewport an axis's scrollbar sits on.
///
/// `End` is the default (right for vertical, bottom for horizontal); `Start`
/// moves it to the opposite edge (left / top).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollbarPlacement {
    #[default]
    End,
    Start,
}

/// Configuration for [`crate::Scrollable`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollableOptions {
    /// When false, overflowing axes reserve layout space for their scrollbar
    /// instead of overlaying content.
    pub scrollbar_overlay: bool,
    /// Enables boundary-proximity flags ([`crate::HostOp::SetEdge`]).
    pub edge_detection: bool,
    /// Distance from either end (px) within which an edge flag is set.
    pub edge_proximity: f32,
    pub scrollbar_visibility: ScrollbarVisibility,
    pub vertical_scrollbar_placement: ScrollbarPlacement,
    pub horizontal_scrollbar_placement: ScrollbarPlacement,
    /// Geometry applied at construction, before the host's first
    /// measurement arrives.
    pub initial_measurements: Option<Measurements>,
}

impl Default for ScrollableOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollableOptions {
    pub fn new() -> Self {
        Self {
            scrollbar_overlay: true,
            edge_detection: false,
            edge_proximity: 1.0,
            scrollbar_visibility: ScrollbarVisibility::WhileInteracting,
            vertical_scrollbar_placement: ScrollbarPlacement::End,
            horizontal_scrollbar_placement: ScrollbarPlacement::End,
            initial_measurements: None,
        }
    }

    pub fn with_scrollbar_overlay(mut self, scrollbar_overlay: bool) -> Self {
        self.scrollbar_overlay = scrollbar_overlay;
        self
    }

    pub fn with_edge_detection(mut self, edge_detection: bool) -> Self {
        self.edge_detection = edge_detection;
        self
    }

    pub fn with_edge_proximity(mut self, edge_proximity: f32) -> Self {
        self.edge_proximity = edge_proximity;
        self
    }

    pub fn with_scrollbar_visibility(mut self, visibility: ScrollbarVisibility) -> Self {
        self.scrollbar_visibility = visibility;
        self
    }

    pub fn with_vertical_scrollbar_placement(mut self, placement: ScrollbarPlacement) -> Self {
        self.vertical_scrollbar_placement = placement;
        self
    }

    pub fn with_horizontal_scrollbar_placement(mut self, placement: ScrollbarPlacement) -> Self {
        self.horizontal_scrollbar_placement = placement;
        self
    }

    pub fn with_initial_measurements(mut self, measurements: Option<Measurements>) -> Self {
        self.initial_measurements = measurements;
        self
    }
}

/// Typed form of the host's attribute-change hook.
///
/// Hosts parse their attribute strings (`scrollbar-overlay`,
/// `edge-detection`, `scrollbar-visibility`, `vertical-scrollbar-position`,
/// `horizontal-scrollbar-position`) into one of these and hand it to
/// [`crate::Scrollable::apply_attribute`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigAttribute {
    ScrollbarOverlay(bool),
    EdgeDetection(bool),
    ScrollbarVisibility(ScrollbarVisibility),
    VerticalScrollbarPlacement(ScrollbarPlacement),
    HorizontalScrollbarPlacement(ScrollbarPlacement),
}
