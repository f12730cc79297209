use crate::options::ScrollbarPlacement;
use crate::orientation::Orientation;
use crate::types::{Edge, PointerId, ScrollBehavior};

/// One typed write the host applies to its render tree.
///
/// The engine never touches UI objects; every visual mutation and every
/// scroll command crosses this boundary. Class-like flags (`Set*` booleans)
/// are only emitted when they change, so hosts may apply them verbatim
/// without their own diffing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostOp {
    /// Sets the `--viewport-height`/`--viewport-width` style variable on the
    /// host element ([`Orientation::viewport_size_var`]).
    SetViewportSizeVar { orientation: Orientation, px: f32 },
    /// Restricts the content to the viewport size along an overflow-hidden
    /// axis (or releases the restriction).
    SetContentRestricted {
        orientation: Orientation,
        restricted: bool,
    },
    /// Shows/hides the synthetic scrollbar for the axis.
    SetScrollbarVisible {
        orientation: Orientation,
        visible: bool,
    },
    /// Reserves layout space for the axis's scrollbar instead of overlaying
    /// content (overlay scrollbars disabled).
    SetReservedSpace {
        orientation: Orientation,
        reserved: bool,
    },
    /// Marks the axis as overflowing, for edge-fade styling on the host.
    SetOverflowing {
        orientation: Orientation,
        overflowing: bool,
    },
    /// Sets the thumb length along the axis.
    SetThumbSize { orientation: Orientation, px: f32 },
    /// Sets the thumb translation along the axis.
    SetThumbOffset { orientation: Orientation, px: f32 },
    /// Toggles a boundary-proximity flag (only with edge detection enabled).
    SetEdge {
        orientation: Orientation,
        edge: Edge,
        at_edge: bool,
    },
    /// Toggles the "scrolling with thumb" visual state for the axis.
    SetDragActive { orientation: Orientation, active: bool },
    /// Toggles the touch-scrolling visual state (scrollbars revealed).
    SetTouchActive { active: bool },
    /// Toggles permanently visible scrollbars.
    SetScrollbarAlwaysVisible { always: bool },
    /// Moves an axis's scrollbar to the leading or trailing edge.
    SetScrollbarPlacement {
        orientation: Orientation,
        placement: ScrollbarPlacement,
    },
    /// Writes the native scroll position directly (drag moves, clamp
    /// corrections). The native scroll mechanism clamps the value.
    SetScroll { orientation: Orientation, px: f32 },
    /// Issues a target scroll position (track jumps use `Smooth`).
    ScrollTo {
        orientation: Orientation,
        px: f32,
        behavior: ScrollBehavior,
    },
    /// Acquires exclusive pointer capture for a thumb drag.
    CapturePointer {
        orientation: Orientation,
        pointer: PointerId,
    },
    /// Releases pointer capture. Best-effort: hosts must tolerate releasing
    /// an already-released pointer silently.
    ReleasePointer {
        orientation: Orientation,
        pointer: PointerId,
    },
    /// Returns keyboard focus to the viewport (without scrolling it), so
    /// arrow/page keys keep working after scrollbar interaction.
    FocusViewport,
}

/// Applies engine writes to the host render tree.
///
/// Write phases receive a `&mut dyn HostSink`; any `FnMut(HostOp)` closure
/// works, so a recording buffer is just `|op| ops.push(op)`.
pub trait HostSink {
    fn apply(&mut self, op: HostOp);
}

impl<F: FnMut(HostOp)> HostSink for F {
    fn apply(&mut self, op: HostOp) {
        self(op);
    }
}
