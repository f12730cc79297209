use crate::geometry::AxisGeometry;
use crate::gesture::{self, DragState};
use crate::host::{HostOp, HostSink};
use crate::options::{ConfigAttribute, ScrollableOptions, ScrollbarVisibility};
use crate::orientation::{AxisPair, Orientation};
use crate::scheduler::{FrameScheduler, UpdateKind};
use crate::state::VisualState;
use crate::types::{
    BoundingBox, Edge, Measurements, PointerEvent, PointerId, ScrollBehavior, ScrollPositions,
};

/// A headless scroll-state synchronization engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your host drives it with measured geometry, scroll notifications, and
///   pointer events; it answers with typed [`HostOp`] writes.
/// - Methods returning `bool` tell the host whether to schedule one
///   animation-frame callback ([`Scrollable::on_animation_frame`]); at most
///   one is ever in flight.
///
/// Write phases are split strictly from measurement: events record state
/// synchronously (so fast successive notifications are never lost), and the
/// frame callback only writes. Drag moves are the deliberate exception —
/// they write immediately, because direct-manipulation latency matters more
/// than batching there.
#[derive(Clone, Debug)]
pub struct Scrollable {
    options: ScrollableOptions,
    geometry: AxisPair<AxisGeometry>,
    drag: AxisPair<DragState>,
    visual: VisualState,
    scheduler: FrameScheduler,
    pending_drag_activate: AxisPair<bool>,
    pending_jump: AxisPair<Option<f32>>,
    pending_focus: bool,
    attached: bool,
}

impl Default for Scrollable {
    fn default() -> Self {
        Self::new(ScrollableOptions::new())
    }
}

impl Scrollable {
    /// Creates a new engine from options.
    ///
    /// If `options.initial_measurements` is set, the geometry cache is
    /// populated immediately; nothing is written until [`Self::attach`].
    pub fn new(options: ScrollableOptions) -> Self {
        sdebug!(
            overlay = options.scrollbar_overlay,
            edge_detection = options.edge_detection,
            "Scrollable::new"
        );
        let mut geometry = AxisPair::<AxisGeometry>::default();
        if let Some(m) = options.initial_measurements {
            for orientation in Orientation::ALL {
                geometry[orientation].sync(m[orientation]);
            }
        }
        Self {
            options,
            geometry,
            drag: AxisPair::default(),
            visual: VisualState::default(),
            scheduler: FrameScheduler::default(),
            pending_drag_activate: AxisPair::default(),
            pending_jump: AxisPair::default(),
            pending_focus: false,
            attached: false,
        }
    }

    pub fn options(&self) -> &ScrollableOptions {
        &self.options
    }

    /// Adjusts the edge-detection threshold. Takes effect on the next
    /// position write phase.
    pub fn set_edge_proximity(&mut self, edge_proximity: f32) {
        self.options.edge_proximity = edge_proximity;
    }

    /// A copy of the cached geometry for one axis.
    pub fn geometry(&self, orientation: Orientation) -> AxisGeometry {
        self.geometry[orientation]
    }

    pub fn scroll_position(&self, orientation: Orientation) -> f32 {
        self.geometry[orientation].scroll_position
    }

    pub fn max_scroll_position(&self, orientation: Orientation) -> f32 {
        self.geometry[orientation].max_scroll_position
    }

    pub fn is_overflowing(&self, orientation: Orientation) -> bool {
        self.geometry[orientation].is_overflowing
    }

    pub fn is_scrolling_with_thumb(&self, orientation: Orientation) -> bool {
        self.drag[orientation].is_scrolling
    }

    /// Whether a frame callback has been requested and not yet run.
    pub fn frame_pending(&self) -> bool {
        self.scheduler.frame_requested()
    }

    /// Whether [`Self::attach`] has run.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Host on-attach hook: initial measurement, layout, and position sync,
    /// all synchronous (there is no frame to coalesce into yet).
    pub fn attach(&mut self, measurements: Measurements, sink: &mut dyn HostSink) {
        sdebug!("Scrollable::attach");
        self.attached = true;
        self.sync_layout(measurements);
        self.apply_static_options(sink);
        self.apply_layout(sink);
        self.apply_scroll_positions(sink);
    }

    /// Host geometry-changed hook.
    ///
    /// The cache recompute runs synchronously — visibility and size
    /// decisions reflect the latest geometry even if the paint callback is
    /// delayed — while the visual writes are coalesced onto the next frame.
    ///
    /// Returns whether the host must schedule a frame callback.
    pub fn notify_resize(&mut self, measurements: Measurements) -> bool {
        strace!(
            v_viewport = measurements.vertical.viewport_size,
            v_scroll = measurements.vertical.viewport_scroll_size,
            h_viewport = measurements.horizontal.viewport_size,
            h_scroll = measurements.horizontal.viewport_scroll_size,
            "notify_resize"
        );
        self.sync_layout(measurements);
        self.scheduler.request(UpdateKind::Layout)
    }

    /// Host scroll-event hook.
    ///
    /// Positions are captured into the cache synchronously so fast
    /// successive events are never lost; the thumb write is coalesced onto
    /// the next frame and uses the last observed position.
    ///
    /// Returns whether the host must schedule a frame callback.
    pub fn notify_scroll(&mut self, positions: ScrollPositions) -> bool {
        strace!(
            vertical = positions.vertical,
            horizontal = positions.horizontal,
            "notify_scroll"
        );
        for orientation in Orientation::ALL {
            self.geometry[orientation].record_scroll(positions[orientation]);
        }
        self.scheduler.request(UpdateKind::ScrollPosition)
    }

    /// Pointer-down on a thumb: Idle → Dragging.
    ///
    /// `live_track` must be a bounding box measured now, not the cache — a
    /// CSS transform can change the visual size without firing a resize
    /// notification. Pointer capture is acquired synchronously; the "active"
    /// visual state is deferred to the next frame so this handler performs
    /// no render-tree mutation.
    ///
    /// Host contract: a press on the thumb is delivered only here, never
    /// also to [`Self::track_press`].
    ///
    /// Returns whether the host must schedule a frame callback.
    pub fn thumb_press(
        &mut self,
        orientation: Orientation,
        event: PointerEvent,
        live_track: BoundingBox,
        sink: &mut dyn HostSink,
    ) -> bool {
        let geometry = &self.geometry[orientation];
        let scaling = gesture::live_scaling_ratio(orientation, geometry, live_track);
        let coord = orientation.coord_of(event.page);
        sdebug!(
            ?orientation,
            pointer = event.pointer_id,
            coord,
            scaling,
            "thumb_press"
        );
        self.drag[orientation].begin(scaling, coord, geometry.scroll_position, event.pointer_id);
        sink.apply(HostOp::CapturePointer {
            orientation,
            pointer: event.pointer_id,
        });
        self.pending_drag_activate[orientation] = true;
        self.pending_focus = true;
        self.scheduler.request(UpdateKind::Gesture)
    }

    /// Pointer-move during a thumb drag.
    ///
    /// Writes the new scroll position immediately — this path is
    /// deliberately uncoalesced so the thumb tracks the pointer 1:1. No
    /// explicit clamping: the native scroll mechanism clamps internally.
    /// Moves for an idle axis or a foreign pointer are ignored.
    pub fn thumb_move(
        &mut self,
        orientation: Orientation,
        event: PointerEvent,
        sink: &mut dyn HostSink,
    ) {
        let drag = self.drag[orientation];
        if !drag.is_scrolling || drag.pointer != Some(event.pointer_id) {
            return;
        }
        let geometry = &self.geometry[orientation];
        if !geometry.ratio_is_usable() {
            swarn!(?orientation, "thumb_move with unusable ratio");
            return;
        }
        let position = gesture::drag_scroll_position(
            &drag,
            geometry.viewport_to_scrollbar_ratio,
            orientation.coord_of(event.page),
        );
        sink.apply(HostOp::SetScroll {
            orientation,
            px: position,
        });
    }

    /// Pointer-up: Dragging → Idle.
    ///
    /// Releases capture exactly once per drag; releasing an idle axis or a
    /// foreign pointer is a silent no-op (release is best-effort cleanup).
    /// The "active" visual state is removed immediately.
    pub fn thumb_release(
        &mut self,
        orientation: Orientation,
        pointer: PointerId,
        sink: &mut dyn HostSink,
    ) {
        let drag = &mut self.drag[orientation];
        if !drag.is_scrolling || drag.pointer != Some(pointer) {
            return;
        }
        sdebug!(?orientation, pointer, "thumb_release");
        drag.clear();
        sink.apply(HostOp::ReleasePointer {
            orientation,
            pointer,
        });
        self.pending_drag_activate[orientation] = false;
        let slot = &mut self.visual.axes[orientation].drag_active;
        if *slot == Some(true) {
            *slot = Some(false);
            sink.apply(HostOp::SetDragActive {
                orientation,
                active: false,
            });
        }
    }

    /// Pointer-down on a track (not on the thumb): a one-shot jump, not a
    /// state transition.
    ///
    /// Computes the target thumb center from the pointer coordinate using
    /// live bounding boxes, converts it to a scroll position, and schedules
    /// an animated scroll for the next frame. Ignored while the axis is
    /// dragging or cannot scroll.
    ///
    /// Returns whether the host must schedule a frame callback.
    pub fn track_press(
        &mut self,
        orientation: Orientation,
        event: PointerEvent,
        live_track: BoundingBox,
        live_thumb: BoundingBox,
    ) -> bool {
        if self.drag[orientation].is_scrolling {
            return false;
        }
        let geometry = &self.geometry[orientation];
        if !geometry.is_overflowing || !geometry.ratio_is_usable() {
            return false;
        }
        let target = gesture::track_jump_target(
            orientation,
            geometry,
            orientation.coord_of(event.client),
            live_track,
            live_thumb,
        );
        sdebug!(?orientation, target, "track_press");
        self.pending_jump[orientation] = Some(target);
        self.pending_focus = true;
        self.scheduler.request(UpdateKind::Gesture)
    }

    /// Host touch-scroll begin hook: reveals the scrollbars.
    pub fn touch_start(&mut self, sink: &mut dyn HostSink) {
        Self::set_flag(sink, &mut self.visual.touch_active, true, |active| {
            HostOp::SetTouchActive { active }
        });
    }

    /// Host touch-scroll end hook.
    pub fn touch_end(&mut self, sink: &mut dyn HostSink) {
        Self::set_flag(sink, &mut self.visual.touch_active, false, |active| {
            HostOp::SetTouchActive { active }
        });
    }

    /// Host attribute-change hook.
    ///
    /// Returns whether the host must schedule a frame callback.
    pub fn apply_attribute(
        &mut self,
        attribute: ConfigAttribute,
        sink: &mut dyn HostSink,
    ) -> bool {
        sdebug!(?attribute, "apply_attribute");
        match attribute {
            ConfigAttribute::ScrollbarOverlay(overlay) => {
                self.options.scrollbar_overlay = overlay;
                for orientation in Orientation::ALL {
                    let reserved = self.geometry[orientation].is_overflowing && !overlay;
                    Self::set_flag(
                        sink,
                        &mut self.visual.axes[orientation].reserved_space,
                        reserved,
                        |reserved| HostOp::SetReservedSpace {
                            orientation,
                            reserved,
                        },
                    );
                }
                false
            }
            ConfigAttribute::EdgeDetection(enabled) => {
                self.options.edge_detection = enabled;
                if enabled {
                    // Flags materialize with the next position write phase.
                    self.scheduler.request(UpdateKind::ScrollPosition)
                } else {
                    for orientation in Orientation::ALL {
                        let axis = &mut self.visual.axes[orientation];
                        Self::set_flag(sink, &mut axis.at_start, false, |at_edge| HostOp::SetEdge {
                            orientation,
                            edge: Edge::Start,
                            at_edge,
                        });
                        Self::set_flag(sink, &mut axis.at_end, false, |at_edge| HostOp::SetEdge {
                            orientation,
                            edge: Edge::End,
                            at_edge,
                        });
                    }
                    false
                }
            }
            ConfigAttribute::ScrollbarVisibility(visibility) => {
                self.options.scrollbar_visibility = visibility;
                let always = visibility == ScrollbarVisibility::Always;
                Self::set_flag(sink, &mut self.visual.always_visible, always, |always| {
                    HostOp::SetScrollbarAlwaysVisible { always }
                });
                false
            }
            ConfigAttribute::VerticalScrollbarPlacement(placement) => {
                self.options.vertical_scrollbar_placement = placement;
                self.apply_placement(Orientation::Vertical, sink);
                false
            }
            ConfigAttribute::HorizontalScrollbarPlacement(placement) => {
                self.options.horizontal_scrollbar_placement = placement;
                self.apply_placement(Orientation::Horizontal, sink);
                false
            }
        }
    }

    /// The per-frame write phase. Call once per host frame callback, after a
    /// method returned `true`; performs no measurement.
    pub fn on_animation_frame(&mut self, sink: &mut dyn HostSink) {
        let pending = self.scheduler.begin_frame();
        strace!(
            layout = pending.layout,
            scroll = pending.scroll,
            gesture = pending.gesture,
            "on_animation_frame"
        );
        if pending.layout {
            self.apply_layout(sink);
        }
        // A layout pass refreshes thumb positions too: thumb geometry just
        // changed under the same ratio update.
        if pending.layout || pending.scroll {
            self.apply_scroll_positions(sink);
        }
        if pending.gesture {
            self.apply_gesture_visuals(sink);
        }
    }

    fn sync_layout(&mut self, measurements: Measurements) {
        for orientation in Orientation::ALL {
            self.geometry[orientation].sync(measurements[orientation]);
        }
    }

    /// Layout write phase: pushes cache state into the render tree and
    /// clamps the scroll position into the new valid range.
    fn apply_layout(&mut self, sink: &mut dyn HostSink) {
        for orientation in Orientation::ALL {
            let geometry = self.geometry[orientation];
            let axis = &mut self.visual.axes[orientation];

            Self::set_px(sink, &mut axis.viewport_size_var, geometry.viewport_size, |px| {
                HostOp::SetViewportSizeVar { orientation, px }
            });
            Self::set_flag(
                sink,
                &mut axis.content_restricted,
                geometry.overflow_hidden,
                |restricted| HostOp::SetContentRestricted {
                    orientation,
                    restricted,
                },
            );
            Self::set_flag(
                sink,
                &mut axis.overflowing,
                geometry.is_overflowing,
                |overflowing| HostOp::SetOverflowing {
                    orientation,
                    overflowing,
                },
            );
            Self::set_flag(
                sink,
                &mut axis.scrollbar_visible,
                geometry.is_overflowing,
                |visible| HostOp::SetScrollbarVisible {
                    orientation,
                    visible,
                },
            );
            let reserved = geometry.is_overflowing && !self.options.scrollbar_overlay;
            Self::set_flag(sink, &mut axis.reserved_space, reserved, |reserved| {
                HostOp::SetReservedSpace {
                    orientation,
                    reserved,
                }
            });
            if geometry.is_overflowing {
                Self::set_px(sink, &mut axis.thumb_size, geometry.thumb_size(), |px| {
                    HostOp::SetThumbSize { orientation, px }
                });
            }

            // Container shrank while scrolled near the end: correct the
            // now-invalid over-scrolled position, exactly once.
            let clamped = geometry.clamp_scroll_position(geometry.scroll_position);
            if clamped != geometry.scroll_position {
                self.geometry[orientation].scroll_position = clamped;
                sink.apply(HostOp::SetScroll {
                    orientation,
                    px: clamped,
                });
            }
        }
    }

    /// Position write phase: thumb translation and edge-proximity flags.
    fn apply_scroll_positions(&mut self, sink: &mut dyn HostSink) {
        for orientation in Orientation::ALL {
            let geometry = self.geometry[orientation];
            let axis = &mut self.visual.axes[orientation];

            if geometry.is_overflowing {
                Self::set_px(sink, &mut axis.thumb_offset, geometry.thumb_offset(), |px| {
                    HostOp::SetThumbOffset { orientation, px }
                });
            }
            if self.options.edge_detection {
                let proximity = self.options.edge_proximity;
                let at_start = geometry.scroll_position <= proximity;
                let at_end =
                    geometry.scroll_position >= geometry.max_scroll_position - proximity;
                Self::set_flag(sink, &mut axis.at_start, at_start, |at_edge| HostOp::SetEdge {
                    orientation,
                    edge: Edge::Start,
                    at_edge,
                });
                Self::set_flag(sink, &mut axis.at_end, at_end, |at_edge| HostOp::SetEdge {
                    orientation,
                    edge: Edge::End,
                    at_edge,
                });
            }
        }
    }

    /// Gesture write phase: deferred drag visuals, scheduled jumps, refocus.
    fn apply_gesture_visuals(&mut self, sink: &mut dyn HostSink) {
        for orientation in Orientation::ALL {
            if self.pending_drag_activate[orientation] {
                self.pending_drag_activate[orientation] = false;
                Self::set_flag(
                    sink,
                    &mut self.visual.axes[orientation].drag_active,
                    true,
                    |active| HostOp::SetDragActive {
                        orientation,
                        active,
                    },
                );
            }
            if let Some(px) = self.pending_jump[orientation].take() {
                sink.apply(HostOp::ScrollTo {
                    orientation,
                    px,
                    behavior: ScrollBehavior::Smooth,
                });
            }
        }
        if self.pending_focus {
            self.pending_focus = false;
            sink.apply(HostOp::FocusViewport);
        }
    }

    /// Emits the option-derived statics that differ from the host defaults.
    fn apply_static_options(&mut self, sink: &mut dyn HostSink) {
        let always = self.options.scrollbar_visibility == ScrollbarVisibility::Always;
        Self::set_flag(sink, &mut self.visual.always_visible, always, |always| {
            HostOp::SetScrollbarAlwaysVisible { always }
        });
        for orientation in Orientation::ALL {
            self.apply_placement(orientation, sink);
        }
    }

    fn apply_placement(&mut self, orientation: Orientation, sink: &mut dyn HostSink) {
        let placement = match orientation {
            Orientation::Vertical => self.options.vertical_scrollbar_placement,
            Orientation::Horizontal => self.options.horizontal_scrollbar_placement,
        };
        let slot = self.visual.placement.get_mut(orientation);
        if *slot == Some(placement) {
            return;
        }
        *slot = Some(placement);
        sink.apply(HostOp::SetScrollbarPlacement {
            orientation,
            placement,
        });
    }

    fn set_flag(
        sink: &mut dyn HostSink,
        slot: &mut Option<bool>,
        value: bool,
        make: impl FnOnce(bool) -> HostOp,
    ) {
        if *slot == Some(value) {
            return;
        }
        *slot = Some(value);
        sink.apply(make(value));
    }

    fn set_px(
        sink: &mut dyn HostSink,
        slot: &mut Option<f32>,
        px: f32,
        make: impl FnOnce(f32) -> HostOp,
    ) {
        if *slot == Some(px) {
            return;
        }
        *slot = Some(px);
        sink.apply(make(px));
    }
}
