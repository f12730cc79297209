use scrollable::{
    AxisPair, BoundingBox, ConfigAttribute, HostOp, HostSink, Measurements, Orientation,
    PointerEvent, PointerId, ScrollBehavior, ScrollPositions, Scrollable, ScrollableOptions,
};

use crate::{Easing, Tween};

/// A framework-neutral controller that wraps a [`Scrollable`] engine and
/// drives it from a frame loop.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_resize` / `on_scroll` and the pointer passthroughs when UI events
///   occur
/// - `tick(now_ms, sink)` each frame/timer tick
///
/// `tick` runs the engine's pending write phase. Animated track-jump
/// commands (`ScrollTo` with [`ScrollBehavior::Smooth`]) are intercepted and
/// replaced with tween-driven `SetScroll` writes across subsequent ticks —
/// hosts with native smooth scrolling can skip this type and run the engine
/// directly.
#[derive(Clone, Debug)]
pub struct Controller {
    engine: Scrollable,
    tweens: AxisPair<Option<Tween>>,
    positions: ScrollPositions,
    jump_duration_ms: u64,
    easing: Easing,
}

impl Controller {
    pub fn new(options: ScrollableOptions) -> Self {
        Self::from_engine(Scrollable::new(options))
    }

    pub fn from_engine(engine: Scrollable) -> Self {
        Self {
            engine,
            tweens: AxisPair::default(),
            positions: ScrollPositions::default(),
            jump_duration_ms: 240,
            easing: Easing::SmoothStep,
        }
    }

    pub fn engine(&self) -> &Scrollable {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Scrollable {
        &mut self.engine
    }

    pub fn into_engine(self) -> Scrollable {
        self.engine
    }

    pub fn set_jump_duration_ms(&mut self, duration_ms: u64) {
        self.jump_duration_ms = duration_ms;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.vertical.is_some() || self.tweens.horizontal.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tweens = AxisPair::default();
    }

    /// Host on-attach hook.
    pub fn attach(&mut self, measurements: Measurements, sink: &mut dyn HostSink) {
        self.engine.attach(measurements, sink);
    }

    /// Call when the UI reports new geometry. The engine's write phase runs
    /// on the next `tick`.
    pub fn on_resize(&mut self, measurements: Measurements) {
        self.engine.notify_resize(measurements);
    }

    /// Call when the UI reports a scroll position change (wheel, native
    /// smooth scroll, drag echo).
    ///
    /// A user-originated scroll cancels any active tween.
    pub fn on_scroll(&mut self, positions: ScrollPositions) {
        self.cancel_animation();
        self.positions = positions;
        self.engine.notify_scroll(positions);
    }

    pub fn apply_attribute(&mut self, attribute: ConfigAttribute, sink: &mut dyn HostSink) {
        self.engine.apply_attribute(attribute, sink);
    }

    pub fn thumb_press(
        &mut self,
        orientation: Orientation,
        event: PointerEvent,
        live_track: BoundingBox,
        sink: &mut dyn HostSink,
    ) {
        self.engine.thumb_press(orientation, event, live_track, sink);
    }

    pub fn thumb_move(
        &mut self,
        orientation: Orientation,
        event: PointerEvent,
        sink: &mut dyn HostSink,
    ) {
        self.engine.thumb_move(orientation, event, sink);
    }

    pub fn thumb_release(
        &mut self,
        orientation: Orientation,
        pointer: PointerId,
        sink: &mut dyn HostSink,
    ) {
        self.engine.thumb_release(orientation, pointer, sink);
    }

    pub fn track_press(
        &mut self,
        orientation: Orientation,
        event: PointerEvent,
        live_track: BoundingBox,
        live_thumb: BoundingBox,
    ) {
        self.engine.track_press(orientation, event, live_track, live_thumb);
    }

    /// Advances the controller by one frame.
    ///
    /// - Active tweens write their sampled scroll positions and feed them
    ///   back into the engine (closing the scroll-notification loop).
    /// - If the engine has a frame pending, its write phase runs; smooth
    ///   `ScrollTo` commands become tweens instead of reaching the sink.
    pub fn tick(&mut self, now_ms: u64, sink: &mut dyn HostSink) {
        let mut moved = false;
        for orientation in Orientation::ALL {
            let Some(tween) = self.tweens[orientation] else {
                continue;
            };
            let px = tween.sample(now_ms);
            self.positions[orientation] = px;
            sink.apply(HostOp::SetScroll { orientation, px });
            moved = true;
            if tween.is_done(now_ms) {
                self.tweens[orientation] = None;
            }
        }
        if moved {
            self.engine.notify_scroll(self.positions);
        }
        if self.engine.frame_pending() {
            self.run_engine_frame(now_ms, sink);
        }
    }

    fn run_engine_frame(&mut self, now_ms: u64, sink: &mut dyn HostSink) {
        let mut jumps: AxisPair<Option<f32>> = AxisPair::default();
        {
            let engine = &mut self.engine;
            let mut forward = |op: HostOp| match op {
                HostOp::ScrollTo {
                    orientation,
                    px,
                    behavior: ScrollBehavior::Smooth,
                } => jumps[orientation] = Some(px),
                other => sink.apply(other),
            };
            engine.on_animation_frame(&mut forward);
        }
        for orientation in Orientation::ALL {
            let Some(target) = jumps[orientation] else {
                continue;
            };
            let target = self
                .engine
                .geometry(orientation)
                .clamp_scroll_position(target);
            if let Some(tween) = &mut self.tweens[orientation] {
                tween.retarget(now_ms, target, self.jump_duration_ms);
            } else {
                self.tweens[orientation] = Some(Tween::new(
                    self.positions[orientation],
                    target,
                    now_ms,
                    self.jump_duration_ms,
                    self.easing,
                ));
            }
        }
    }
}
