use crate::*;

use std::vec::Vec;

use scrollable::Orientation::Vertical;
use scrollable::{
    AxisMeasurement, AxisPair, BoundingBox, HostOp, Measurements, Point, PointerEvent,
    ScrollableOptions,
};

fn axis(viewport: f32, scroll: f32, track: f32) -> AxisMeasurement {
    AxisMeasurement {
        viewport_size: viewport,
        viewport_scroll_size: scroll,
        scrollbar_track_size: track,
        overflow_hidden: false,
    }
}

fn measurements() -> Measurements {
    AxisPair::new(axis(100.0, 1000.0, 200.0), axis(80.0, 800.0, 160.0))
}

fn pointer_at(pointer_id: u32, coord: f32) -> PointerEvent {
    PointerEvent {
        pointer_id,
        page: Point::new(coord, coord),
        client: Point::new(coord, coord),
    }
}

fn attached_controller() -> Controller {
    let mut c = Controller::new(ScrollableOptions::new());
    let mut ops = Vec::new();
    c.attach(measurements(), &mut |op| ops.push(op));
    c
}

#[test]
fn tween_sample_is_monotonic_and_completes() {
    let tween = Tween::new(0.0, 100.0, 0, 100, Easing::SmoothStep);
    let mut last = 0.0f32;
    for now_ms in [0u64, 10, 25, 50, 75, 100, 120] {
        let v = tween.sample(now_ms);
        assert!(v >= last);
        last = v;
    }
    assert_eq!(tween.sample(100), 100.0);
    assert!(tween.is_done(100));
    assert!(!tween.is_done(99));
}

#[test]
fn tween_retarget_continues_from_current_value() {
    let mut tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    tween.retarget(50, 200.0, 100);
    assert_eq!(tween.from, 50.0);
    assert_eq!(tween.to, 200.0);
    assert_eq!(tween.start_ms, 50);
}

#[test]
fn controller_turns_smooth_jump_into_tween() {
    let mut c = attached_controller();
    let track = BoundingBox::new(0.0, 0.0, 16.0, 200.0);
    let thumb = BoundingBox::new(0.0, 0.0, 16.0, 30.0);
    c.track_press(Vertical, pointer_at(1, 150.0), track, thumb);

    let mut ops = Vec::new();
    let mut now_ms = 0u64;
    c.tick(now_ms, &mut |op| ops.push(op));
    assert!(c.is_animating());
    // The smooth command never reaches the host; the tween stands in for it.
    assert!(ops.iter().all(|op| !matches!(op, HostOp::ScrollTo { .. })));

    let mut last = 0.0f32;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms, &mut |op| ops.push(op));
        let px = ops
            .iter()
            .rev()
            .find_map(|op| match *op {
                HostOp::SetScroll {
                    orientation: Vertical,
                    px,
                } => Some(px),
                _ => None,
            })
            .expect("tween writes scroll positions");
        assert!(px >= last);
        last = px;
        assert!(now_ms < 10_000, "tween never completed");
    }

    // (150 - 30/2) / 0.2 = 675, within the axis's scroll range.
    assert!((last - 675.0).abs() < 1e-2);
    assert!((c.engine().scroll_position(Vertical) - 675.0).abs() < 1e-2);
}

#[test]
fn user_scroll_cancels_tween() {
    let mut c = attached_controller();
    let track = BoundingBox::new(0.0, 0.0, 16.0, 200.0);
    let thumb = BoundingBox::new(0.0, 0.0, 16.0, 30.0);
    c.track_press(Vertical, pointer_at(1, 150.0), track, thumb);

    let mut ops = Vec::new();
    c.tick(0, &mut |op| ops.push(op));
    assert!(c.is_animating());

    c.on_scroll(AxisPair::new(42.0, 0.0));
    assert!(!c.is_animating());
    assert_eq!(c.engine().scroll_position(Vertical), 42.0);
}

#[test]
fn drag_writes_pass_through_unchanged() {
    let mut c = attached_controller();
    let track = BoundingBox::new(0.0, 0.0, 16.0, 200.0);

    let mut ops = Vec::new();
    c.thumb_press(Vertical, pointer_at(1, 50.0), track, &mut |op| ops.push(op));
    c.thumb_move(Vertical, pointer_at(1, 70.0), &mut |op| ops.push(op));

    assert!(ops.iter().any(|op| matches!(op, HostOp::CapturePointer { .. })));
    let px = ops
        .iter()
        .find_map(|op| match *op {
            HostOp::SetScroll {
                orientation: Vertical,
                px,
            } => Some(px),
            _ => None,
        })
        .expect("drag move forwarded");
    assert!((px - 100.0).abs() < 1e-2);
}

#[test]
fn jump_target_is_clamped_to_scroll_range() {
    let mut c = attached_controller();
    let track = BoundingBox::new(0.0, 0.0, 16.0, 200.0);
    let thumb = BoundingBox::new(0.0, 0.0, 16.0, 30.0);
    // Click at the very end of the track: the raw target overshoots max.
    c.track_press(Vertical, pointer_at(1, 200.0), track, thumb);

    let mut ops = Vec::new();
    let mut now_ms = 0u64;
    c.tick(now_ms, &mut |op| ops.push(op));
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms, &mut |op| ops.push(op));
    }
    // max = 1000 - 100 = 900; the raw target (200 - 15) / 0.2 = 925.
    assert!((c.engine().scroll_position(Vertical) - 900.0).abs() < 1e-2);
}
