use scrollable::Orientation::Vertical;
use scrollable::{
    AxisMeasurement, AxisPair, BoundingBox, Point, PointerEvent, ScrollableOptions,
};
use scrollable_adapter::Controller;

fn main() {
    // Example: a host without native smooth scrolling. The controller turns
    // the engine's animated track-jump command into tween-driven writes.
    let measurements = AxisPair::new(
        AxisMeasurement {
            viewport_size: 100.0,
            viewport_scroll_size: 1000.0,
            scrollbar_track_size: 200.0,
            overflow_hidden: false,
        },
        AxisMeasurement::default(),
    );
    let mut c = Controller::new(ScrollableOptions::new());
    c.attach(measurements, &mut |_| {});

    let track = BoundingBox::new(0.0, 0.0, 16.0, 200.0);
    let thumb = BoundingBox::new(0.0, 0.0, 16.0, 20.0);
    c.track_press(
        Vertical,
        PointerEvent {
            pointer_id: 1,
            page: Point::new(8.0, 150.0),
            client: Point::new(8.0, 150.0),
        },
        track,
        thumb,
    );

    let mut now_ms = 0u64;
    c.tick(now_ms, &mut |_| {});
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms, &mut |_| {});
        if now_ms.is_multiple_of(80) {
            println!("t={now_ms} scroll={}", c.engine().scroll_position(Vertical));
        }
    }
    println!("done: scroll={}", c.engine().scroll_position(Vertical));
}
