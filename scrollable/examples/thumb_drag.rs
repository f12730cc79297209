// Example: a simulated thumb drag, including the scroll-event echo a real
// host would deliver after each native scroll write.
use scrollable::{
    AxisMeasurement, AxisPair, BoundingBox, HostOp, Orientation, Point, PointerEvent, Scrollable,
    ScrollableOptions,
};

fn main() {
    let measurements = AxisPair::new(
        AxisMeasurement {
            viewport_size: 100.0,
            viewport_scroll_size: 1000.0,
            scrollbar_track_size: 200.0,
            overflow_hidden: false,
        },
        AxisMeasurement::default(),
    );
    let mut s = Scrollable::new(ScrollableOptions::new());
    s.attach(measurements, &mut |_| {});

    let track = BoundingBox::new(0.0, 0.0, 16.0, 200.0);
    let event = |pointer_id, y| PointerEvent {
        pointer_id,
        page: Point::new(0.0, y),
        client: Point::new(0.0, y),
    };

    s.thumb_press(Orientation::Vertical, event(1, 40.0), track, &mut |op| {
        println!("press: {op:?}");
    });
    s.on_animation_frame(&mut |op| println!("frame: {op:?}"));

    for y in [45.0, 52.0, 60.0] {
        let mut written = None;
        s.thumb_move(Orientation::Vertical, event(1, y), &mut |op| {
            if let HostOp::SetScroll { px, .. } = op {
                written = Some(px);
            }
            println!("move: {op:?}");
        });
        if let Some(px) = written {
            // The host's native scroll fires an event back at us.
            s.notify_scroll(AxisPair::new(px, 0.0));
            s.on_animation_frame(&mut |op| println!("echo: {op:?}"));
        }
    }

    s.thumb_release(Orientation::Vertical, 1, &mut |op| println!("release: {op:?}"));
}
