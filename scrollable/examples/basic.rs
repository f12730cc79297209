// Example: minimal host loop — attach, scroll, flush one frame.
use scrollable::{AxisMeasurement, AxisPair, Orientation, Scrollable, ScrollableOptions};

fn main() {
    let measurements = AxisPair::new(
        AxisMeasurement {
            viewport_size: 100.0,
            viewport_scroll_size: 1000.0,
            scrollbar_track_size: 200.0,
            overflow_hidden: false,
        },
        AxisMeasurement {
            viewport_size: 300.0,
            viewport_scroll_size: 300.0,
            scrollbar_track_size: 280.0,
            overflow_hidden: false,
        },
    );

    let mut s = Scrollable::new(ScrollableOptions::new());
    s.attach(measurements, &mut |op| println!("attach: {op:?}"));

    let g = s.geometry(Orientation::Vertical);
    println!(
        "ratio={} thumb={}px max_scroll={}px",
        g.viewport_to_scrollbar_ratio,
        g.thumb_size(),
        g.max_scroll_position
    );

    // Three scroll events in one frame window coalesce into one write pass.
    s.notify_scroll(AxisPair::new(120.0, 0.0));
    s.notify_scroll(AxisPair::new(250.0, 0.0));
    s.notify_scroll(AxisPair::new(400.0, 0.0));
    s.on_animation_frame(&mut |op| println!("frame: {op:?}"));
}
