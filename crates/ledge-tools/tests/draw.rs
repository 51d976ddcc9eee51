use std::cell::RefCell;
use std::rc::Rc;

use ledge_core::Position;
use ledge_tools::{Color, DebugShape, DrawSink, NullDrawSink, VecDrawSink};

#[derive(Clone, Default)]
struct RcSink(Rc<RefCell<Vec<DebugShape>>>);

impl DrawSink for RcSink {
    fn draw(&mut self, shape: DebugShape) {
        self.0.borrow_mut().push(shape);
    }
}

fn frame() -> Vec<DebugShape> {
    vec![
        DebugShape::Clear,
        DebugShape::circle(Position::new(50.0, 740.0), 10.0, Color::RED),
        DebugShape::line(
            Position::new(50.0, 740.0),
            Position::new(1200.0, 740.0),
            Color::CORAL,
        ),
    ]
}

#[test]
fn vec_sink_records_shapes_in_order() {
    let mut sink = VecDrawSink::default();
    sink.draw_all(frame());

    assert_eq!(sink.shapes.len(), 3);
    assert_eq!(sink.shapes[0], DebugShape::Clear);
    assert_eq!(sink.circles(), 1);
    assert_eq!(sink.lines(), 1);
}

#[test]
fn custom_sinks_share_recorded_shapes() {
    let handle = RcSink::default();
    let shared = handle.0.clone();
    let mut sink = handle;
    sink.draw_all(frame());

    let shapes = shared.borrow();
    assert_eq!(shapes.len(), 3);
    assert!(matches!(shapes[1], DebugShape::Circle { radius, .. } if radius == 10.0));
}

#[test]
fn null_sink_discards_everything() {
    let mut sink = NullDrawSink;
    sink.draw_all(frame());
}
