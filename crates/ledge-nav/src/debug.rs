use ledge_tools::{Color, DebugShape, DrawSink};

use crate::Graph;

pub const VERTEX_RADIUS: f32 = 10.0;
pub const VERTEX_COLOR: Color = Color::RED;
pub const EDGE_COLOR: Color = Color::CORAL;

impl Graph {
    /// One filled circle per vertex, each followed by a line per outgoing edge.
    pub fn draw(&self, sink: &mut impl DrawSink) {
        for (_, vertex) in self.vertices() {
            sink.draw(DebugShape::circle(vertex.position, VERTEX_RADIUS, VERTEX_COLOR));
            for edge in vertex.edges() {
                let Some(end) = self.vertex(edge.end) else {
                    continue;
                };
                sink.draw(DebugShape::line(vertex.position, end.position, EDGE_COLOR));
            }
        }
    }

    pub fn debug_shapes(&self) -> Vec<DebugShape> {
        let mut sink = ledge_tools::VecDrawSink::default();
        self.draw(&mut sink);
        sink.shapes
    }
}
