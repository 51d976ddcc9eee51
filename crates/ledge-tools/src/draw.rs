use ledge_core::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CORAL: Color = Color::rgb(255, 127, 80);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A drawable primitive.
///
/// This is intentionally "dumb data": it is produced by the agent and consumed, not interpreted,
/// by the host's debug overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum DebugShape {
    /// Wipe everything drawn by previous frames.
    Clear,
    Circle {
        center: Position,
        radius: f32,
        color: Color,
    },
    Line {
        from: Position,
        to: Position,
        color: Color,
    },
}

impl DebugShape {
    pub fn circle(center: Position, radius: f32, color: Color) -> Self {
        DebugShape::Circle {
            center,
            radius,
            color,
        }
    }

    pub fn line(from: Position, to: Position, color: Color) -> Self {
        DebugShape::Line { from, to, color }
    }
}

pub trait DrawSink {
    fn draw(&mut self, shape: DebugShape);

    fn draw_all(&mut self, shapes: impl IntoIterator<Item = DebugShape>)
    where
        Self: Sized,
    {
        for shape in shapes {
            self.draw(shape);
        }
    }
}

#[derive(Debug, Default)]
pub struct NullDrawSink;

impl DrawSink for NullDrawSink {
    fn draw(&mut self, _shape: DebugShape) {}
}

#[derive(Debug, Default)]
pub struct VecDrawSink {
    pub shapes: Vec<DebugShape>,
}

impl VecDrawSink {
    pub fn circles(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, DebugShape::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, DebugShape::Line { .. }))
            .count()
    }
}

impl DrawSink for VecDrawSink {
    fn draw(&mut self, shape: DebugShape) {
        self.shapes.push(shape);
    }
}
