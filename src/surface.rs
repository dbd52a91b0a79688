// The capability both backends share: four filled primitives.
// The mosaic renderer only ever sees `&mut dyn DrawingSurface`.

use crate::types::{Color, Vec2};

pub trait DrawingSurface {
    /// Filled circle.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// One filled triangle, corners in the given order.
    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// Triangles (p0, p[i], p[i+1]); `points[0]` is the hub.
    /// Callers pass at least 3 points; shorter lists draw nothing.
    fn draw_triangle_fan(&mut self, points: &[Vec2], color: Color);

    /// Overlapping triangles (p[i], p[i+1], p[i+2]).
    /// Callers pass at least 3 points; shorter lists draw nothing.
    fn draw_triangle_strip(&mut self, points: &[Vec2], color: Color);
}
