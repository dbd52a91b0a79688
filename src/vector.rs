// Vector backend: records one shape per primitive call and turns the
// recording into an SVG document once the pass is over.

use svg::node::element::{Circle, Polygon};
use svg::Document;

use crate::surface::DrawingSurface;
use crate::types::{Color, Vec2};

/// One emitted shape, in image coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRecord {
    Circle { center: Vec2, radius: f32, fill: Color },
    Polygon { points: Vec<Vec2>, fill: Color },
}

impl ShapeRecord {
    fn to_circle(center: Vec2, radius: f32, fill: Color) -> Circle {
        Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius)
            .set("fill", fill.to_hex())
    }

    fn to_polygon(points: &[Vec2], fill: Color) -> Polygon {
        let points = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        Polygon::new().set("points", points).set("fill", fill.to_hex())
    }
}

/// Append-only recording surface for one export pass.
#[derive(Debug, Clone)]
pub struct VectorSurface {
    width: u32,
    height: u32,
    margin: f32,
    shapes: Vec<ShapeRecord>,
}

impl VectorSurface {
    /// `width`/`height` are the image size; `margin` is the figure radius so
    /// edge figures are not cut off.
    pub fn new(width: u32, height: u32, margin: f32) -> Self {
        Self { width, height, margin: margin.max(0.0), shapes: Vec::new() }
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        &self.shapes
    }

    /// Close the pass; no more shapes can be added.
    pub fn finish(self) -> VectorDocument {
        VectorDocument {
            width: self.width,
            height: self.height,
            margin: self.margin,
            shapes: self.shapes,
        }
    }
}

impl DrawingSurface for VectorSurface {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.shapes.push(ShapeRecord::Circle { center, radius, fill: color });
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.shapes.push(ShapeRecord::Polygon { points: vec![a, b, c], fill: color });
    }

    fn draw_triangle_fan(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        // Hub is dropped: the remaining points already trace the outline.
        self.shapes.push(ShapeRecord::Polygon { points: points[1..].to_vec(), fill: color });
    }

    fn draw_triangle_strip(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.shapes.push(ShapeRecord::Polygon { points: points.to_vec(), fill: color });
    }
}

/// Finished recording: header geometry plus shapes in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    pub width: u32,
    pub height: u32,
    pub margin: f32,
    pub shapes: Vec<ShapeRecord>,
}

impl VectorDocument {
    /// Canvas size: image plus `margin` on every side.
    pub fn canvas_size(&self) -> (f32, f32) {
        (self.width as f32 + 2.0 * self.margin, self.height as f32 + 2.0 * self.margin)
    }

    /// Build the SVG tree; the view box starts at `-margin` on both axes.
    pub fn to_svg(&self) -> Document {
        let (w, h) = self.canvas_size();
        let view_box = format!("{} {} {} {}", -self.margin, -self.margin, w, h);
        let document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w)
            .set("height", h)
            .set("viewBox", view_box);

        self.shapes.iter().fold(document, |doc, shape| match shape {
            ShapeRecord::Circle { center, radius, fill } => doc.add(ShapeRecord::to_circle(*center, *radius, *fill)),
            ShapeRecord::Polygon { points, fill } => doc.add(ShapeRecord::to_polygon(points, *fill)),
        })
    }

    /// Serialized markup, exactly what the writer puts on disk.
    pub fn to_markup(&self) -> String {
        self.to_svg().to_string()
    }
}
