// Software rasterizer behind the live window.
// Visual: every primitive lands straight in the frame buffer; nothing is kept
// between frames.

use crate::surface::DrawingSurface;
use crate::types::{Color, FrameBuffer, Vec2};

/// World → screen mapping: `screen = (world - target) * zoom + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub target: Vec2, // world point shown at `offset`
    pub offset: Vec2, // usually the window center
    pub zoom: f32,
}

impl View {
    /// No translation, no scaling: world pixels are screen pixels.
    pub const IDENTITY: View = View { target: Vec2::new(0.0, 0.0), offset: Vec2::new(0.0, 0.0), zoom: 1.0 };

    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x - self.target.x) * self.zoom + self.offset.x,
            (p.y - self.target.y) * self.zoom + self.offset.y,
        )
    }
}

/// Immediate-mode surface drawing into a borrowed frame buffer.
pub struct RasterSurface<'a> {
    fb: &'a mut FrameBuffer,
    view: View,
}

impl<'a> RasterSurface<'a> {
    pub fn new(fb: &'a mut FrameBuffer, view: View) -> Self {
        Self { fb, view }
    }

    /// Fill a triangle given in screen space. Either winding is accepted.
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: u32) {
        let area = edge(a, b, c);
        if area == 0.0 {
            return; // degenerate: zero pixels covered
        }

        // Scan only the clipped bounding box.
        let Some((x0, y0, x1, y1)) = self.clip_box(
            a.x.min(b.x).min(c.x),
            a.y.min(b.y).min(c.y),
            a.x.max(b.x).max(c.x),
            a.y.max(b.y).max(c.y),
        ) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                // Sample at the pixel center.
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b, c, p);
                let w1 = edge(c, a, p);
                let w2 = edge(a, b, p);
                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if inside {
                    self.fb.pixels[y * self.fb.width + x] = color;
                }
            }
        }
    }

    /// Intersect a float box with the buffer; `None` when nothing is visible.
    fn clip_box(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<(usize, usize, usize, usize)> {
        if self.fb.width == 0 || self.fb.height == 0 {
            return None;
        }
        let w = self.fb.width as f32;
        let h = self.fb.height as f32;
        if max_x < 0.0 || max_y < 0.0 || min_x >= w || min_y >= h {
            return None;
        }
        let x0 = min_x.floor().max(0.0) as usize;
        let y0 = min_y.floor().max(0.0) as usize;
        let x1 = (max_x.ceil() as usize).min(self.fb.width - 1);
        let y1 = (max_y.ceil() as usize).min(self.fb.height - 1);
        Some((x0, y0, x1, y1))
    }
}

/// Twice the signed area of (a, b, p).
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

impl DrawingSurface for RasterSurface<'_> {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let c = self.view.to_screen(center);
        let r = radius * self.view.zoom;
        if r <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip_box(c.x - r, c.y - r, c.x + r, c.y + r) else {
            return;
        };
        let packed = color.to_packed();
        let r2 = r * r;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - c.x;
                let dy = y as f32 + 0.5 - c.y;
                if dx * dx + dy * dy <= r2 {
                    self.fb.pixels[y * self.fb.width + x] = packed;
                }
            }
        }
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let (a, b, c) = (self.view.to_screen(a), self.view.to_screen(b), self.view.to_screen(c));
        self.fill_triangle(a, b, c, color.to_packed());
    }

    fn draw_triangle_fan(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let packed = color.to_packed();
        let hub = self.view.to_screen(points[0]);
        for pair in points[1..].windows(2) {
            let b = self.view.to_screen(pair[0]);
            let c = self.view.to_screen(pair[1]);
            self.fill_triangle(hub, b, c, packed);
        }
    }

    fn draw_triangle_strip(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let packed = color.to_packed();
        for tri in points.windows(3) {
            let a = self.view.to_screen(tri[0]);
            let b = self.view.to_screen(tri[1]);
            let c = self.view.to_screen(tri[2]);
            self.fill_triangle(a, b, c, packed);
        }
    }
}
