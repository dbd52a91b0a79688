//! Shared fixtures for mosaic integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use dot_mosaic::{Color, DrawingSurface, Vec2};
use image::{Rgba, RgbaImage};

/// Solid-color picture.
#[allow(dead_code)]
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Horizontal gradient from black (left) to white (right).
#[allow(dead_code)]
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / width.saturating_sub(1).max(1)) as u8;
        Rgba([v, v / 2, 255 - v, 255])
    })
}

/// One primitive call as seen by a surface.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Circle(Vec2, f32, Color),
    Triangle([Vec2; 3], Color),
    Fan(Vec<Vec2>, Color),
    Strip(Vec<Vec2>, Color),
}

/// Surface that only remembers what it was asked to draw.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl DrawingSurface for RecordingSurface {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(Call::Circle(center, radius, color));
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.calls.push(Call::Triangle([a, b, c], color));
    }

    fn draw_triangle_fan(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(Call::Fan(points.to_vec(), color));
    }

    fn draw_triangle_strip(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(Call::Strip(points.to_vec(), color));
    }
}

/// Fresh, empty scratch directory under the OS temp dir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("dot-mosaic-{name}-{}-{n}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}
