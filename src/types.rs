// Core value types shared by the sampler, the geometry builder and both surfaces.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Packed-RGB screen buffer handed to the window every frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Paint every pixel with `color` (start of a frame).
    pub fn clear(&mut self, color: Color) {
        let packed = color.to_packed();
        for px in &mut self.pixels { *px = packed; }
    }

    /// Reallocate if the window was resized; contents are undefined afterwards.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.pixels = vec![0u32; width * height];
        }
    }

    /// Read back one pixel, `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Neutral gray with the same value on every channel.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// 0x00RRGGBB, the layout minifb expects.
    pub fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn from_packed(px: u32) -> Self {
        Self::rgb(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }

    /// Lowercase `#rrggbb`; alpha is not serialized.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A point in image (world) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` in direction `degrees` (0° = +x, y grows downwards).
    pub fn polar_offset(self, distance: f32, degrees: f32) -> Self {
        let rad = degrees.to_radians();
        Self::new(self.x + distance * rad.cos(), self.y + distance * rad.sin())
    }
}

/// One grid cell of the image, in pixel coordinates. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Tile {
    /// Square tile of side `step` anchored at (x, y).
    pub fn square(x: u32, y: u32, step: u32) -> Self {
        Self { x, y, width: step, height: step }
    }

    /// Center of the tile's bounding square (the side is taken from the width).
    pub fn center(&self) -> Vec2 {
        let half = self.width as f32 / 2.0;
        Vec2::new(self.x as f32 + half, self.y as f32 + half)
    }

    /// Unclamped area; what the compatible sampler divides by.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// The closed set of figures a tile can turn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    #[default]
    Circle,
    Square,
    Triangle,
    Star,
    Rhombus,
}

impl FigureKind {
    pub const ALL: [FigureKind; 5] = [
        FigureKind::Circle,
        FigureKind::Square,
        FigureKind::Triangle,
        FigureKind::Star,
        FigureKind::Rhombus,
    ];

    /// Next kind in the fixed cycle; Rhombus wraps to Circle.
    pub fn next(self) -> Self {
        match self {
            FigureKind::Circle => FigureKind::Square,
            FigureKind::Square => FigureKind::Triangle,
            FigureKind::Triangle => FigureKind::Star,
            FigureKind::Star => FigureKind::Rhombus,
            FigureKind::Rhombus => FigureKind::Circle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Circle => "circle",
            FigureKind::Square => "square",
            FigureKind::Triangle => "triangle",
            FigureKind::Star => "star",
            FigureKind::Rhombus => "rhombus",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
