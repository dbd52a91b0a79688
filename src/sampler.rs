// Tile sampling: average color over a tile and the darkness weight derived from it.
// Visual: the weight decides how big (or whether) each figure is drawn.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Tile};

/// Read-only access to the source picture.
/// Implementors must answer for every (x, y) in `[0, width) × [0, height)`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_at(&self, x: u32, y: u32) -> Color;
}

impl PixelSource for image::RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel_at(&self, x: u32, y: u32) -> Color {
        let p = self.get_pixel(x, y);
        Color { r: p[0], g: p[1], b: p[2], a: p[3] }
    }
}

/// What the channel sums are divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Divisor {
    /// Full `step × step` area even when the tile hangs over the image edge.
    /// Edge tiles come out lighter than the pixels they cover.
    #[default]
    Nominal,
    /// Only the pixels that were actually summed.
    Covered,
}

/// Average color of `tile` clipped to the image bounds. Alpha is always 255.
///
/// Returns `None` when nothing of the tile lies inside the image.
pub fn average_color<S: PixelSource + ?Sized>(img: &S, tile: Tile, divisor: Divisor) -> Option<Color> {
    let xend = tile.x.saturating_add(tile.width).min(img.width());
    let yend = tile.y.saturating_add(tile.height).min(img.height());
    if tile.x >= xend || tile.y >= yend {
        return None;
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for y in tile.y..yend {
        for x in tile.x..xend {
            let c = img.pixel_at(x, y);
            r += c.r as u64;
            g += c.g as u64;
            b += c.b as u64;
        }
    }

    let covered = (xend - tile.x) as u64 * (yend - tile.y) as u64;
    let count = match divisor {
        Divisor::Nominal => tile.area(),
        Divisor::Covered => covered,
    };

    Some(Color::rgb((r / count) as u8, (g / count) as u8, (b / count) as u8))
}

/// Perceptual darkness of `avg` in [0, 1]: 0 for pure white, ~1 for black.
///
/// Channels are inverted before the 0.299/0.587/0.114 weighting. This is not
/// relative luminance and must stay bit-compatible across backends.
pub fn luminance(avg: Color) -> f32 {
    let rf = 255.0f32 - avg.r as f32;
    let gf = 255.0f32 - avg.g as f32;
    let bf = 255.0f32 - avg.b as f32;
    let weighted = rf * rf * 0.299 + gf * gf * 0.587 + bf * bf * 0.114;
    (weighted.sqrt() / 255.0).clamp(0.0, 1.0)
}
