// The mosaic pass: walk the tile grid, sample each tile, and hand one figure
// per tile to whichever surface is active (window or SVG).

use crate::controls::ControlState;
use crate::geometry::build_figure;
use crate::sampler::{average_color, luminance, Divisor, PixelSource};
use crate::surface::DrawingSurface;
use crate::types::{Color, Tile};

/// Counters from one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Tiles visited on the grid.
    pub tiles: usize,
    /// Figures handed to the surface.
    pub figures: usize,
}

/// Tiles visited for a `width × height` image, row by row.
/// With `shift`, rows at odd `y` start half a step in (brick layout).
pub fn tile_grid(width: u32, height: u32, step: u32, shift: bool) -> impl Iterator<Item = Tile> {
    let step = step.max(1);
    (0..height).step_by(step as usize).flat_map(move |y| {
        let start = if shift && y % 2 != 0 { step / 2 } else { 0 };
        (start..width).step_by(step as usize).map(move |x| Tile::square(x, y, step))
    })
}

/// Color a figure is painted with, after the optional grayscale remap.
pub fn figure_color(avg: Color, lum: f32, grayscale: bool) -> Color {
    if grayscale {
        Color::gray((255.0 * (1.0 - lum)) as u8)
    } else {
        avg
    }
}

/// Render the whole mosaic of `img` onto `surface`.
///
/// Pure function of the image and `controls`: the same inputs issue the same
/// draw calls in the same order.
pub fn render_mosaic<S: PixelSource + ?Sized>(
    img: &S,
    controls: &ControlState,
    divisor: Divisor,
    surface: &mut dyn DrawingSurface,
) -> RenderStats {
    let mut stats = RenderStats::default();
    let radius = controls.radius();

    for tile in tile_grid(img.width(), img.height(), controls.step(), controls.shift) {
        stats.tiles += 1;

        let Some(avg) = average_color(img, tile, divisor) else {
            continue;
        };
        let lum = luminance(avg);
        if lum == 0.0 {
            continue; // pure white: nothing to draw
        }

        let multiplier = if controls.size_by_luminance { lum } else { 1.0 };
        if multiplier == 0.0 || radius == 0.0 {
            continue;
        }

        let color = figure_color(avg, lum, controls.grayscale);
        build_figure(controls.figure, tile, multiplier, radius).draw(surface, color);
        stats.figures += 1;
    }

    stats
}
