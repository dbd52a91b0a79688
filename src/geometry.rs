// Figure geometry: turns (kind, tile, size multiplier, radius) into vertices.
// The same `Figure` value is fed to the raster window and the SVG export,
// so both outputs share identical coordinates.

use smallvec::SmallVec;

use crate::surface::DrawingSurface;
use crate::types::{Color, FigureKind, Tile, Vec2};

/// Hub + 5 spikes × 4 points.
pub const STAR_VERTEX_COUNT: usize = 21;

/// Vertex list sized for the largest figure; never spills to the heap.
pub type Vertices = SmallVec<[Vec2; STAR_VERTEX_COUNT]>;

/// Inner star radius relative to the outer one.
const STAR_INNER_RATIO: f32 = 0.5;
/// Angular step between consecutive star points (degrees).
const STAR_STEP_DEG: f32 = -36.0;

/// One figure ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Circle { center: Vec2, radius: f32 },
    Triangle([Vec2; 3]),
    Fan(Vertices),
    Strip(Vertices),
}

impl Figure {
    /// Dispatch to the matching surface primitive.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, color: Color) {
        match self {
            Figure::Circle { center, radius } => surface.draw_circle(*center, *radius, color),
            Figure::Triangle([a, b, c]) => surface.draw_triangle(*a, *b, *c, color),
            Figure::Fan(points) => {
                if points.len() >= 3 {
                    surface.draw_triangle_fan(points, color);
                }
            }
            Figure::Strip(points) => {
                if points.len() >= 3 {
                    surface.draw_triangle_strip(points, color);
                }
            }
        }
    }
}

/// Build the figure for one tile. `size` is `radius × multiplier`.
pub fn build_figure(kind: FigureKind, area: Tile, multiplier: f32, radius: f32) -> Figure {
    let center = area.center();
    let size = radius * multiplier;

    match kind {
        FigureKind::Circle => Figure::Circle { center, radius: size },
        FigureKind::Square => Figure::Strip(closed_polygon(center, size, &[-45.0, -135.0, -225.0, -315.0])),
        FigureKind::Triangle => Figure::Triangle([
            center.polar_offset(size, -90.0),
            center.polar_offset(size, -210.0),
            center.polar_offset(size, -330.0),
        ]),
        FigureKind::Star => Figure::Fan(star(center, size)),
        FigureKind::Rhombus => Figure::Strip(closed_polygon(center, size, &[0.0, -90.0, -180.0, -270.0])),
    }
}

/// Corners at the given angles, first corner repeated at the end.
fn closed_polygon(center: Vec2, size: f32, angles: &[f32]) -> Vertices {
    let mut strip: Vertices = angles.iter().map(|&deg| center.polar_offset(size, deg)).collect();
    if let Some(&first) = strip.first() {
        strip.push(first);
    }
    strip
}

/// Five-pointed star as a fan anchored at `center`.
fn star(center: Vec2, outer: f32) -> Vertices {
    let inner = outer * STAR_INNER_RATIO;
    let step = STAR_STEP_DEG.to_radians();
    let mut angle = (-90.0f32).to_radians() - step;

    let at = |r: f32, a: f32| Vec2::new(center.x + r * a.cos(), center.y + r * a.sin());

    let mut fan = Vertices::new();
    fan.push(center);
    for _ in 0..5 {
        fan.push(at(inner, angle));
        angle += step;
        fan.push(at(outer, angle));

        fan.push(at(outer, angle));
        angle += step;
        fan.push(at(inner, angle));
    }
    fan
}
