// dot-mosaic: turns a picture into a grid of size- and color-modulated figures,
// drawn live into a window or exported as SVG.
//
// Flow per pass: ControlState -> mosaic::render_mosaic -> (sampler, geometry)
// -> DrawingSurface (raster::RasterSurface or vector::VectorSurface).

pub mod config;
pub mod controls;
pub mod error;
pub mod export;
pub mod geometry;
pub mod mosaic;
pub mod raster;
pub mod sampler;
pub mod surface;
pub mod types;
pub mod vector;

pub use controls::{normalize_step, ControlState, ViewState};
pub use error::Error;
pub use export::export_svg;
pub use geometry::{build_figure, Figure};
pub use mosaic::{render_mosaic, RenderStats};
pub use sampler::{Divisor, PixelSource};
pub use surface::DrawingSurface;
pub use types::{Color, FigureKind, Tile, Vec2};
