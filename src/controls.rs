// Control state: the parameters the renderer reads each pass, plus the
// camera used by the live window. Out-of-range input is clamped, never an error.

use crate::config::Config;
use crate::types::{FigureKind, Vec2};

/// Read-only snapshot for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    pub figure: FigureKind,
    step: u32,
    radius: f32,
    pub shift: bool,
    pub grayscale: bool,
    pub size_by_luminance: bool,
}

/// Smallest odd value >= `step`, and never below 1.
pub fn normalize_step(step: u32) -> u32 {
    let step = step.max(1);
    if step % 2 == 0 { step.saturating_add(1) } else { step }
}

impl ControlState {
    pub fn new(figure: FigureKind, step: u32, radius: f32) -> Self {
        Self {
            figure,
            step: normalize_step(step),
            radius: sanitize_radius(radius),
            shift: false,
            grayscale: false,
            size_by_luminance: true,
        }
    }

    /// Initial state from config toggles.
    pub fn from_config(config: &Config) -> Self {
        Self {
            shift: config.shift,
            grayscale: config.grayscale,
            size_by_luminance: config.size_by_luminance,
            ..Self::new(config.figure, 1, config.min_radius)
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_step(&mut self, step: u32) {
        self.step = normalize_step(step);
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = sanitize_radius(radius);
    }

    pub fn with_shift(mut self, on: bool) -> Self {
        self.shift = on;
        self
    }

    pub fn with_grayscale(mut self, on: bool) -> Self {
        self.grayscale = on;
        self
    }

    pub fn with_size_by_luminance(mut self, on: bool) -> Self {
        self.size_by_luminance = on;
        self
    }

    /// Map the pointer to step (vertical) and radius (horizontal).
    /// Visual: moving down makes the grid coarser, moving right grows the figures.
    pub fn apply_pointer(&mut self, pointer: Vec2, screen_w: f32, screen_h: f32, config: &Config) {
        if screen_w <= 0.0 || screen_h <= 0.0 {
            return;
        }
        let max_step = config.max_step.max(1);
        let coef_y = pointer.y / screen_h;
        let coef_x = pointer.x / screen_w;

        let raw_step = (max_step as f32 * coef_y).clamp(1.0, max_step as f32) as u32;
        let radius = (raw_step as f32 / 2.0) * coef_x;

        self.set_step(raw_step);
        self.set_radius(radius.clamp(config.min_radius, config.max_radius.max(config.min_radius)));
    }
}

fn sanitize_radius(radius: f32) -> f32 {
    if radius.is_finite() { radius.max(0.0) } else { 0.0 }
}

/// Camera for the live window: which image point sits at the window center,
/// and how much it is magnified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub target: Vec2,
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { target: Vec2::default(), zoom: 1.0 }
    }
}

impl ViewState {
    /// Center on a freshly loaded image at 1:1.
    pub fn recenter(&mut self, image_w: u32, image_h: u32) {
        self.target = Vec2::new(image_w as f32 / 2.0, image_h as f32 / 2.0);
        self.zoom = 1.0;
    }

    pub fn apply_wheel(&mut self, wheel: f32, config: &Config) {
        let zoom = self.zoom + wheel * config.zoom_speed;
        self.zoom = zoom.clamp(config.min_zoom, config.max_zoom.max(config.min_zoom));
    }

    /// `dx`/`dy` in {-1, 0, 1}, scaled by the configured pan speed.
    pub fn pan(&mut self, dx: f32, dy: f32, config: &Config) {
        self.target.x += dx * config.pan_speed;
        self.target.y += dy * config.pan_speed;
    }
}
