// Window + on-screen overlays.
// Visual effects provided here:
// 1) A window that shows the live mosaic.
// 2) The figure button in the top-right corner.
// 3) A tiny 5x7 bitmap font to render the HUD line on top of the mosaic.

use dot_mosaic::geometry::build_figure;
use dot_mosaic::raster::{RasterSurface, View};
use dot_mosaic::types::FrameBuffer;
use dot_mosaic::{Color, Error, FigureKind, Tile, Vec2};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current window size (changes when the user resizes it).
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels, clamped to the window.
    pub fn mouse_pos(&self) -> Option<Vec2> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Vec2::new(x.max(0.0), y.max(0.0)))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Vertical wheel movement since the last frame.
    pub fn wheel(&self) -> f32 {
        self.window.get_scroll_wheel().map(|(_, dy)| dy).unwrap_or(0.0)
    }

    pub fn pressed_once(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    /// -1/0/+1 per axis from WASD or the arrow keys.
    pub fn pan_direction(&self) -> (f32, f32) {
        let down = |a: Key, b: Key| self.window.is_key_down(a) || self.window.is_key_down(b);
        let mut dx = 0.0;
        let mut dy = 0.0;
        if down(Key::A, Key::Left) { dx -= 1.0; }
        if down(Key::D, Key::Right) { dx += 1.0; }
        if down(Key::W, Key::Up) { dy -= 1.0; }
        if down(Key::S, Key::Down) { dy += 1.0; }
        (dx, dy)
    }
}

/* ---------- Software drawing: pixels, rectangles, figure button ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Screen rectangle used for the figure button hit test.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x as f32 && p.y >= self.y as f32 && p.x < (self.x + self.w) as f32 && p.y < (self.y + self.h) as f32
    }
}

fn fill_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    for y in r.y..r.y + r.h {
        for x in r.x..r.x + r.w {
            put_pixel(fb, x, y, color);
        }
    }
}

fn outline_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    for x in r.x..r.x + r.w {
        put_pixel(fb, x, r.y, color);
        put_pixel(fb, x, r.y + r.h - 1, color);
    }
    for y in r.y..r.y + r.h {
        put_pixel(fb, r.x, y, color);
        put_pixel(fb, r.x + r.w - 1, y, color);
    }
}

/// 40x40 button 5px from the top-right corner.
pub fn figure_button_rect(screen_w: usize) -> Rect {
    Rect { x: screen_w as i32 - 45, y: 5, w: 40, h: 40 }
}

/// Fixed preview color per kind.
fn preview_color(kind: FigureKind) -> Color {
    match kind {
        FigureKind::Circle => Color::rgb(230, 41, 55),    // red
        FigureKind::Square => Color::rgb(0, 82, 172),     // dark blue
        FigureKind::Triangle => Color::rgb(0, 117, 44),   // dark green
        FigureKind::Star => Color::rgb(255, 161, 0),      // orange
        FigureKind::Rhombus => Color::rgb(135, 60, 190),  // violet
    }
}

/// Button showing the current figure; gray background while hovered.
/// Visual: clicking it cycles circle → square → triangle → star → rhombus.
pub fn draw_figure_button(fb: &mut FrameBuffer, rect: Rect, kind: FigureKind, hovered: bool) {
    const PADDING: i32 = 10;
    let (bg, border) = if hovered { (0x00_C8_C8_C8, 0x00_82_82_82) } else { (0x00_FF_FF_FF, 0x00_00_00_00) };
    fill_rect(fb, rect, bg);
    outline_rect(fb, rect, border);

    // The preview reuses the mosaic geometry at half size.
    let size = (rect.w.min(rect.h) - PADDING) as f32;
    let area = Tile { x: rect.x.max(0) as u32, y: rect.y.max(0) as u32, width: rect.w as u32, height: rect.h as u32 };
    let figure = build_figure(kind, area, 0.5, size);
    let mut surface = RasterSurface::new(fb, View::IDENTITY);
    figure.draw(&mut surface, preview_color(kind));
}

/* ---------- 5x7 bitmap font (digits, A-Z, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),
        '/' => g!(0b00001,0b00001,0b00010,0b00100,0b01000,0b10000,0b10000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, shadow: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (pass_color, off) in [(shadow, 1), (color, 0)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx as i32 + off, y + ry as i32 + off, pass_color);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32, shadow: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, shadow);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
