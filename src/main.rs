// What you SEE:
// • The picture given on the command line, redrawn as a grid of figures.
// • Move the mouse down for a coarser grid, right for bigger figures.
// • Click the top-right button (or F) to cycle circle/square/triangle/star/rhombus.
// • H toggles the brick shift, G grayscale, L size-by-darkness.
// • E exports the current mosaic as SVG to the desktop.
// • Wheel zooms, WASD/arrows pan. ESC quits.

mod draw;

use std::path::{Path, PathBuf};

use dot_mosaic::config::{load_config, Config};
use dot_mosaic::export::{default_export_dir, export_path, export_svg};
use dot_mosaic::raster::{RasterSurface, View};
use dot_mosaic::types::FrameBuffer;
use dot_mosaic::{render_mosaic, Color, ControlState, Error, Vec2, ViewState};
use draw::{draw_figure_button, draw_text_5x7, figure_button_rect, Drawer};
use image::RgbaImage;
use minifb::Key;

/// The loaded picture and where it came from (for the export name).
struct Source {
    path: PathBuf,
    image: RgbaImage,
}

fn load_source(path: &Path) -> Result<Source, Error> {
    let image = image::open(path)
        .map_err(|source| Error::ImageLoad { path: path.to_path_buf(), source })?
        .to_rgba8();
    log::info!("loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(Source { path: path.to_path_buf(), image })
}

/// Blocking SVG export; failures are logged and the window keeps running.
fn export(source: &Source, controls: &ControlState, config: &Config) {
    let result = default_export_dir(config.export_dir.as_deref()).and_then(|dir| {
        let base = export_path(&dir, &source.path);
        export_svg(&source.image, controls, config.edge_divisor, &base, config.export_attempts)
    });
    if let Err(err) = result {
        log::warn!("export failed: {err}");
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();

    /* --- Source picture (optional) ---
       Visual: without one the window stays white apart from the button. */
    let mut source = match std::env::args_os().nth(1) {
        Some(arg) => Some(load_source(Path::new(&arg))?),
        None => {
            log::info!("no image given; usage: dot-mosaic <IMAGE>");
            None
        }
    };

    let mut drawer = Drawer::new("dots", config.window_width, config.window_height)?;
    let mut screen = FrameBuffer::new(config.window_width, config.window_height);

    let mut controls = ControlState::from_config(&config);
    let mut camera = ViewState::default();
    if let Some(src) = &source {
        camera.recenter(src.image.width(), src.image.height());
    }
    let mut mouse_was_down = false;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let (w, h) = drawer.size();
        screen.resize(w.max(1), h.max(1));

        /* 1) Inputs → control state. */
        let pointer = drawer.mouse_pos().unwrap_or_default();
        controls.apply_pointer(pointer, screen.width as f32, screen.height as f32, &config);

        let button = figure_button_rect(screen.width);
        let hovered = button.contains(pointer);
        let mouse_down = drawer.left_mouse_down();
        if (hovered && mouse_down && !mouse_was_down) || drawer.pressed_once(Key::F) {
            controls.figure = controls.figure.next(); // visual: button shows the next figure
        }
        mouse_was_down = mouse_down;

        if drawer.pressed_once(Key::H) { controls.shift = !controls.shift; }
        if drawer.pressed_once(Key::G) { controls.grayscale = !controls.grayscale; }
        if drawer.pressed_once(Key::L) { controls.size_by_luminance = !controls.size_by_luminance; }

        camera.apply_wheel(drawer.wheel(), &config);
        let (dx, dy) = drawer.pan_direction();
        camera.pan(dx, dy, &config);

        if drawer.pressed_once(Key::E) {
            match &source {
                Some(src) => export(src, &controls, &config),
                None => log::warn!("nothing to export: no image loaded"),
            }
        }
        if drawer.pressed_once(Key::R) {
            // Reload from disk, e.g. after editing the picture.
            if let Some(path) = source.as_ref().map(|s| s.path.clone()) {
                match load_source(&path) {
                    Ok(src) => {
                        camera.recenter(src.image.width(), src.image.height());
                        source = Some(src);
                    }
                    Err(err) => log::error!("{err}"),
                }
            }
        }

        /* 2) Mosaic pass against the window. */
        screen.clear(Color::WHITE);
        if let Some(src) = &source {
            let view = View {
                target: camera.target,
                offset: Vec2::new(screen.width as f32 / 2.0, screen.height as f32 / 2.0),
                zoom: camera.zoom,
            };
            let mut surface = RasterSurface::new(&mut screen, view);
            let stats = render_mosaic(&src.image, &controls, config.edge_divisor, &mut surface);
            log::debug!("{} tiles, {} figures", stats.tiles, stats.figures);
        }

        /* 3) Overlays: figure button + HUD. */
        draw_figure_button(&mut screen, button, controls.figure, hovered);
        let hud = format!(
            "STEP {} | R {:.1} | {} | SHIFT {} | GRAY {} | LUM {} | ZOOM {:.2}",
            controls.step(),
            controls.radius(),
            controls.figure,
            on_off(controls.shift),
            on_off(controls.grayscale),
            on_off(controls.size_by_luminance),
            camera.zoom,
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00_20_20_20, 0x00_E0_E0_E0);

        /* 4) Present. */
        drawer.present(&screen)?;
    }

    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}
