// SVG export: one blocking pass into a VectorSurface, then a write that never
// overwrites an existing file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::controls::ControlState;
use crate::error::Error;
use crate::mosaic::{render_mosaic, RenderStats};
use crate::sampler::{Divisor, PixelSource};
use crate::vector::{VectorDocument, VectorSurface};

/// Run the mosaic against a fresh vector surface and close it.
pub fn render_document<S: PixelSource + ?Sized>(
    img: &S,
    controls: &ControlState,
    divisor: Divisor,
) -> (VectorDocument, RenderStats) {
    let mut surface = VectorSurface::new(img.width(), img.height(), controls.radius());
    let stats = render_mosaic(img, controls, divisor, &mut surface);
    (surface.finish(), stats)
}

/// `<dir>/<stem of source>.svg`.
pub fn export_path(dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mosaic".to_string());
    dir.join(format!("{stem}.svg"))
}

/// Destination folder: configured one, else `<home>/Desktop`.
pub fn default_export_dir(configured: Option<&Path>) -> Result<PathBuf, Error> {
    if let Some(dir) = configured {
        return Ok(dir.to_path_buf());
    }
    desktop_folder(dirs::home_dir(), dirs::desktop_dir()).ok_or(Error::NoExportDirectory)
}

/// `<home>/Desktop` wins; the platform desktop (e.g. a localized XDG folder)
/// is only used when there is no home directory.
fn desktop_folder(home: Option<PathBuf>, platform_desktop: Option<PathBuf>) -> Option<PathBuf> {
    home.map(|home| home.join("Desktop")).or(platform_desktop)
}

/// `name.svg` → `name_<n>.svg`; `n == 0` is the path itself.
pub fn candidate_path(base: &Path, n: u32) -> PathBuf {
    if n == 0 {
        return base.to_path_buf();
    }
    let stem = base.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}_{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{n}"),
    };
    base.with_file_name(name)
}

/// Write `document` to `base`, or to the first free `_1`, `_2`, … variant.
///
/// At most `attempts` suffixed names are tried after `base` itself.
/// Existing files are never touched. Returns the path actually written.
pub fn write_document(document: &VectorDocument, base: &Path, attempts: u32) -> Result<PathBuf, Error> {
    for n in 0..=attempts {
        let path = candidate_path(base, n);
        // create_new fails on existing files, so a race cannot overwrite either.
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                log::debug!("{} exists, trying next name", path.display());
                continue;
            }
            Err(source) => return Err(Error::Export { path, source }),
        };

        fill_new_file(file, &path, |out| svg::write(out, &document.to_svg()))?;
        return Ok(path);
    }

    Err(Error::ExportExhausted { base: base.to_path_buf(), attempts })
}

/// Write into a file this export just created. On failure the partial file is
/// removed so no broken document is left behind and the name stays free.
fn fill_new_file<F>(file: File, path: &Path, fill: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut out = BufWriter::new(file);
    let result = fill(&mut out).and_then(|()| out.flush());
    let Err(source) = result else {
        return Ok(());
    };

    drop(out); // close the handle before unlinking
    if let Err(e) = fs::remove_file(path) {
        log::warn!("could not remove partial {}: {e}", path.display());
    }
    Err(Error::Export { path: path.to_path_buf(), source })
}

/// Full export: render, pick a free name next to `base`, write.
pub fn export_svg<S: PixelSource + ?Sized>(
    img: &S,
    controls: &ControlState,
    divisor: Divisor,
    base: &Path,
    attempts: u32,
) -> Result<(PathBuf, RenderStats), Error> {
    let (document, stats) = render_document(img, controls, divisor);
    let path = write_document(&document, base, attempts)?;
    log::info!("exported {} figures to {}", stats.figures, path.display());
    Ok((path, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_insert_suffix_before_extension() {
        let base = Path::new("/home/me/Desktop/cat.svg");
        assert_eq!(candidate_path(base, 0), PathBuf::from("/home/me/Desktop/cat.svg"));
        assert_eq!(candidate_path(base, 1), PathBuf::from("/home/me/Desktop/cat_1.svg"));
        assert_eq!(candidate_path(base, 12), PathBuf::from("/home/me/Desktop/cat_12.svg"));
    }

    #[test]
    fn export_path_uses_source_stem() {
        let path = export_path(Path::new("/out"), Path::new("/pics/holiday.photo.png"));
        assert_eq!(path, PathBuf::from("/out/holiday.photo.svg"));
    }

    #[test]
    fn home_desktop_beats_platform_desktop() {
        let home = Some(PathBuf::from("/home/me"));
        let localized = Some(PathBuf::from("/home/me/Schreibtisch"));
        assert_eq!(desktop_folder(home, localized.clone()), Some(PathBuf::from("/home/me/Desktop")));
        assert_eq!(desktop_folder(None, localized.clone()), localized);
        assert_eq!(desktop_folder(None, None), None);
    }

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dot-mosaic-unit-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn failed_write_removes_partial_file() {
        let dir = scratch("partial");
        let path = dir.join("pic.svg");
        let file = OpenOptions::new().write(true).create_new(true).open(&path).unwrap();

        let err = fill_new_file(file, &path, |out| {
            out.write_all(&[b'x'; 64 * 1024])?;
            Err(io::Error::new(ErrorKind::StorageFull, "no space left on device"))
        })
        .unwrap_err();

        assert!(matches!(err, Error::Export { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn name_is_reused_after_a_failed_write() {
        let dir = scratch("reuse");
        let base = dir.join("pic.svg");
        let file = OpenOptions::new().write(true).create_new(true).open(&base).unwrap();
        let _ = fill_new_file(file, &base, |_| Err(io::Error::other("boom")));

        let document = crate::vector::VectorSurface::new(4, 4, 1.0).finish();
        assert_eq!(write_document(&document, &base, 3).unwrap(), base);
        assert!(!candidate_path(&base, 1).exists());
        assert_eq!(fs::read_to_string(&base).unwrap(), document.to_markup());
    }

    #[test]
    fn successful_fill_keeps_file() {
        let dir = scratch("ok");
        let path = dir.join("pic.svg");
        let file = OpenOptions::new().write(true).create_new(true).open(&path).unwrap();
        fill_new_file(file, &path, |out| out.write_all(b"<svg/>")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn configured_dir_wins() {
        let dir = default_export_dir(Some(Path::new("/srv/exports"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/exports"));
    }
}
