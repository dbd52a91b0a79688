// One error type for the whole crate.
// Every variant states *where* things went wrong.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Pushing the frame buffer to the window failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// The source picture could not be opened or decoded.
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Opening or writing the SVG file failed.
    #[error("failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every suffixed candidate next to `base` already exists.
    #[error("no free file name for {base} after {attempts} attempts")]
    ExportExhausted { base: PathBuf, attempts: u32 },

    /// Neither the config nor the platform could name a destination folder.
    #[error("could not determine an export directory")]
    NoExportDirectory,

    /// The config file exists but is not valid TOML for [`crate::config::Config`].
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}
