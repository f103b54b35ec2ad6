//! Placeholder swatch images for style previews.
//!
//! Each [`StyleEntry`](patchwork_schema::StyleEntry) becomes one square JPEG:
//! a background fill, a decoration picked from the style key, and the style
//! name and description drawn with a built-in bitmap font.

pub mod canvas;
pub mod decoration;
pub mod font;
pub mod render;

pub use decoration::Decoration;
pub use render::{file_name, make_rng, render_swatch, save_jpeg, SwatchGenerator};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}
