use crate::canvas::{fill_rect, rgb, stroke_rect};
use crate::decoration::Decoration;
use crate::font::{draw_text, fit_scale, text_height, text_width};
use crate::SwatchError;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use patchwork_schema::StyleEntry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const NAME_SCALE: i64 = 3;
const DESCRIPTION_SCALE: i64 = 2;
const LABEL_OFFSET: i64 = 60;
const MARGIN: i64 = 20;

/// Seeded generator when `seed` is set, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn file_name(style: &StyleEntry) -> String {
    format!("sample_{}.jpg", style.key)
}

/// Rasterize one labeled `size × size` swatch.
pub fn render_swatch<R: Rng + ?Sized>(style: &StyleEntry, size: u32, rng: &mut R) -> RgbImage {
    let mut img = RgbImage::from_pixel(size, size, rgb(style.bg_color));
    let decoration = Decoration::for_key(style.key.as_str());
    tracing::trace!("{}: decoration {}", style.key, decoration.name());
    decoration.draw(&mut img, style, rng);

    let s = i64::from(size);
    let bg = rgb(style.bg_color);
    let ink = rgb(style.text_color);

    let name_scale = fit_scale(&style.name, NAME_SCALE, s - MARGIN);
    let name_w = text_width(&style.name, name_scale);
    let name_h = text_height(name_scale);
    let name_x = (s - name_w) / 2;
    let name_y = s - LABEL_OFFSET;
    let label_box = [name_x - 10, name_y - 5, name_x + name_w + 10, name_y + name_h + 5];
    fill_rect(&mut img, label_box, bg);
    stroke_rect(&mut img, label_box, ink, 1);
    draw_text(&mut img, (name_x, name_y), &style.name, name_scale, ink);

    let desc_scale = fit_scale(&style.description, DESCRIPTION_SCALE, s - MARGIN);
    let desc_w = text_width(&style.description, desc_scale);
    let desc_x = (s - desc_w) / 2;
    let desc_y = name_y + name_h + 10;
    draw_text(&mut img, (desc_x, desc_y), &style.description, desc_scale, ink);

    img
}

pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<(), SwatchError> {
    let file = File::create(path).map_err(|e| SwatchError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(img)
        .map_err(|e| SwatchError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;
    writer.flush().map_err(|e| SwatchError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes swatches into one output directory.
#[derive(Debug, Clone)]
pub struct SwatchGenerator {
    out_dir: PathBuf,
    size: u32,
    quality: u8,
}

impl SwatchGenerator {
    pub fn new(out_dir: impl Into<PathBuf>, size: u32, quality: u8) -> Self {
        Self {
            out_dir: out_dir.into(),
            size,
            quality,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn prepare(&self) -> Result<(), SwatchError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| SwatchError::CreateDir {
            path: self.out_dir.clone(),
            source: e,
        })
    }

    /// Render and save one style, returning the written path.
    pub fn generate_one<R: Rng + ?Sized>(
        &self,
        style: &StyleEntry,
        rng: &mut R,
    ) -> Result<PathBuf, SwatchError> {
        let path = self.out_dir.join(file_name(style));
        let img = render_swatch(style, self.size, rng);
        save_jpeg(&img, &path, self.quality)?;
        tracing::info!("wrote {}", path.display());
        Ok(path)
    }

    pub fn generate_all<R: Rng + ?Sized>(
        &self,
        styles: &[StyleEntry],
        rng: &mut R,
    ) -> Result<Vec<PathBuf>, SwatchError> {
        self.prepare()?;
        styles.iter().map(|s| self.generate_one(s, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patchwork_schema::get_style;

    #[test]
    fn label_box_sits_above_bottom() {
        let style = get_style("minimalist").unwrap();
        let img = render_swatch(&style, 360, &mut make_rng(Some(1)));
        // Top edge of the outline is 5 px above the name at size - 60.
        let outline = *img.get_pixel(180, 295);
        assert_eq!(outline, rgb(style.text_color));
        // The outline is a single pixel wide.
        assert_eq!(*img.get_pixel(180, 296), rgb(style.bg_color));
    }

    #[test]
    fn same_seed_renders_identical_pixels() {
        let style = get_style("cyberpunk_future").unwrap();
        let a = render_swatch(&style, 300, &mut make_rng(Some(7)));
        let b = render_swatch(&style, 300, &mut make_rng(Some(7)));
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn different_seeds_move_random_decorations() {
        let style = get_style("abstract_art").unwrap();
        let a = render_swatch(&style, 300, &mut make_rng(Some(1)));
        let b = render_swatch(&style, 300, &mut make_rng(Some(2)));
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn file_name_uses_key() {
        let style = get_style("pop_art").unwrap();
        assert_eq!(file_name(&style), "sample_pop_art.jpg");
    }
}
