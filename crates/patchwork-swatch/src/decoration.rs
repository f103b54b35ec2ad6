use crate::canvas::{arc, line, polar, rgb, stroke_ellipse, stroke_rect};
use image::RgbImage;
use patchwork_schema::StyleEntry;
use rand::Rng;

/// Ornament drawn between the background fill and the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Frames,
    Arcs,
    Rings,
    ComicBorder,
    NeonLines,
    Spokes,
    VintageFrames,
    Cross,
    Bubbles,
    Washes,
    Hatching,
    Tiles,
    Plain,
}

/// Key fragments checked in order; the first hit wins.
const DISPATCH: &[(&[&str], Decoration)] = &[
    (&["professional", "executive"], Decoration::Frames),
    (&["renaissance", "oil"], Decoration::Arcs),
    (&["anime", "disney"], Decoration::Rings),
    (&["comic"], Decoration::ComicBorder),
    (&["cyberpunk"], Decoration::NeonLines),
    (&["fantasy"], Decoration::Spokes),
    (&["vintage", "film"], Decoration::VintageFrames),
    (&["minimalist"], Decoration::Cross),
    (&["abstract"], Decoration::Bubbles),
    (&["watercolor"], Decoration::Washes),
    (&["sketch"], Decoration::Hatching),
    (&["pop"], Decoration::Tiles),
];

impl Decoration {
    pub fn for_key(key: &str) -> Self {
        DISPATCH
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| key.contains(n)))
            .map_or(Decoration::Plain, |(_, d)| *d)
    }

    pub fn name(self) -> &'static str {
        match self {
            Decoration::Frames => "frames",
            Decoration::Arcs => "arcs",
            Decoration::Rings => "rings",
            Decoration::ComicBorder => "comic-border",
            Decoration::NeonLines => "neon-lines",
            Decoration::Spokes => "spokes",
            Decoration::VintageFrames => "vintage-frames",
            Decoration::Cross => "cross",
            Decoration::Bubbles => "bubbles",
            Decoration::Washes => "washes",
            Decoration::Hatching => "hatching",
            Decoration::Tiles => "tiles",
            Decoration::Plain => "plain",
        }
    }

    /// Draw onto a square image. Only the random decorations consume `rng`.
    pub fn draw<R: Rng + ?Sized>(self, img: &mut RgbImage, style: &StyleEntry, rng: &mut R) {
        let s = i64::from(img.width());
        let accent = rgb(style.accent_color);
        let text = rgb(style.text_color);
        match self {
            Decoration::Frames => {
                stroke_rect(img, [50, 50, s - 50, s - 50], accent, 3);
                stroke_rect(img, [80, 80, s - 80, s - 80], text, 2);
            }
            Decoration::Arcs => {
                for _ in 0..5 {
                    let x1 = rng.random_range(20..=s - 40);
                    let y1 = rng.random_range(20..=s - 40);
                    let x2 = x1 + rng.random_range(20..=60);
                    let y2 = y1 + rng.random_range(20..=60);
                    arc(img, [x1, y1, x2, y2], 0.0, 180.0, accent, 3);
                }
            }
            Decoration::Rings => {
                stroke_ellipse(img, [50, 50, s - 50, s - 50], accent, 4);
                stroke_ellipse(img, [80, 80, s - 80, s - 80], text, 2);
            }
            Decoration::ComicBorder => {
                let (lo, hi) = (20, s - 20);
                line(img, (lo, lo), (hi, lo), accent, 5);
                line(img, (hi, lo), (hi, hi), accent, 5);
                line(img, (hi, hi), (lo, hi), accent, 5);
                line(img, (lo, hi), (lo, lo), accent, 5);
            }
            Decoration::NeonLines => random_lines(img, rng, 8, accent, 2),
            Decoration::Spokes => {
                let center = (s / 2, s / 2);
                for i in 0..6_u32 {
                    let end = polar(center, 100.0, f64::from(i * 60));
                    line(img, center, end, accent, 3);
                }
            }
            Decoration::VintageFrames => {
                stroke_rect(img, [30, 30, s - 30, s - 30], text, 2);
                stroke_rect(img, [60, 60, s - 60, s - 60], accent, 1);
            }
            Decoration::Cross => {
                let (q, t) = (s / 4, 3 * s / 4);
                line(img, (q, q), (t, t), text, 2);
                line(img, (t, q), (q, t), text, 2);
            }
            Decoration::Bubbles => {
                for _ in 0..10 {
                    let x1 = rng.random_range(20..=s - 40);
                    let y1 = rng.random_range(20..=s - 40);
                    let x2 = x1 + rng.random_range(10..=30);
                    let y2 = y1 + rng.random_range(10..=30);
                    stroke_ellipse(img, [x1, y1, x2, y2], accent, 2);
                }
            }
            Decoration::Washes => {
                for _ in 0..6 {
                    let x = rng.random_range(50..=s - 50);
                    let y = rng.random_range(50..=s - 50);
                    let r = rng.random_range(20..=60);
                    stroke_ellipse(img, [x - r, y - r, x + r, y + r], accent, 1);
                }
            }
            Decoration::Hatching => random_lines(img, rng, 15, text, 1),
            Decoration::Tiles => {
                let tile = s / 4;
                for i in 0..4 {
                    let x = i * tile;
                    stroke_rect(img, [x, x, x + tile, x + tile], accent, 3);
                }
            }
            Decoration::Plain => {}
        }
    }
}

fn random_lines<R: Rng + ?Sized>(
    img: &mut RgbImage,
    rng: &mut R,
    count: usize,
    color: image::Rgb<u8>,
    width: i64,
) {
    let s = i64::from(img.width());
    for _ in 0..count {
        let from = (rng.random_range(10..=s - 10), rng.random_range(10..=s - 10));
        let to = (rng.random_range(10..=s - 10), rng.random_range(10..=s - 10));
        line(img, from, to, color, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_follows_key_fragments() {
        assert_eq!(Decoration::for_key("professional_headshot"), Decoration::Frames);
        assert_eq!(Decoration::for_key("oil_painting"), Decoration::Arcs);
        assert_eq!(Decoration::for_key("disney_pixar"), Decoration::Rings);
        assert_eq!(Decoration::for_key("vintage_film"), Decoration::VintageFrames);
        assert_eq!(Decoration::for_key("pop_art"), Decoration::Tiles);
        assert_eq!(Decoration::for_key("gothic"), Decoration::Plain);
    }

    #[test]
    fn earlier_entries_win() {
        // "executive" is checked before "comic".
        assert_eq!(Decoration::for_key("executive_comic"), Decoration::Frames);
        assert_eq!(Decoration::for_key("pop_sketch"), Decoration::Hatching);
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(Decoration::ComicBorder.name(), "comic-border");
        assert_eq!(Decoration::Plain.name(), "plain");
    }
}
