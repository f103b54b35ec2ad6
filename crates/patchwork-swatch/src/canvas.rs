//! Minimal raster primitives over an [`RgbImage`].
//!
//! Coordinates are signed and clipped to the image. Rectangles and ellipses
//! take an inclusive bounding box `[x0, y0, x1, y1]`; stroke width grows
//! inward, matching how most 2D toolkits outline shapes.

use image::{Rgb, RgbImage};
use patchwork_schema::Rgb as Color;
use std::f64::consts::PI;

pub type BoundingBox = [i64; 4];

pub fn rgb(color: Color) -> Rgb<u8> {
    Rgb(color)
}

pub fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    img.put_pixel(x as u32, y as u32, color);
}

pub fn fill_rect(img: &mut RgbImage, [x0, y0, x1, y1]: BoundingBox, color: Rgb<u8>) {
    for y in y0.min(y1)..=y0.max(y1) {
        for x in x0.min(x1)..=x0.max(x1) {
            put(img, x, y, color);
        }
    }
}

pub fn stroke_rect(img: &mut RgbImage, bbox: BoundingBox, color: Rgb<u8>, width: i64) {
    let [x0, y0, x1, y1] = bbox;
    for i in 0..width.max(1) {
        let (l, t, r, b) = (x0 + i, y0 + i, x1 - i, y1 - i);
        if l > r || t > b {
            break;
        }
        for x in l..=r {
            put(img, x, t, color);
            put(img, x, b, color);
        }
        for y in t..=b {
            put(img, l, y, color);
            put(img, r, y, color);
        }
    }
}

fn stamp(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, width: i64) {
    if width <= 1 {
        put(img, x, y, color);
        return;
    }
    let lo = -(width / 2);
    let hi = lo + width - 1;
    for dy in lo..=hi {
        for dx in lo..=hi {
            put(img, x + dx, y + dy, color);
        }
    }
}

/// Bresenham line with a square pen of `width` pixels.
pub fn line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>, width: i64) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(img, x, y, color, width);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Elliptical arc inside `bbox` from `start` to `end` degrees.
///
/// Angles run clockwise from three o'clock, so `0..180` is the lower half.
pub fn arc(img: &mut RgbImage, bbox: BoundingBox, start: f64, end: f64, color: Rgb<u8>, width: i64) {
    let [x0, y0, x1, y1] = bbox;
    let cx = (x0 + x1) as f64 / 2.0;
    let cy = (y0 + y1) as f64 / 2.0;
    for i in 0..width.max(1) {
        let rx = (x1 - x0) as f64 / 2.0 - i as f64;
        let ry = (y1 - y0) as f64 / 2.0 - i as f64;
        if rx < 0.0 || ry < 0.0 {
            break;
        }
        let sweep = (end - start).to_radians();
        let steps = ((rx.max(ry) * sweep.abs() * 2.0).ceil() as i64).max(8);
        for s in 0..=steps {
            let theta = start.to_radians() + sweep * s as f64 / steps as f64;
            let px = (cx + rx * theta.cos()).round() as i64;
            let py = (cy + ry * theta.sin()).round() as i64;
            put(img, px, py, color);
        }
    }
}

pub fn stroke_ellipse(img: &mut RgbImage, bbox: BoundingBox, color: Rgb<u8>, width: i64) {
    arc(img, bbox, 0.0, 360.0, color, width);
}

/// End point of a ray of `length` at `degrees`, truncated toward zero.
pub fn polar(center: (i64, i64), length: f64, degrees: f64) -> (i64, i64) {
    let theta = degrees * PI / 180.0;
    (
        center.0 + (length * theta.cos()).trunc() as i64,
        center.1 + (length * theta.sin()).trunc() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb<u8> = Rgb([255, 0, 0]);

    fn blank(size: u32) -> RgbImage {
        RgbImage::from_pixel(size, size, Rgb([0, 0, 0]))
    }

    #[test]
    fn put_clips_outside_pixels() {
        let mut img = blank(4);
        put(&mut img, -1, 0, INK);
        put(&mut img, 4, 4, INK);
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn stroke_rect_grows_inward() {
        let mut img = blank(10);
        stroke_rect(&mut img, [1, 1, 8, 8], INK, 2);
        assert_eq!(*img.get_pixel(1, 1), INK);
        assert_eq!(*img.get_pixel(2, 5), INK);
        assert_eq!(*img.get_pixel(3, 5), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut img = blank(10);
        line(&mut img, (0, 9), (9, 0), INK, 1);
        assert_eq!(*img.get_pixel(0, 9), INK);
        assert_eq!(*img.get_pixel(9, 0), INK);
        assert_eq!(*img.get_pixel(5, 4), INK);
    }

    #[test]
    fn lower_half_arc_stays_below_center() {
        let mut img = blank(21);
        arc(&mut img, [0, 0, 20, 20], 0.0, 180.0, INK, 1);
        assert_eq!(*img.get_pixel(10, 20), INK);
        assert_eq!(*img.get_pixel(10, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn polar_truncates_toward_zero() {
        assert_eq!(polar((100, 100), 100.0, 0.0), (200, 100));
        assert_eq!(polar((100, 100), 100.0, 60.0), (150, 186));
        assert_eq!(polar((100, 100), 100.0, 180.0), (0, 100));
    }
}
