//! Rounded-rectangle coverage mask.
//!
//! Coverage is the fraction of a pixel's area that lies inside a rectangle
//! with circular corner cutouts. It is estimated by testing a fixed 4×4 grid
//! of sample points per pixel — deterministic, no randomness — and drives the
//! alpha channel of the masked overlay: 1.0 inside the body, 0.0 outside,
//! fractional along the rounded edge.

use crate::imaging::calculations::clamp_radius;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Samples per pixel axis. 16 tests per pixel total.
const SAMPLES: u32 = 4;

/// Fraction of the pixel at `(x, y)` covered by a `width`×`height` rectangle
/// with corners rounded by `radius`, in `[0, 1]`.
///
/// Sample points sit at the centers of an evenly spaced 4×4 subgrid, so a
/// pixel fully inside the shape scores 1.0 and one fully outside scores 0.0.
/// Coordinates may lie outside the region; such pixels score 0.0.
pub fn coverage(x: i64, y: i64, width: u32, height: u32, radius: u32) -> f64 {
    let step = 1.0 / SAMPLES as f64;
    let mut hit = 0u32;

    for sy in 0..SAMPLES {
        for sx in 0..SAMPLES {
            let px = x as f64 + (sx as f64 + 0.5) * step;
            let py = y as f64 + (sy as f64 + 0.5) * step;
            if inside_rounded_rect(px, py, width, height, radius) {
                hit += 1;
            }
        }
    }

    hit as f64 / (SAMPLES * SAMPLES) as f64
}

/// Point-in-shape test for the rounded rectangle `[0,w]×[0,h]`, radius `r`.
///
/// A point in one of the four corner quadrants (past both axis lines through
/// the inset corner center) is inside iff it lies within radius of that
/// center. Everywhere else the straight bounding box decides. With `r == 0`
/// the quadrant arms are empty and this degenerates to the plain box test.
fn inside_rounded_rect(px: f64, py: f64, width: u32, height: u32, radius: u32) -> bool {
    let w = width as f64;
    let h = height as f64;
    let r = radius as f64;

    let left = r;
    let right = w - r;
    let top = r;
    let bottom = h - r;

    if px < left && py < top {
        return dist(px, py, left, top) <= r;
    }
    if px > right && py < top {
        return dist(px, py, right, top) <= r;
    }
    if px < left && py > bottom {
        return dist(px, py, left, bottom) <= r;
    }
    if px > right && py > bottom {
        return dist(px, py, right, bottom) <= r;
    }

    (0.0..=w).contains(&px) && (0.0..=h).contains(&py)
}

fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// Apply the rounded-corner mask to an image.
///
/// Returns a new RGBA buffer of the same dimensions: RGB channels copied
/// from the source, alpha set to `round(coverage * 255)`. Pixels with zero
/// coverage stay fully transparent and are skipped entirely. The radius is
/// capped at half the smaller dimension before masking.
pub fn round_corners(img: &DynamicImage, radius: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let radius = clamp_radius(radius, w, h);
    let src = img.to_rgba8();
    let mut dst = RgbaImage::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let alpha = coverage(x as i64, y as i64, w, h, radius);
            if alpha == 0.0 {
                continue;
            }
            let Rgba([r, g, b, _]) = *src.get_pixel(x, y);
            dst.put_pixel(x, y, Rgba([r, g, b, (alpha * 255.0).round() as u8]));
        }
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // coverage tests
    // =========================================================================

    #[test]
    fn zero_radius_covers_every_interior_pixel() {
        for (x, y) in [(0, 0), (5, 5), (99, 49), (50, 0), (0, 49)] {
            assert_eq!(coverage(x, y, 100, 50, 0), 1.0, "pixel ({x},{y})");
        }
    }

    #[test]
    fn pixels_outside_the_region_score_zero() {
        for (x, y) in [(-1, 10), (10, -1), (100, 10), (10, 50), (-5, -5), (200, 200)] {
            assert_eq!(coverage(x, y, 100, 50, 0), 0.0, "pixel ({x},{y})");
        }
    }

    #[test]
    fn pixels_outside_score_zero_with_radius_too() {
        for (x, y) in [(-1, -1), (100, 50), (-10, 25)] {
            assert_eq!(coverage(x, y, 100, 50, 12), 0.0, "pixel ({x},{y})");
        }
    }

    #[test]
    fn corner_pixel_is_cut_by_the_radius() {
        // With a generous radius the extreme corner pixel is fully outside
        // the quarter circle.
        assert_eq!(coverage(0, 0, 100, 100, 30), 0.0);
        // The body center is untouched.
        assert_eq!(coverage(50, 50, 100, 100, 30), 1.0);
    }

    #[test]
    fn arc_edge_pixels_are_fractional() {
        // Walk the top-left arc of a 100x100 region with radius 20 and
        // require at least one genuinely partial pixel.
        let mut partial = 0;
        for y in 0..20 {
            for x in 0..20 {
                let c = coverage(x, y, 100, 100, 20);
                if c > 0.0 && c < 1.0 {
                    partial += 1;
                }
            }
        }
        assert!(partial > 0, "expected anti-aliased pixels along the arc");
    }

    #[test]
    fn coverage_is_symmetric_under_quarter_turns() {
        // For a square region the mask is invariant under 90° rotation:
        // pixel (x, y) maps to (n-1-y, x).
        let n: u32 = 64;
        let r = 10;
        for y in 0..n as i64 {
            for x in 0..n as i64 {
                let c = coverage(x, y, n, n, r);
                let rotated = coverage(n as i64 - 1 - y, x, n, n, r);
                assert!(
                    (c - rotated).abs() < 1e-12,
                    "asymmetry at ({x},{y}): {c} vs {rotated}"
                );
            }
        }
    }

    #[test]
    fn coverage_values_stay_in_unit_interval() {
        for y in -2..66 {
            for x in -2..66 {
                let c = coverage(x, y, 64, 64, 16);
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    // =========================================================================
    // round_corners tests
    // =========================================================================

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        let buf = RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        DynamicImage::ImageRgba8(buf)
    }

    #[test]
    fn mask_preserves_rgb_and_sets_alpha() {
        let img = solid(40, 30, [200, 100, 50]);
        let masked = round_corners(&img, 8);

        assert_eq!(masked.dimensions(), (40, 30));

        // Center: fully opaque, color untouched
        assert_eq!(*masked.get_pixel(20, 15), Rgba([200, 100, 50, 255]));

        // Extreme corner: fully transparent (and skipped, so RGB is zeroed)
        assert_eq!(*masked.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn zero_radius_mask_is_fully_opaque() {
        let img = solid(20, 20, [1, 2, 3]);
        let masked = round_corners(&img, 0);
        for p in masked.pixels() {
            assert_eq!(*p, Rgba([1, 2, 3, 255]));
        }
    }

    #[test]
    fn oversized_radius_is_clamped_not_garbled() {
        // radius far beyond half the smaller dimension: clamp to 10,
        // yielding a capsule, not an empty or inverted mask.
        let img = solid(60, 20, [9, 9, 9]);
        let masked = round_corners(&img, 1000);

        assert_eq!(*masked.get_pixel(30, 10), Rgba([9, 9, 9, 255]));
        assert_eq!(masked.get_pixel(0, 0).0[3], 0);
        // Mid-left edge sits on the capsule body
        assert_eq!(masked.get_pixel(0, 10).0[3], 255);
    }

    #[test]
    fn corner_alpha_is_antialiased() {
        let img = solid(100, 100, [255, 255, 255]);
        let masked = round_corners(&img, 20);

        let mut partial = 0;
        for y in 0..20 {
            for x in 0..20 {
                let a = masked.get_pixel(x, y).0[3];
                if a > 0 && a < 255 {
                    partial += 1;
                }
            }
        }
        assert!(partial > 0, "expected partial alpha along the corner arc");
    }
}
