//! Pure calculation functions for overlay geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Compute the box the overlay must fit into: the canvas inset by the margin
/// on all four sides.
///
/// Returns `None` when the margin swallows the canvas on either axis — the
/// caller renders the background only.
///
/// # Examples
/// ```
/// # use bbframe::imaging::fit_box;
/// assert_eq!(fit_box((1920, 1080), 20), Some((1880, 1040)));
/// assert_eq!(fit_box((100, 100), 50), None);
/// ```
pub fn fit_box(canvas: (u32, u32), margin: u32) -> Option<(u32, u32)> {
    let (w, h) = canvas;
    let inset = margin.checked_mul(2)?;
    if inset >= w || inset >= h {
        return None;
    }
    Some((w - inset, h - inset))
}

/// Calculate aspect-preserving fit dimensions within a bounding box.
///
/// The result never exceeds the box and matches it exactly on the binding
/// axis; the free axis is rounded. Scales up as well as down.
pub fn fit_dimensions(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    let w_ratio = max_w as f64 / src_w as f64;
    let h_ratio = max_h as f64 / src_h as f64;

    if w_ratio <= h_ratio {
        // Width binds: height scales by the same ratio
        let h = (src_h as f64 * w_ratio).round() as u32;
        (max_w, h.clamp(1, max_h))
    } else {
        let w = (src_w as f64 * h_ratio).round() as u32;
        (w.clamp(1, max_w), max_h)
    }
}

/// Offset that centers the overlay on the canvas, truncating toward zero
/// when the leftover space is odd.
pub fn centered_offset(canvas: (u32, u32), overlay: (u32, u32)) -> (i64, i64) {
    (
        (canvas.0 as i64 - overlay.0 as i64) / 2,
        (canvas.1 as i64 - overlay.1 as i64) / 2,
    )
}

/// Cap a corner radius at half the smaller region dimension.
///
/// Beyond that the inset corner centers cross over each other and the
/// quadrant tests stop describing a shape.
pub fn clamp_radius(radius: u32, width: u32, height: u32) -> u32 {
    radius.min(width.min(height) / 2)
}
