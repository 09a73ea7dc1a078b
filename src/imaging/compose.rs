//! The compositor: background, overlay, and the final blend.
//!
//! Combines the dimension math in [`calculations`](super::calculations), the
//! coverage mask in [`mask`](super::mask), and the backend's resize/blur
//! primitives into one canvas-sized image. Decoding and encoding stay with
//! the caller — composition itself cannot fail.

use crate::config::FrameConfig;
use crate::imaging::backend::ImageBackend;
use crate::imaging::calculations::{centered_offset, fit_box};
use crate::imaging::mask::round_corners;
use image::{imageops, DynamicImage};

/// Frame a decoded source image onto a `frame.width`×`frame.height` canvas.
///
/// The source fills the canvas (centered crop) and is blurred into the
/// background; a second, sharp copy is fitted inside the margin, given
/// rounded corners, and alpha-blended on top, centered. When the margin
/// leaves no room for an overlay the blurred background is returned alone.
pub fn compose(backend: &impl ImageBackend, src: &DynamicImage, frame: &FrameConfig) -> DynamicImage {
    let background = backend.fill_resize(src, frame.width, frame.height);
    let background = backend.blur(&background, frame.blur);
    let mut canvas = background.to_rgba8();

    let Some((max_w, max_h)) = fit_box((frame.width, frame.height), frame.margin) else {
        return DynamicImage::ImageRgba8(canvas);
    };

    let overlay = backend.fit_resize(src, max_w, max_h);
    let rounded = round_corners(&overlay, frame.radius);

    let (x, y) = centered_offset((frame.width, frame.height), rounded.dimensions());
    imageops::overlay(&mut canvas, &rounded, x, y);

    DynamicImage::ImageRgba8(canvas)
}
