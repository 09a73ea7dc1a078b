//! # bbframe
//!
//! Frames a photo on a blurred, canvas-filling backdrop of itself: the source
//! is scaled to fill a fixed canvas and blurred, then a sharp copy of the same
//! photo is fitted inside a margin, given anti-aliased rounded corners, and
//! composited on top, centered.
//!
//! The tool runs in two modes:
//!
//! ```text
//! Single   bbframe --input photo.jpg       →  bbf_photo.jpg
//! Batch    bbframe --input-dir photos/     →  bbf_photos/ (mirrored tree)
//! ```
//!
//! # Pipeline
//!
//! Every image goes through the same five steps:
//!
//! 1. **Fill** — scale-and-crop the source to exactly canvas size (Lanczos3,
//!    centered crop).
//! 2. **Blur** — soften the filled copy into a background.
//! 3. **Fit** — scale a second copy to sit inside the canvas minus the margin,
//!    preserving aspect ratio.
//! 4. **Round** — mask the fitted copy with a supersampled rounded-rectangle
//!    coverage mask, writing coverage into the alpha channel.
//! 5. **Composite** — alpha-blend the rounded overlay onto the background,
//!    centered.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Framing parameters, defaults, and optional `bbframe.toml` overrides |
//! | [`imaging`] | The pixel work: coverage mask, dimension math, backend trait, compositor |
//! | [`job`] | Runs one image end to end: resolve output path, decode, compose, encode |
//! | [`batch`] | Walks an input tree, mirrors it into an output tree, aggregates failures |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Supersampled Corner Anti-Aliasing
//!
//! Rounded corners are masked by estimating per-pixel coverage with a fixed
//! 4×4 grid of sample points rather than computing exact circular-segment
//! areas. Sixteen point-in-shape tests per pixel are cheap and visually
//! indistinguishable from exact coverage at photo resolutions. The grid size
//! is a compile-time constant, not a tunable precision guarantee.
//!
//! ## Mirrored Output Trees by Relativization
//!
//! Batch mode derives each output path by taking the entry's path relative to
//! the input root and joining it onto the output root. Textual substitution of
//! the input-directory string would break whenever the output path happens to
//! contain the input path as a substring; relativization cannot.
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work uses the `image` crate (Lanczos3 resampling, box-approximated
//! Gaussian blur, alpha compositing). No ImageMagick, no FFmpeg, no system
//! dependencies: the binary is fully self-contained.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod job;
pub mod output;
