//! Image processing backend trait and shared error type.
//!
//! The [`ImageBackend`] trait defines the five primitives the pipeline
//! consumes: decode, encode, fill-resize, fit-resize, and blur. The
//! production implementation is [`RustBackend`](super::rust_backend::RustBackend);
//! tests swap in a recording mock so runner logic can be exercised without
//! pixel work.

use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

impl BackendError {
    /// The file the failed operation was reading or writing.
    pub fn path(&self) -> &Path {
        match self {
            BackendError::Decode { path, .. } | BackendError::Encode { path, .. } => path,
        }
    }
}

/// Trait for image processing backends.
///
/// Decode and encode touch the filesystem and can fail; the three pixel
/// transforms are total functions on already-decoded images.
pub trait ImageBackend: Sync {
    /// Read and decode an image file.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode an image to a file, with the format chosen by extension.
    fn encode(&self, img: &DynamicImage, path: &Path) -> Result<(), BackendError>;

    /// Scale-and-crop to exactly `width`×`height`, anchored at center.
    fn fill_resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Aspect-preserving scale to the largest size within the bounds.
    fn fit_resize(&self, img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage;

    /// Gaussian-style blur. `sigma <= 0` returns the image unchanged.
    fn blur(&self, img: &DynamicImage, sigma: f32) -> DynamicImage;
}
