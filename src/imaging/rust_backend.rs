//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Encode | format from extension via `ImageFormat::from_path` |
//! | Fill resize | `DynamicImage::resize_to_fill` with `Lanczos3` |
//! | Fit resize | `DynamicImage::resize` with `Lanczos3` |
//! | Blur | `image::imageops::fast_blur` (3-pass box approximation) |

use super::backend::{BackendError, ImageBackend};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        let reader = ImageReader::open(path).map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        reader.decode().map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn encode(&self, img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        let format = ImageFormat::from_path(path).map_err(|e| BackendError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // JPEG carries no alpha channel; the composite is fully opaque
        // anyway, so flattening to RGB loses nothing.
        let flattened;
        let img = if format == ImageFormat::Jpeg {
            flattened = DynamicImage::ImageRgb8(img.to_rgb8());
            &flattened
        } else {
            img
        };

        img.save(path).map_err(|e| BackendError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn fill_resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        img.resize_to_fill(width, height, FilterType::Lanczos3)
    }

    fn fit_resize(&self, img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
        img.resize(max_width, max_height, FilterType::Lanczos3)
    }

    fn blur(&self, img: &DynamicImage, sigma: f32) -> DynamicImage {
        if sigma <= 0.0 {
            return img.clone();
        }
        DynamicImage::ImageRgba8(image::imageops::fast_blur(&img.to_rgba8(), sigma))
    }
}
