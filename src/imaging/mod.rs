//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode / encode** | `image` crate (format from extension) |
//! | **Fill / fit resize** | Lanczos3 via `resize_to_fill` / `resize` |
//! | **Background blur** | `image::imageops::fast_blur` |
//! | **Rounded corners** | supersampled coverage mask ([`mask`]) |
//! | **Composite** | `image::imageops::overlay` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Mask**: Rounded-rectangle coverage and mask application
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Compose**: The compositor combining all of the above

pub mod backend;
mod calculations;
pub mod compose;
pub mod mask;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{centered_offset, clamp_radius, fit_box, fit_dimensions};
pub use compose::compose;
pub use mask::{coverage, round_corners};
pub use rust_backend::RustBackend;
