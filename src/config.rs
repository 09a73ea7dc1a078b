//! Framing configuration.
//!
//! Handles the knobs that shape every framed image: canvas size, background
//! blur strength, overlay corner radius, and overlay margin. All values have
//! built-in defaults; an optional `bbframe.toml` in the working directory (or
//! a file named with `--config`) overrides them, and individual CLI flags
//! override both.
//!
//! ## Config File
//!
//! ```toml
//! # All keys are optional — defaults shown below
//! width = 1920    # canvas width in pixels
//! height = 1080   # canvas height in pixels
//! blur = 20.0     # background blur strength
//! radius = 20     # overlay corner radius in pixels
//! margin = 20     # overlay inset from the canvas edge in pixels
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "bbframe.toml";

/// Parameters shaping a framed image.
///
/// Serialized form is the flat TOML table shown in the [module docs](self).
/// Unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background blur strength (Gaussian sigma). Zero disables the blur.
    pub blur: f32,
    /// Overlay corner radius in pixels.
    pub radius: u32,
    /// Overlay inset from the canvas edge, applied on all four sides.
    pub margin: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            blur: 20.0,
            radius: 20,
            margin: 20,
        }
    }
}

impl FrameConfig {
    /// Check invariants the pipeline relies on.
    ///
    /// A degenerate canvas has no meaningful fill target; a negative or
    /// non-finite blur has no meaning at all. An oversized margin is *not*
    /// rejected here — the compositor treats a collapsed overlay box as
    /// "background only".
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            return Err(ConfigError::Validation(format!(
                "blur must be a non-negative number, got {}",
                self.blur
            )));
        }
        Ok(())
    }
}

/// Load framing defaults from a config file.
///
/// With an explicit path, the file must exist and parse. Without one,
/// `bbframe.toml` in the working directory is used when present, and the
/// built-in defaults otherwise. Validation happens later, after CLI flags
/// have been merged on top.
pub fn load_config(explicit: Option<&Path>) -> Result<FrameConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.exists() {
                return Ok(FrameConfig::default());
            }
            default
        }
    };

    let raw = fs::read_to_string(&path)?;
    let config = toml::from_str(&raw)?;
    Ok(config)
}
