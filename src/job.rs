//! Single-image job runner.
//!
//! Takes one [`JobParams`], resolves where the result should land, makes sure
//! that directory exists, and drives decode → compose → encode. Each of the
//! three fallible stages surfaces as its own [`JobError`] variant so batch
//! reporting can say *what* failed, not just that something did.

use crate::config::FrameConfig;
use crate::imaging::backend::{BackendError, ImageBackend};
use crate::imaging::compose;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix for derived output names: `photo.jpg` → `bbf_photo.jpg`.
pub const OUTPUT_PREFIX: &str = "bbf_";

/// Everything one framing job needs.
///
/// Batch mode clones a base value per file and overrides the two paths, so
/// no state leaks between items.
#[derive(Debug, Clone)]
pub struct JobParams {
    /// Source image file.
    pub input: PathBuf,
    /// Destination file. `None` derives `bbf_<name>` next to the input.
    pub output: Option<PathBuf>,
    /// Framing parameters shared by every job in a run.
    pub frame: FrameConfig,
}

#[derive(Error, Debug)]
pub enum JobError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Default destination for an input: the same directory, file name prefixed
/// with [`OUTPUT_PREFIX`].
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(OUTPUT_PREFIX);
    if let Some(file_name) = input.file_name() {
        name.push(file_name);
    }
    input.with_file_name(name)
}

/// The destination a job will write to, derived when not set explicitly.
pub fn resolved_output(params: &JobParams) -> PathBuf {
    params
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&params.input))
}

/// Frame one image: ensure the output directory exists, decode, compose,
/// encode. Returns the path written on success.
pub fn run_job(backend: &impl ImageBackend, params: &JobParams) -> Result<PathBuf, JobError> {
    let output = resolved_output(params);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| JobError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let src = backend.decode(&params.input)?;
    let framed = compose(backend, &src, &params.frame);
    backend.encode(&framed, &output)?;

    Ok(output)
}
