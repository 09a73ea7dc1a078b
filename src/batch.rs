//! Batch runner: frame every file under a directory tree.
//!
//! Resolves the input/output directory pair once, walks the input tree, and
//! runs the single-image job for every regular file, mirroring the directory
//! structure into the output root. Per-file failures are reported and
//! counted but never stop the walk; only setup failures (unresolvable
//! paths, an uncreatable output directory even after falling back) abort
//! the run.
//!
//! ## Output Directory Resolution
//!
//! ```text
//! --output-dir given      → use it
//! --output-dir omitted    → sibling of the input dir: photos/ → bbf_photos/
//! creation fails          → fall back to out/ next to the input dir
//! fallback fails          → fatal
//! ```

use crate::config::FrameConfig;
use crate::imaging::backend::ImageBackend;
use crate::job::{self, JobParams, OUTPUT_PREFIX};
use crate::output;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to resolve absolute path for {path}: {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create output directory {path} and fallback {fallback}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        fallback: PathBuf,
        source: std::io::Error,
    },
}

/// Aggregate outcome of a batch run, updated in traversal order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files framed successfully.
    pub processed: usize,
    /// Failed items plus traversal errors.
    pub failed: usize,
}

impl BatchSummary {
    /// True when every item and every traversal step succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Default output directory: a sibling of the input named `bbf_<name>`.
pub fn sibling_output_dir(abs_input: &Path) -> PathBuf {
    let mut name = OsString::from(OUTPUT_PREFIX);
    if let Some(base) = abs_input.file_name() {
        name.push(base);
    }
    abs_input.with_file_name(name)
}

/// Frame every regular file under `input_dir` into a mirrored tree.
///
/// `output_dir` defaults to [`sibling_output_dir`]. Each file's destination
/// is its path relative to the input root joined onto the output root, so
/// nested structure is preserved.
pub fn run_batch(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: Option<&Path>,
    frame: &FrameConfig,
) -> Result<BatchSummary, BatchError> {
    let abs_input = std::path::absolute(input_dir).map_err(|source| BatchError::Resolve {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let abs_output = match output_dir {
        Some(dir) => std::path::absolute(dir).map_err(|source| BatchError::Resolve {
            path: dir.to_path_buf(),
            source,
        })?,
        None => sibling_output_dir(&abs_input),
    };
    let abs_output = prepare_output_dir(&abs_input, abs_output)?;

    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(&abs_input).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                output::print_walk_failure(&err);
                summary.failed += 1;
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&abs_input) else {
            // walkdir roots every entry at abs_input; anything else would
            // mean the walker handed us a foreign path.
            summary.failed += 1;
            continue;
        };

        let item = JobParams {
            input: entry.path().to_path_buf(),
            output: Some(abs_output.join(relative)),
            frame: *frame,
        };
        output::print_job(&item);
        match job::run_job(backend, &item) {
            Ok(_) => summary.processed += 1,
            Err(err) => {
                output::print_job_failure(&item.input, &err);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Create the resolved output directory, falling back to `out/` beside the
/// input directory when that fails. Creation is idempotent.
fn prepare_output_dir(abs_input: &Path, abs_output: PathBuf) -> Result<PathBuf, BatchError> {
    match fs::create_dir_all(&abs_output) {
        Ok(()) => Ok(abs_output),
        Err(_) => {
            let fallback = abs_input.parent().unwrap_or(abs_input).join("out");
            output::print_relocation(&abs_output, &fallback);
            match fs::create_dir_all(&fallback) {
                Ok(()) => Ok(fallback),
                Err(source) => Err(BatchError::CreateOutputDir {
                    path: abs_output,
                    fallback,
                    source,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn encoded_paths(backend: &MockBackend) -> Vec<String> {
        backend
            .get_operations()
            .into_iter()
            .filter_map(|op| match op {
                RecordedOp::Encode(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    // =========================================================================
    // Output directory derivation
    // =========================================================================

    #[test]
    fn sibling_dir_gets_the_prefix() {
        assert_eq!(
            sibling_output_dir(Path::new("/data/photos")),
            PathBuf::from("/data/bbf_photos")
        );
    }

    // =========================================================================
    // run_batch
    // =========================================================================

    #[test]
    fn batch_mirrors_nested_structure() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        touch(&input.join("a.jpg"));
        touch(&input.join("b.jpg"));
        touch(&input.join("trip/c.jpg"));

        let out = tmp.path().join("framed");
        let backend = MockBackend::with_decode_dims(vec![(100, 80); 3]);
        let summary = run_batch(
            &backend,
            &input,
            Some(&out),
            &FrameConfig::default(),
        )
        .unwrap();

        assert_eq!(summary, BatchSummary { processed: 3, failed: 0 });

        let encoded = encoded_paths(&backend);
        assert_eq!(encoded.len(), 3);
        assert!(encoded[0].ends_with("framed/a.jpg"), "{encoded:?}");
        assert!(encoded[1].ends_with("framed/b.jpg"), "{encoded:?}");
        assert!(encoded[2].ends_with("framed/trip/c.jpg"), "{encoded:?}");
    }

    #[test]
    fn batch_derives_sibling_output_dir() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        touch(&input.join("a.jpg"));

        let backend = MockBackend::with_decode_dims(vec![(100, 80)]);
        let summary = run_batch(&backend, &input, None, &FrameConfig::default()).unwrap();

        assert!(summary.is_clean());
        // The derived directory exists even though the mock writes nothing.
        assert!(tmp.path().join("bbf_photos").is_dir());

        let encoded = encoded_paths(&backend);
        assert!(encoded[0].ends_with("bbf_photos/a.jpg"), "{encoded:?}");
    }

    #[test]
    fn one_bad_item_does_not_stop_the_walk() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        touch(&input.join("a.jpg"));
        touch(&input.join("b.jpg"));
        touch(&input.join("c.jpg"));

        // Two queued images for three files: one decode fails.
        let backend = MockBackend::with_decode_dims(vec![(100, 80), (100, 80)]);
        let summary = run_batch(
            &backend,
            &input,
            Some(&tmp.path().join("framed")),
            &FrameConfig::default(),
        )
        .unwrap();

        assert_eq!(summary, BatchSummary { processed: 2, failed: 1 });
        assert!(!summary.is_clean());
    }

    #[test]
    fn uncreatable_output_dir_falls_back_beside_the_input() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        touch(&input.join("a.jpg"));

        // A file where the output directory must go defeats create_dir_all
        // regardless of privileges.
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let backend = MockBackend::with_decode_dims(vec![(100, 80)]);
        let summary = run_batch(
            &backend,
            &input,
            Some(&blocker.join("framed")),
            &FrameConfig::default(),
        )
        .unwrap();

        assert!(summary.is_clean());
        assert!(tmp.path().join("out").is_dir());
        let encoded = encoded_paths(&backend);
        assert!(encoded[0].ends_with("out/a.jpg"), "{encoded:?}");
    }

    #[test]
    fn exhausted_fallback_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        touch(&input.join("a.jpg"));

        // Block both the requested output dir and the fallback location.
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        fs::write(tmp.path().join("out"), b"").unwrap();

        let backend = MockBackend::new();
        let err = run_batch(
            &backend,
            &input,
            Some(&blocker.join("framed")),
            &FrameConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, BatchError::CreateOutputDir { .. }));
        // Nothing was processed.
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn empty_input_tree_is_a_clean_run() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        fs::create_dir_all(&input).unwrap();

        let backend = MockBackend::new();
        let summary = run_batch(
            &backend,
            &input,
            Some(&tmp.path().join("framed")),
            &FrameConfig::default(),
        )
        .unwrap();

        assert_eq!(summary, BatchSummary::default());
        assert!(summary.is_clean());
    }
}
