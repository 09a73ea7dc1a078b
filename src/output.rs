//! CLI output formatting.
//!
//! Each event has a `format_*` function (pure, returns strings — unit
//! testable) and a `print_*` wrapper that writes to stdout or stderr.
//! Progress goes to stdout; failures go to stderr so batch output stays
//! pipeable.
//!
//! ## Format
//!
//! ```text
//! photos/dawn.jpg → bbf_photos/dawn.jpg
//!     Canvas: 1920x1080  Blur: 20  Radius: 20px  Margin: 20px
//! photos/broken.jpg → bbf_photos/broken.jpg
//!     Canvas: 1920x1080  Blur: 20  Radius: 20px  Margin: 20px
//! Failed photos/broken.jpg: failed to decode photos/broken.jpg: ...
//! Framed 2 photos, 1 failed
//! ```

use crate::job::{self, JobError, JobParams};
use crate::batch::BatchSummary;
use std::path::Path;

/// Two-line job announcement: where the image goes, then the framing
/// parameters indented beneath.
pub fn format_job(params: &JobParams) -> Vec<String> {
    let output = job::resolved_output(params);
    let f = &params.frame;
    vec![
        format!("{} → {}", params.input.display(), output.display()),
        format!(
            "    Canvas: {}x{}  Blur: {}  Radius: {}px  Margin: {}px",
            f.width, f.height, f.blur, f.radius, f.margin
        ),
    ]
}

/// One line naming the failed file and the stage that failed.
pub fn format_job_failure(input: &Path, err: &JobError) -> String {
    format!("Failed {}: {}", input.display(), err)
}

/// One line for a traversal error; the walker keeps going.
pub fn format_walk_failure(err: &walkdir::Error) -> String {
    format!("Error while walking the input tree: {err}")
}

/// Notice that the requested output directory was abandoned for the
/// fallback location.
pub fn format_relocation(requested: &Path, fallback: &Path) -> String {
    format!(
        "Could not create {}, relocating output to {}",
        requested.display(),
        fallback.display()
    )
}

/// Closing line of a batch run.
pub fn format_batch_summary(summary: &BatchSummary) -> String {
    if summary.failed == 0 {
        format!("Framed {} photos", summary.processed)
    } else {
        format!(
            "Framed {} photos, {} failed",
            summary.processed, summary.failed
        )
    }
}

pub fn print_job(params: &JobParams) {
    for line in format_job(params) {
        println!("{line}");
    }
}

pub fn print_job_failure(input: &Path, err: &JobError) {
    eprintln!("{}", format_job_failure(input, err));
}

pub fn print_walk_failure(err: &walkdir::Error) {
    eprintln!("{}", format_walk_failure(err));
}

pub fn print_relocation(requested: &Path, fallback: &Path) {
    eprintln!("{}", format_relocation(requested, fallback));
}

pub fn print_batch_summary(summary: &BatchSummary) {
    println!("{}", format_batch_summary(summary));
}
