use bbframe::imaging::RustBackend;
use bbframe::job::JobParams;
use bbframe::{batch, config, job, output};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "bbframe")]
#[command(about = "Frame photos on a blurred, canvas-filling backdrop of themselves")]
#[command(long_about = "\
Frame photos on a blurred, canvas-filling backdrop of themselves

The source photo is scaled to fill the canvas and blurred into a background;
a sharp copy is fitted inside the margin, given anti-aliased rounded corners,
and composited on top, centered.

Modes (exactly one of --input / --input-dir):

  bbframe --input photo.jpg
      Frame one photo. The result lands next to the input as bbf_photo.jpg
      unless --output says otherwise.

  bbframe --input-dir photos/
      Frame every file under photos/, mirroring the directory structure into
      --output-dir (default: a sibling directory named bbf_photos). If the
      output directory cannot be created, out/ beside the input is used
      instead. Failed files are reported and skipped; the rest are framed.

Framing defaults can also come from bbframe.toml in the working directory
(or a file named with --config); flags override the file.

Exit codes: 0 success, 1 usage or setup error, 2 batch completed with
failures.")]
#[command(version = version_string())]
struct Cli {
    /// Path to the input image (single-file mode)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to the output image (default: bbf_<name> next to the input)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to the input directory (batch mode)
    #[arg(long, value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Path to the output directory (default: sibling bbf_<name> directory)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Blur strength for the background (default: 20)
    #[arg(long)]
    blur: Option<f32>,

    /// Canvas width in pixels (default: 1920)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (default: 1080)
    #[arg(long)]
    height: Option<u32>,

    /// Overlay corner radius in pixels (default: 20)
    #[arg(long)]
    radius: Option<u32>,

    /// Overlay margin from the canvas edge in pixels (default: 20)
    #[arg(long)]
    margin: Option<u32>,

    /// Framing defaults file (default: ./bbframe.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

/// Validate flags, resolve configuration, and dispatch.
///
/// Returns the process exit code: 0 for success, 2 when a batch completed
/// with failures. Usage and setup problems come back as errors and exit 1.
fn run(cli: Cli) -> Result<u8, Box<dyn std::error::Error>> {
    if cli.input.is_some() && cli.input_dir.is_some() {
        return Err("You may only use --input OR --input-dir".into());
    }
    if cli.input.is_none() && cli.input_dir.is_none() {
        return Err("You must use --input OR --input-dir".into());
    }

    let mut frame = config::load_config(cli.config.as_deref())?;
    if let Some(blur) = cli.blur {
        frame.blur = blur;
    }
    if let Some(width) = cli.width {
        frame.width = width;
    }
    if let Some(height) = cli.height {
        frame.height = height;
    }
    if let Some(radius) = cli.radius {
        frame.radius = radius;
    }
    if let Some(margin) = cli.margin {
        frame.margin = margin;
    }
    frame.validate()?;

    let backend = RustBackend::new();

    if let Some(input) = cli.input {
        if !input.is_file() {
            return Err(format!("Not a file / does not exist: {}", input.display()).into());
        }
        let params = JobParams {
            input,
            output: cli.output,
            frame,
        };
        output::print_job(&params);
        return Ok(match job::run_job(&backend, &params) {
            Ok(_) => 0,
            Err(err) => {
                output::print_job_failure(&params.input, &err);
                1
            }
        });
    }

    // Checked above: input_dir is present when input is not.
    let Some(input_dir) = cli.input_dir else {
        return Err("You must use --input OR --input-dir".into());
    };
    if !input_dir.is_dir() {
        return Err(format!("Not a directory / does not exist: {}", input_dir.display()).into());
    }

    let summary = batch::run_batch(&backend, &input_dir, cli.output_dir.as_deref(), &frame)?;
    output::print_batch_summary(&summary);
    Ok(if summary.is_clean() { 0 } else { 2 })
}
