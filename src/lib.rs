//! Boxmerge: merge overlapping object detection boxes.
//!
//! Detectors often report the same object several times with slightly
//! shifted boxes, and two passes over the same image report it twice.
//! Boxmerge collapses same-category boxes whose Intersection-over-Union
//! reaches a threshold into their enclosing box.
//!
//! # Modules
//!
//! - [`frame`]: Frame model (boxes, categories, images) and JSON I/O
//! - [`merge`]: Partitioning, reduction and the `clean_frame`/`merge_frames` entry points
//! - [`error`]: Error types for boxmerge operations
//!
//! # Example
//!
//! ```
//! use boxmerge::frame::{BBox, Category, Frame};
//! use boxmerge::merge::clean_frame;
//!
//! let mut frame = Frame::default().with_boxes([
//!     BBox::new(1, 1, 10, 10, Category::Face),
//!     BBox::new(5, 5, 15, 15, Category::Face),
//! ]);
//! clean_frame(&mut frame, 0.1).unwrap();
//! assert_eq!(frame.boxes, vec![BBox::new(1, 1, 15, 15, Category::Face)]);
//! ```

pub mod error;
pub mod frame;
pub mod merge;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

pub use error::BoxMergeError;
use frame::{io_json, Frame};
use merge::MergeReport;

/// The boxmerge CLI application.
#[derive(Parser)]
#[command(name = "boxmerge")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Merge overlapping boxes within a single frame.
    Clean(CleanArgs),
    /// Fuse the boxes of two frames of the same image.
    Merge(MergeArgs),
}

/// Arguments for the clean subcommand.
#[derive(clap::Args)]
struct CleanArgs {
    /// Frame JSON file to clean.
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the merge subcommand.
#[derive(clap::Args)]
struct MergeArgs {
    /// Frame JSON file whose image is kept.
    first: PathBuf,

    /// Frame JSON file of the same image.
    second: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

/// Options shared by clean and merge.
#[derive(clap::Args)]
struct OutputArgs {
    /// IoU at or above which two boxes are merged, in (0, 1].
    #[arg(long, short, env = "BOXMERGE_THRESHOLD", default_value_t = 0.5, allow_negative_numbers = true)]
    threshold: f64,

    /// Write the resulting frame to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Format of the merge report on stderr ('text', 'json', or 'none').
    #[arg(long, default_value = "text")]
    report: String,
}

/// Run the boxmerge CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), BoxMergeError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Clean(args)) => run_clean(args),
        Some(Commands::Merge(args)) => run_merge(args),
        None => {
            println!("boxmerge {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Merge overlapping object detection boxes.");
            println!();
            println!("Run 'boxmerge --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the clean subcommand.
fn run_clean(args: CleanArgs) -> Result<(), BoxMergeError> {
    // Reject a bad report format before doing any work
    check_report_format(&args.output.report)?;

    let mut frame = io_json::read_frame_json(&args.input)?;
    info!(
        "cleaning {} box(es) from {}",
        frame.boxes.len(),
        args.input.display()
    );

    let report = merge::clean_frame(&mut frame, args.output.threshold)?;
    emit(&frame, &report, &args.output)
}

/// Execute the merge subcommand.
fn run_merge(args: MergeArgs) -> Result<(), BoxMergeError> {
    check_report_format(&args.output.report)?;

    let first = io_json::read_frame_json(&args.first)?;
    let second = io_json::read_frame_json(&args.second)?;
    info!(
        "merging {} box(es) from {} with {} box(es) from {}",
        first.boxes.len(),
        args.first.display(),
        second.boxes.len(),
        args.second.display()
    );

    let (merged, report) = merge::merge_frames(&first, &second, args.output.threshold)?;
    emit(&merged, &report, &args.output)
}

fn check_report_format(format: &str) -> Result<(), BoxMergeError> {
    match format {
        "text" | "json" | "none" => Ok(()),
        other => Err(BoxMergeError::UnsupportedFormat(format!(
            "'{}' (supported: text, json, none)",
            other
        ))),
    }
}

/// Writes the resulting frame and the report.
///
/// The frame goes to the output file or stdout; the report always goes to
/// stderr so stdout stays valid JSON.
fn emit(frame: &Frame, report: &MergeReport, args: &OutputArgs) -> Result<(), BoxMergeError> {
    match &args.output {
        Some(path) => {
            io_json::write_frame_json(path, frame)?;
            info!("wrote {} box(es) to {}", frame.boxes.len(), path.display());
        }
        None => {
            let json = io_json::to_json_string(frame).map_err(|source| {
                BoxMergeError::FrameJsonWrite {
                    path: PathBuf::from("<stdout>"),
                    source,
                }
            })?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    match args.report.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(report).map_err(BoxMergeError::ReportJson)?;
            eprintln!("{}", json);
        }
        "none" => {}
        _ => eprint!("{}", report),
    }

    Ok(())
}
