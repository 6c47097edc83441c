//! Batch CLI: trim every WAV file in a directory to its dominant utterance
//!
//! Usage:
//!   utterance-trim [--frame-size N] [--sample-rate HZ] [--jobs N] [--json] <input_dir> <output_dir>

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use utterance_trim::batch::{clip_directory, BatchOptions, TARGET_SAMPLE_RATE};

#[derive(Parser, Debug)]
#[command(
    name = "utterance-trim",
    about = "Trims WAV recordings in a directory down to their longest region of active sound."
)]
struct Args {
    /// Directory containing the raw WAV files
    input_dir: PathBuf,

    /// Directory for the trimmed WAV files (created if absent)
    output_dir: PathBuf,

    /// Frame size in samples for energy analysis
    #[arg(long, default_value_t = 100)]
    frame_size: usize,

    /// Sample rate written to output WAV headers (samples are not resampled)
    #[arg(long, default_value_t = TARGET_SAMPLE_RATE)]
    sample_rate: u32,

    /// Parallel workers (default: CPU cores - 1)
    #[arg(long)]
    jobs: Option<usize>,

    /// Emit one JSON object per file (JSONL) instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = BatchOptions {
        frame_size: args.frame_size,
        sample_rate: args.sample_rate,
        jobs: args.jobs,
    };

    let t0 = Instant::now();
    let reports = clip_directory(&args.input_dir, &args.output_dir, &options)
        .with_context(|| format!("batch run over {} failed", args.input_dir.display()))?;

    for (idx, report) in reports.iter().enumerate() {
        if args.json {
            println!("{}", serde_json::to_string(report)?);
        } else if let Some(output) = &report.output {
            println!(
                "[{}/{}] {}: {} -> {} samples, saved as {} ({:.2}ms)",
                idx + 1,
                reports.len(),
                report.path.display(),
                report.input_samples,
                report.output_samples,
                output.display(),
                report.processing_time_ms
            );
        } else {
            println!(
                "[{}/{}] {}: SKIPPED: {}",
                idx + 1,
                reports.len(),
                report.path.display(),
                report.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    let ok = reports.iter().filter(|r| r.is_ok()).count();
    let wall_ms = t0.elapsed().as_secs_f64() * 1000.0;
    eprintln!("Done: ok={}/{} wall={:.0}ms", ok, reports.len(), wall_ms);

    Ok(())
}
