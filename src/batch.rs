//! Batch driver
//!
//! Processes every WAV file in a directory independently: decode to mono
//! f32, trim to the longest active region, write the result as mono 16-bit
//! PCM into the output directory under the same file name.
//!
//! Files are embarrassingly parallel (no shared state, no ordering between
//! them), so the driver fans out over a rayon pool. Per-file failures are
//! logged and recorded, never fatal: one silent or corrupt file cannot block
//! the rest of the batch.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::TrimConfig;
use crate::error::TrimError;
use crate::{io, trim_audio};

/// Sample rate recorded in output WAV headers (default)
///
/// Samples are not resampled; this is header metadata for the fixed-rate
/// corpus the trimmed files feed into.
pub const TARGET_SAMPLE_RATE: u32 = 8_000;

/// Batch processing options
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Frame size in samples for energy analysis (default: 100)
    pub frame_size: usize,
    /// Sample rate written to output WAV headers (default: 8000)
    pub sample_rate: u32,
    /// Worker threads; `None` means available cores minus one
    pub jobs: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            frame_size: TrimConfig::default().frame_size,
            sample_rate: TARGET_SAMPLE_RATE,
            jobs: None,
        }
    }
}

/// Outcome of processing one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Input file path
    pub path: PathBuf,
    /// Output file path, present when the file was written
    pub output: Option<PathBuf>,
    /// Decoded input length in samples
    pub input_samples: usize,
    /// Trimmed output length in samples
    pub output_samples: usize,
    /// Wall-clock time spent on this file in milliseconds
    pub processing_time_ms: f32,
    /// Error message when the file was skipped
    pub error: Option<String>,
}

impl FileReport {
    /// Whether the file was trimmed and written successfully
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Default worker count: one core left free for the system
fn default_jobs() -> usize {
    let n = std::thread::available_parallelism()
        .map(|v| v.get())
        .unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

/// Decode, trim, and re-encode a single file
fn process_file(path: &Path, output_dir: &Path, options: &BatchOptions) -> FileReport {
    let start_time = Instant::now();
    let config = TrimConfig {
        frame_size: options.frame_size,
    };

    let mut report = FileReport {
        path: path.to_path_buf(),
        output: None,
        input_samples: 0,
        output_samples: 0,
        processing_time_ms: 0.0,
        error: None,
    };

    let outcome = io::decoder::decode_file(path).and_then(|(samples, _native_rate)| {
        report.input_samples = samples.len();
        let result = trim_audio(&samples, config)?;
        report.output_samples = result.samples.len();

        let file_name = path
            .file_name()
            .ok_or_else(|| TrimError::Io(format!("no file name in {}", path.display())))?;
        let output_path = output_dir.join(file_name);
        io::encoder::write_wav(&output_path, &result.samples, options.sample_rate)?;
        report.output = Some(output_path);
        Ok(())
    });

    if let Err(e) = outcome {
        log::warn!("Skipping {}: {}", path.display(), e);
        report.error = Some(e.to_string());
    }

    report.processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    report
}

/// Trim every WAV file in `input_dir` into `output_dir`
///
/// Output files keep their input file names. The output directory is created
/// if absent. Files are processed in parallel; each failure is logged,
/// recorded in its [`FileReport`], and skipped.
///
/// # Arguments
///
/// * `input_dir` - Directory containing WAV files (not descended recursively)
/// * `output_dir` - Destination directory for trimmed files
/// * `options` - Frame size, output sample rate, and worker count
///
/// # Returns
///
/// One report per discovered input file, in path order.
///
/// # Errors
///
/// Returns `TrimError::Io` if the input directory cannot be read, the output
/// directory cannot be created, or the worker pool cannot be built. Per-file
/// failures do not surface here.
pub fn clip_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &BatchOptions,
) -> Result<Vec<FileReport>, TrimError> {
    let files = io::wav_files(input_dir)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| TrimError::Io(format!("cannot create {}: {}", output_dir.display(), e)))?;

    let jobs = options.jobs.unwrap_or_else(default_jobs);
    log::debug!(
        "Batch: {} files from {}, jobs={}",
        files.len(),
        input_dir.display(),
        jobs
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| TrimError::Io(format!("cannot build worker pool: {}", e)))?;

    let reports = pool.install(|| {
        files
            .par_iter()
            .map(|path| process_file(path, output_dir, options))
            .collect()
    });

    Ok(reports)
}
