//! # Utterance Trim
//!
//! A preprocessing engine for batches of short spoken-word recordings,
//! trimming each one down to its single longest contiguous region of active
//! sound and discarding leading, trailing, and internal silence.
//!
//! ## Features
//!
//! - **Adaptive silence detection**: per-file threshold at half the mean
//!   frame energy, no tuning across files
//! - **Longest-region selection**: contiguous above-threshold frame clusters,
//!   earliest maximal cluster wins
//! - **Batch driver**: parallel decode → trim → encode over a directory of
//!   WAV files, skip-and-log per-file failures
//!
//! ## Quick Start
//!
//! ```
//! use utterance_trim::{trim_audio, TrimConfig};
//!
//! // 5 frames of 100 samples: silence, two loud frames, silence
//! let mut samples = vec![0.0f32; 500];
//! for s in &mut samples[100..300] {
//!     *s = 0.6;
//! }
//!
//! let result = trim_audio(&samples, TrimConfig::default())?;
//!
//! assert_eq!(result.region.start_sample, 100);
//! assert_eq!(result.region.end_sample, 300);
//! assert_eq!(result.samples.len(), 200);
//! # Ok::<(), utterance_trim::TrimError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline flows strictly forward:
//!
//! ```text
//! Samples → Frame Energies → Clusters → Selected Region → Trimmed Buffer
//! ```
//!
//! Every stage is a pure function of its inputs; nothing persists across
//! calls, so files in a batch are fully independent.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod config;
pub mod detection;
pub mod error;
pub mod io;
pub mod result;

// Re-export main types
pub use config::TrimConfig;
pub use error::TrimError;
pub use result::{ActiveRegion, TrimMetadata, TrimResult};

/// Trim a sample buffer to its longest active region
///
/// Segments the buffer into fixed-size frames, derives an adaptive activity
/// threshold (half the mean frame energy), collects contiguous runs of
/// above-threshold frames, and returns the samples spanned by the longest
/// run. Ties go to the earliest run.
///
/// # Arguments
///
/// * `samples` - Mono audio samples; the sample rate is not interpreted here
/// * `config` - Trimming parameters (frame size)
///
/// # Returns
///
/// A [`TrimResult`] holding the trimmed samples, the selected region in frame
/// and sample coordinates, and run metadata.
///
/// # Errors
///
/// * [`TrimError::InvalidFrameSize`] - `config.frame_size` is zero
/// * [`TrimError::EmptyInput`] - `samples` is empty
/// * [`TrimError::NoActiveRegion`] - no frame cluster rose above the
///   threshold (silent buffer, or an active run that never closed before the
///   end of the buffer)
pub fn trim_audio(samples: &[f32], config: TrimConfig) -> Result<TrimResult, TrimError> {
    use std::time::Instant;
    let start_time = Instant::now();

    if config.frame_size == 0 {
        return Err(TrimError::InvalidFrameSize(config.frame_size));
    }

    if samples.is_empty() {
        return Err(TrimError::EmptyInput);
    }

    log::debug!(
        "Trimming {} samples, frame size {}",
        samples.len(),
        config.frame_size
    );

    let energies = detection::energy::frame_energies(samples, config.frame_size)?;
    let threshold = detection::clusters::activity_threshold(&energies)?;
    let clusters = detection::clusters::find_clusters(&energies, threshold);

    let selected = detection::region::select_longest(&clusters).ok_or(TrimError::NoActiveRegion)?;
    let region = detection::region::resolve_region(selected, config.frame_size, samples.len());

    let trimmed = samples[region.start_sample..region.end_sample].to_vec();
    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Selected region: frames [{}, {}), samples [{}, {}), from {} clusters",
        region.start_frame,
        region.end_frame,
        region.start_sample,
        region.end_sample,
        clusters.len()
    );

    Ok(TrimResult {
        samples: trimmed,
        region,
        metadata: TrimMetadata {
            input_samples: samples.len(),
            frame_count: energies.len(),
            threshold,
            cluster_count: clusters.len(),
            processing_time_ms,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Buffer with `active` samples of the given amplitude placed between
    /// leading and trailing silence
    fn voiced_buffer(lead: usize, active: usize, trail: usize, amplitude: f32) -> Vec<f32> {
        let mut samples = vec![0.0f32; lead + active + trail];
        for s in &mut samples[lead..lead + active] {
            *s = amplitude;
        }
        samples
    }

    #[test]
    fn test_trim_isolates_the_voiced_region() {
        let samples = voiced_buffer(100, 200, 200, 1.0);
        let result = trim_audio(&samples, TrimConfig::default()).unwrap();

        assert_eq!(result.region.start_sample, 100);
        assert_eq!(result.region.end_sample, 300);
        assert_eq!(result.samples, vec![1.0f32; 200]);
        assert_eq!(result.metadata.frame_count, 5);
        assert_eq!(result.metadata.cluster_count, 1);
        // Energies are [0, 1, 1, 0, 0]; threshold is half their mean
        assert!((result.metadata.threshold - 0.2).abs() < 1e-7);
    }

    #[test]
    fn test_trim_empty_buffer() {
        let result = trim_audio(&[], TrimConfig::default());
        assert_eq!(result.unwrap_err(), TrimError::EmptyInput);
    }

    #[test]
    fn test_trim_all_silent_buffer() {
        // Threshold is 0 and no frame exceeds it strictly
        let samples = vec![0.0f32; 1000];
        let result = trim_audio(&samples, TrimConfig::default());
        assert_eq!(result.unwrap_err(), TrimError::NoActiveRegion);
    }

    #[test]
    fn test_trim_zero_frame_size() {
        let samples = vec![0.5f32; 100];
        let result = trim_audio(&samples, TrimConfig { frame_size: 0 });
        assert_eq!(result.unwrap_err(), TrimError::InvalidFrameSize(0));
    }

    #[test]
    fn test_trim_run_open_at_end_yields_no_region() {
        // Active to the very last frame: the run never closes, so it is
        // dropped and no region remains
        let samples = voiced_buffer(200, 200, 0, 1.0);
        let result = trim_audio(&samples, TrimConfig::default());
        assert_eq!(result.unwrap_err(), TrimError::NoActiveRegion);
    }

    #[test]
    fn test_trim_equal_spans_pick_the_earlier_region() {
        // Two active regions of identical span with a silent gap between
        let mut samples = vec![0.0f32; 800];
        for s in &mut samples[100..300] {
            *s = 1.0;
        }
        for s in &mut samples[500..700] {
            *s = 1.0;
        }

        let result = trim_audio(&samples, TrimConfig::default()).unwrap();
        assert_eq!(result.region.start_sample, 100);
        assert_eq!(result.region.end_sample, 300);
        assert_eq!(result.metadata.cluster_count, 2);
    }

    #[test]
    fn test_trim_output_is_subset_of_input() {
        let samples = voiced_buffer(300, 400, 300, 0.8);
        let result = trim_audio(&samples, TrimConfig::default()).unwrap();

        assert!(result.samples.len() <= samples.len());
        assert_eq!(
            result.samples[..],
            samples[result.region.start_sample..result.region.end_sample]
        );
    }

    #[test]
    fn test_trim_is_deterministic() {
        let samples: Vec<f32> = (0..2000)
            .map(|i| if (500..1200).contains(&i) { ((i % 17) as f32 - 8.0) / 10.0 } else { 0.0 })
            .collect();

        let a = trim_audio(&samples, TrimConfig::default()).unwrap();
        let b = trim_audio(&samples, TrimConfig::default()).unwrap();
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.region, b.region);
    }

    #[test]
    fn test_trim_custom_frame_size() {
        let samples = voiced_buffer(50, 100, 100, 1.0);
        let result = trim_audio(&samples, TrimConfig { frame_size: 50 }).unwrap();

        assert_eq!(result.region.start_sample, 50);
        assert_eq!(result.region.end_sample, 150);
        assert_eq!(result.metadata.frame_count, 5);
    }
}
