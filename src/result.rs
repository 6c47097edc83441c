//! Trim result types

use serde::{Deserialize, Serialize};

/// Selected active region, in both frame and sample coordinates
///
/// Frame bounds are half-open indices into the frame energy sequence; sample
/// bounds are the corresponding half-open range into the input buffer, with
/// the upper bound clipped to the buffer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRegion {
    /// First frame of the selected cluster (inclusive)
    pub start_frame: usize,
    /// One past the last frame of the selected cluster (exclusive)
    pub end_frame: usize,
    /// First sample of the region (inclusive)
    pub start_sample: usize,
    /// One past the last sample of the region (exclusive)
    pub end_sample: usize,
}

impl ActiveRegion {
    /// Number of frames the region spans
    pub fn frame_span(&self) -> usize {
        self.end_frame - self.start_frame
    }

    /// Number of samples the region covers
    pub fn len(&self) -> usize {
        self.end_sample - self.start_sample
    }

    /// Whether the region covers no samples
    pub fn is_empty(&self) -> bool {
        self.end_sample == self.start_sample
    }
}

/// Metadata describing one trim invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimMetadata {
    /// Number of samples in the input buffer
    pub input_samples: usize,
    /// Number of frames the buffer was segmented into
    pub frame_count: usize,
    /// Activity threshold derived for this buffer (half the mean frame energy)
    pub threshold: f32,
    /// Number of clusters found above the threshold
    pub cluster_count: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,
}

/// Result of trimming a buffer to its longest active region
#[derive(Debug, Clone)]
pub struct TrimResult {
    /// The trimmed sample buffer, a contiguous sub-sequence of the input
    pub samples: Vec<f32>,
    /// The region the samples were taken from
    pub region: ActiveRegion,
    /// Metadata about the trim run
    pub metadata: TrimMetadata,
}
