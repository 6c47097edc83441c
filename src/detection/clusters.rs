//! Adaptive thresholding and cluster detection
//!
//! Derives a single activity threshold from the frame energy sequence (half
//! the global mean), then scans the sequence left to right collecting maximal
//! runs of consecutive frames whose energy is strictly above the threshold.
//! A run is closed by the first frame at or below the threshold; a run still
//! open when the sequence ends is dropped, not finalized.

use crate::error::TrimError;

/// Maximal run of consecutive frames above the activity threshold
///
/// Half-open interval over frame indices: `start` is the first active frame,
/// `end` is the index of the sub-threshold frame that closed the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    /// First frame of the run (inclusive)
    pub start: usize,
    /// One past the last frame of the run (exclusive)
    pub end: usize,
}

impl Cluster {
    /// Number of frames the cluster spans
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

/// Scanner state: either between clusters or inside an open run
enum ScanState {
    Idle,
    InCluster { start: usize },
}

/// Derive the activity threshold for a frame energy sequence
///
/// The threshold is half the arithmetic mean of all frame energies. Frames
/// at or below this level are treated as background noise.
///
/// # Errors
///
/// Returns `TrimError::EmptyInput` if the sequence is empty; the mean, and
/// with it the threshold, is undefined.
pub fn activity_threshold(energies: &[f32]) -> Result<f32, TrimError> {
    if energies.is_empty() {
        return Err(TrimError::EmptyInput);
    }

    let mean = energies.iter().sum::<f32>() / energies.len() as f32;
    Ok(mean / 2.0)
}

/// Find all clusters of consecutive frames strictly above `threshold`
///
/// Scans frame indices in increasing order. A frame with energy above the
/// threshold opens a cluster when none is open; the first frame at or below
/// the threshold after that closes it and the cluster is emitted. A run that
/// reaches the end of the sequence without dropping back below the threshold
/// is discarded: the run must observably end via a sub-threshold frame.
///
/// # Arguments
///
/// * `energies` - Frame energy sequence
/// * `threshold` - Activity threshold, typically from [`activity_threshold`]
///
/// # Returns
///
/// Clusters in discovery order. May be empty when no frame exceeds the
/// threshold.
pub fn find_clusters(energies: &[f32], threshold: f32) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut state = ScanState::Idle;

    for (idx, &energy) in energies.iter().enumerate() {
        state = match state {
            ScanState::Idle if energy > threshold => ScanState::InCluster { start: idx },
            ScanState::InCluster { start } if energy <= threshold => {
                clusters.push(Cluster { start, end: idx });
                ScanState::Idle
            }
            other => other,
        };
    }

    if let ScanState::InCluster { start } = state {
        log::debug!(
            "Dropping open run starting at frame {} (never closed before end of sequence)",
            start
        );
    }

    log::debug!(
        "Cluster scan: {} frames, threshold={:.6}, {} clusters",
        energies.len(),
        threshold,
        clusters.len()
    );

    clusters
}
