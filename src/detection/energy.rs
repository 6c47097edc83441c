//! Frame energy estimation
//!
//! Partitions a sample buffer into fixed-size non-overlapping frames and
//! computes one scalar energy value per frame: the arithmetic mean of the
//! absolute sample amplitudes. Mean absolute value is a cheap loudness proxy
//! that is good enough to separate speech from background noise without any
//! frequency-domain work.

use crate::error::TrimError;

/// Compute the frame energy sequence for a sample buffer
///
/// The buffer is split into consecutive frames of `frame_size` samples; the
/// final frame may be shorter when the buffer length is not an exact
/// multiple. Energy index `i` corresponds to the frame starting at sample
/// `i * frame_size`.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `frame_size` - Frame length in samples (must be > 0)
///
/// # Returns
///
/// One energy value per frame, `ceil(samples.len() / frame_size)` entries in
/// total. An empty buffer yields an empty sequence.
///
/// # Errors
///
/// Returns `TrimError::InvalidFrameSize` if `frame_size` is zero.
pub fn frame_energies(samples: &[f32], frame_size: usize) -> Result<Vec<f32>, TrimError> {
    if frame_size == 0 {
        return Err(TrimError::InvalidFrameSize(frame_size));
    }

    let energies: Vec<f32> = samples
        .chunks(frame_size)
        .map(|frame| frame.iter().map(|s| s.abs()).sum::<f32>() / frame.len() as f32)
        .collect();

    log::debug!(
        "Frame energies: {} samples, frame={}, {} frames",
        samples.len(),
        frame_size,
        energies.len()
    );

    Ok(energies)
}
