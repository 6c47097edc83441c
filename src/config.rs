//! Configuration parameters for utterance trimming

/// Trimming configuration parameters
#[derive(Debug, Clone, Copy)]
pub struct TrimConfig {
    /// Frame size in samples for energy analysis (default: 100)
    ///
    /// Frames are non-overlapping; the final frame may be shorter when the
    /// buffer length is not an exact multiple of this size.
    pub frame_size: usize,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self { frame_size: 100 }
    }
}
