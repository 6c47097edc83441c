//! WAV encoding using hound
//!
//! Persists a sample buffer as mono 16-bit PCM at a caller-chosen rate.
//! Samples are written as-is: the rate goes into the header only, no
//! resampling is performed.

use std::path::Path;

use crate::error::TrimError;

/// Write samples to a mono 16-bit PCM WAV file
///
/// Parent directories of `path` are created if absent. f32 samples are
/// clamped to [-1.0, 1.0] and scaled to i16.
///
/// # Arguments
///
/// * `path` - Destination file path
/// * `samples` - Mono audio samples
/// * `sample_rate` - Rate to record in the WAV header
///
/// # Errors
///
/// Returns `TrimError::Encode` if the destination cannot be created or the
/// writer fails.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), TrimError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| TrimError::Encode(format!("cannot create {}: {}", parent.display(), e)))?;
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| TrimError::Encode(format!("cannot create {}: {}", path.display(), e)))?;

    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(value)
            .map_err(|e| TrimError::Encode(format!("write failed: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| TrimError::Encode(format!("finalize failed: {}", e)))?;

    log::debug!(
        "Wrote {}: {} samples at {} Hz",
        path.display(),
        samples.len(),
        sample_rate
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_wav_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let samples = vec![0.0f32, 0.5, -0.5, 1.0, -1.0];

        write_wav(&path, &samples, 8000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let decoded: Vec<f32> = reader
            .samples::<i16>()
            .map(|s| s.unwrap() as f32 / i16::MAX as f32)
            .collect();
        assert_eq!(decoded.len(), samples.len());
        for (got, want) in decoded.iter().zip(&samples) {
            assert!(
                (got - want).abs() < 1e-3,
                "Round-trip drift: wrote {}, read {}",
                want,
                got
            );
        }
    }

    #[test]
    fn test_write_wav_clamps_out_of_range_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hot.wav");

        write_wav(&path, &[2.0, -2.0], 8000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let values: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(values, vec![i16::MAX, -i16::MAX]);
    }

    #[test]
    fn test_write_wav_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.wav");

        write_wav(&path, &[0.1, 0.2], 8000).unwrap();
        assert!(path.is_file());
    }
}
