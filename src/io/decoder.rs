//! Audio decoding using Symphonia
//!
//! Decodes a file into a mono f32 sample buffer plus its native sample rate.
//! Multi-channel sources are downmixed by averaging across channels; integer
//! sample formats are scaled to [-1.0, 1.0].

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use symphonia::default::{get_codecs, get_probe};

use crate::error::TrimError;

/// Downmix one decoded planar buffer to mono f32 and append it to `out`
fn mix_down<S, F>(buf: &AudioBuffer<S>, to_f32: F, out: &mut Vec<f32>)
where
    S: Sample,
    F: Fn(S) -> f32,
{
    let channels = buf.spec().channels.count();
    if channels <= 1 {
        out.extend(buf.chan(0).iter().map(|&s| to_f32(s)));
    } else {
        for frame in 0..buf.frames() {
            let sum: f32 = (0..channels).map(|ch| to_f32(buf.chan(ch)[frame])).sum();
            out.push(sum / channels as f32);
        }
    }
}

/// Decode an audio file to mono PCM samples
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// Tuple of (samples, native sample rate). Samples are mono f32 in
/// [-1.0, 1.0]; stereo and multi-channel sources are averaged down.
///
/// # Errors
///
/// Returns `TrimError::Decode` if the file cannot be opened, probed, or
/// decoded, or if it uses an unsupported sample format.
pub fn decode_file(path: &Path) -> Result<(Vec<f32>, u32), TrimError> {
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path)
        .map_err(|e| TrimError::Decode(format!("cannot open {}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| TrimError::Decode(format!("unrecognized format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| TrimError::Decode("no supported audio track".to_string()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| TrimError::Decode("track is missing a sample rate".to_string()))?;

    let mut decoder = get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| TrimError::Decode(format!("no decoder for track: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream (or unrecoverable read error, which amounts to
            // the same thing for a whole-file decode)
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => match decoded {
                AudioBufferRef::F32(buf) => mix_down(buf.as_ref(), |s| s, &mut samples),
                AudioBufferRef::F64(buf) => mix_down(buf.as_ref(), |s| s as f32, &mut samples),
                AudioBufferRef::S16(buf) => {
                    mix_down(buf.as_ref(), |s| s as f32 / 32_768.0, &mut samples)
                }
                AudioBufferRef::S24(buf) => {
                    mix_down(buf.as_ref(), |s| s.inner() as f32 / 8_388_608.0, &mut samples)
                }
                AudioBufferRef::S32(buf) => {
                    mix_down(buf.as_ref(), |s| s as f32 / 2_147_483_648.0, &mut samples)
                }
                AudioBufferRef::U8(buf) => {
                    mix_down(buf.as_ref(), |s| (s as f32 - 128.0) / 128.0, &mut samples)
                }
                _ => {
                    return Err(TrimError::Decode("unsupported sample format".to_string()));
                }
            },
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                // Corrupted packets are skipped rather than failing the file
                log::warn!("Skipping undecodable packet in {}: {}", path.display(), e);
                continue;
            }
            Err(e) => return Err(TrimError::Decode(e.to_string())),
        }
    }

    log::debug!(
        "Decoded {}: {} samples at {} Hz",
        path.display(),
        samples.len(),
        sample_rate
    );

    Ok((samples, sample_rate))
}
