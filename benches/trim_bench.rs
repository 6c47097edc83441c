//! Performance benchmarks for utterance trimming

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use utterance_trim::{trim_audio, TrimConfig};

/// Synthetic spoken-word clip: silence, a voiced middle, silence
fn generate_clip(sample_rate: usize, seconds: usize) -> Vec<f32> {
    let total = sample_rate * seconds;
    let voiced_start = total / 4;
    let voiced_end = 3 * total / 4;

    (0..total)
        .map(|i| {
            if (voiced_start..voiced_end).contains(&i) {
                (i as f32 * 220.0 * 2.0 * std::f32::consts::PI / sample_rate as f32).sin() * 0.5
            } else {
                0.0
            }
        })
        .collect()
}

fn bench_trim_audio(c: &mut Criterion) {
    // 30 seconds at 8 kHz, the corpus this tool is built for
    let samples = generate_clip(8000, 30);
    let config = TrimConfig::default();

    c.bench_function("trim_audio_30s_8khz", |b| {
        b.iter(|| {
            let _ = trim_audio(black_box(&samples), black_box(config));
        });
    });
}

criterion_group!(benches, bench_trim_audio);
criterion_main!(benches);
