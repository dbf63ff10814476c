use std::f64::consts::PI;

use crate::sample::to_int;

/// Generate a pure sine tone at PCM amplitude.
pub fn generate_tone(
    duration_secs: f32,
    sample_rate: u32,
    freq_hz: f64,
    amplitude: f64,
) -> Vec<f64> {
    let num_samples = (duration_secs * sample_rate as f32) as usize;
    let rate = f64::from(sample_rate);

    (0..num_samples)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f64 / rate).sin())
        .collect()
}

/// Sum several tones of equal amplitude into one signal.
pub fn generate_multi_tone(
    duration_secs: f32,
    sample_rate: u32,
    freqs_hz: &[f64],
    amplitude: f64,
) -> Vec<f64> {
    let num_samples = (duration_secs * sample_rate as f32) as usize;
    let rate = f64::from(sample_rate);
    let mut samples = vec![0.0f64; num_samples];

    for &freq in freqs_hz {
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample += amplitude * (2.0 * PI * freq * i as f64 / rate).sin();
        }
    }

    samples
}

/// Quantize a float signal to 16-bit PCM with saturation.
pub fn quantize(signal: &[f64]) -> Vec<i16> {
    signal.iter().map(|&v| to_int(v)).collect()
}
