use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Mean power of a signal.
pub fn signal_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|&x| x * x).sum::<f64>() / signal.len() as f64
}

/// Add white Gaussian noise at the given SNR. Pass a seed for reproducible
/// output.
pub fn apply_awgn(signal: &mut [f64], snr_db: f64, seed: Option<u64>) {
    let sig_power = signal_power(signal);
    if sig_power == 0.0 {
        return;
    }

    let snr_linear = 10.0f64.powf(snr_db / 10.0);
    let noise_std = (sig_power / snr_linear).sqrt();

    let normal = Normal::new(0.0, noise_std).unwrap();
    let mut rng = create_rng(seed);

    for sample in signal.iter_mut() {
        *sample += normal.sample(&mut rng);
    }
}
