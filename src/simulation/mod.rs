//! Synthetic test-signal generation, behind the `simulation` feature.

mod noise;
mod signal;

pub use noise::{apply_awgn, signal_power};
pub use signal::{generate_multi_tone, generate_tone, quantize};
