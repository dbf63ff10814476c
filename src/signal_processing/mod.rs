pub mod filter;
pub mod fir_core;
pub mod lowpass;

pub use filter::Filter;
pub use fir_core::FirCore;
pub use lowpass::{
    DESIGN_SAMPLE_RATE_HZ, LOWPASS_TAP_COUNT, LOWPASS_TAPS, Lowpass9k, PASSBAND_EDGE_HZ,
    STOPBAND_EDGE_HZ,
};
