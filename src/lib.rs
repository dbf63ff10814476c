pub mod config;
pub mod error;
pub mod sample;
pub mod signal_processing;
pub mod stream;
pub mod wav;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::ProcessingConfig;
pub use error::{FilterError, Result};
pub use signal_processing::Lowpass9k;
pub use stream::{StreamSummary, filter_stream};
pub use wav::save_wav;
