use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unsupported sample format: {bits}-bit {format} (expected 16-bit integer or 32-bit float)")]
    UnsupportedFormat { bits: u16, format: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
