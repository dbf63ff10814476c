//! WAV-backed sample sources and sinks.
//!
//! The filter pipeline understands two WAV layouts: 16-bit integer PCM and
//! 32-bit float. Channels are not interpreted; interleaved multi-channel
//! data passes through the filter as a single sample stream.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::FilterError;
use crate::stream::{SampleSink, SampleSource};

/// Sample layouts the filter pipeline can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// 16-bit integer PCM, filtered through the saturating conversion pair
    Int16,
    /// 32-bit float, filtered through the identity conversion path
    Float32,
}

/// Classify a WAV spec, rejecting layouts the pipeline does not handle.
pub fn wav_format(spec: &WavSpec) -> Result<WavFormat, FilterError> {
    match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => Ok(WavFormat::Int16),
        (SampleFormat::Float, 32) => Ok(WavFormat::Float32),
        (format, bits) => Err(FilterError::UnsupportedFormat {
            bits,
            format: match format {
                SampleFormat::Int => "integer",
                SampleFormat::Float => "float",
            },
        }),
    }
}

/// Streaming WAV reader serving samples in fixed-size chunks.
///
/// Samples are pulled incrementally from the file; the final chunk carries
/// exactly the samples remaining.
pub struct WavChunkSource {
    reader: WavReader<BufReader<File>>,
    chunk_size: usize,
}

impl WavChunkSource {
    pub fn open<P: AsRef<Path>>(path: P, chunk_size: usize) -> anyhow::Result<Self> {
        let reader = WavReader::open(path.as_ref())?;
        Ok(Self { reader, chunk_size })
    }

    pub fn spec(&self) -> WavSpec {
        self.reader.spec()
    }

    fn read_chunk<S: hound::Sample>(&mut self) -> anyhow::Result<Option<Vec<S>>> {
        let mut chunk = Vec::with_capacity(self.chunk_size);
        for sample in self.reader.samples::<S>().take(self.chunk_size) {
            chunk.push(sample?);
        }

        if chunk.is_empty() {
            Ok(None)
        } else {
            Ok(Some(chunk))
        }
    }
}

impl SampleSource<i16> for WavChunkSource {
    fn next_chunk(&mut self) -> anyhow::Result<Option<Vec<i16>>> {
        self.read_chunk::<i16>()
    }
}

impl SampleSource<f32> for WavChunkSource {
    fn next_chunk(&mut self) -> anyhow::Result<Option<Vec<f32>>> {
        self.read_chunk::<f32>()
    }
}

/// WAV writer accepting filtered chunks.
pub struct WavChunkSink {
    writer: WavWriter<BufWriter<File>>,
}

impl WavChunkSink {
    /// Create the output file with the given spec (normally the input's
    /// spec, so rate and channel count carry through unchanged).
    pub fn create<P: AsRef<Path>>(path: P, spec: WavSpec) -> anyhow::Result<Self> {
        let writer = WavWriter::create(path.as_ref(), spec)?;
        Ok(Self { writer })
    }

    /// Flush sample counts and close the file. Must be called on every exit
    /// path that intends the file to be readable.
    pub fn finalize(self) -> anyhow::Result<()> {
        self.writer.finalize()?;
        Ok(())
    }
}

impl SampleSink<i16> for WavChunkSink {
    fn write_chunk(&mut self, chunk: &[i16]) -> anyhow::Result<()> {
        for &sample in chunk {
            self.writer.write_sample(sample)?;
        }
        Ok(())
    }
}

impl SampleSink<f32> for WavChunkSink {
    fn write_chunk(&mut self, chunk: &[f32]) -> anyhow::Result<()> {
        for &sample in chunk {
            self.writer.write_sample(sample)?;
        }
        Ok(())
    }
}

/// Write a mono 16-bit PCM WAV in one call.
pub fn save_wav<P: AsRef<Path>>(
    path: P,
    samples: &[i16],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;

    for &sample in samples {
        writer.write_sample(sample)?;
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(format: SampleFormat, bits: u16) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: 31250,
            bits_per_sample: bits,
            sample_format: format,
        }
    }

    #[test]
    fn test_supported_formats() {
        assert_eq!(
            wav_format(&spec(SampleFormat::Int, 16)).unwrap(),
            WavFormat::Int16
        );
        assert_eq!(
            wav_format(&spec(SampleFormat::Float, 32)).unwrap(),
            WavFormat::Float32
        );
    }

    #[test]
    fn test_unsupported_formats_rejected() {
        assert!(wav_format(&spec(SampleFormat::Int, 24)).is_err());
        assert!(wav_format(&spec(SampleFormat::Int, 8)).is_err());
        assert!(wav_format(&spec(SampleFormat::Int, 32)).is_err());
    }
}
