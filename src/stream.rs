//! Streaming driver: pulls chunks of raw samples from a source, runs every
//! sample through the filter in arrival order, and pushes converted chunks
//! to a sink until the source is exhausted.
//!
//! The driver processes exactly the samples each read actually returned; a
//! short final chunk is filtered as-is, never padded out to the nominal
//! chunk size.

use rolling_stats::Stats;

use crate::sample::Sample;
use crate::signal_processing::Filter;

/// Chunk-pull side of the streaming contract.
pub trait SampleSource<S: Sample> {
    /// Pull the next chunk of samples.
    ///
    /// `None` (or an empty chunk) signals end of stream. A returned chunk
    /// carries exactly the samples read and may be shorter than the nominal
    /// chunk size.
    fn next_chunk(&mut self) -> anyhow::Result<Option<Vec<S>>>;
}

/// Chunk-push side of the streaming contract.
pub trait SampleSink<S: Sample> {
    fn write_chunk(&mut self, chunk: &[S]) -> anyhow::Result<()>;
}

/// Totals for one filtered stream.
#[derive(Debug)]
pub struct StreamSummary {
    /// Samples pushed through the filter
    pub samples: usize,
    /// Chunks pulled from the source
    pub chunks: usize,
    /// Output samples clamped by the saturating narrowing conversion
    pub clipped: usize,
    /// Input amplitude statistics, in the filter's float domain
    pub input_level: Stats<f64>,
    /// Output amplitude statistics before narrowing
    pub output_level: Stats<f64>,
}

impl StreamSummary {
    fn new() -> Self {
        Self {
            samples: 0,
            chunks: 0,
            clipped: 0,
            input_level: Stats::new(),
            output_level: Stats::new(),
        }
    }
}

/// Filter a whole stream from `source` into `sink`.
///
/// For each chunk: widen every sample to the filter domain, push-then-produce
/// per sample in input order, narrow back (saturating for integer sample
/// types), and emit. Chunk size is purely a throughput parameter; the output
/// sequence is identical for any chunking of the same input.
pub fn filter_stream<S, Src, Snk, F>(
    source: &mut Src,
    sink: &mut Snk,
    filter: &mut F,
) -> anyhow::Result<StreamSummary>
where
    S: Sample,
    Src: SampleSource<S> + ?Sized,
    Snk: SampleSink<S> + ?Sized,
    F: Filter + ?Sized,
{
    let mut summary = StreamSummary::new();

    loop {
        let Some(chunk) = source.next_chunk()? else {
            break;
        };
        if chunk.is_empty() {
            break;
        }

        let mut buffer: Vec<f64> = chunk.iter().map(|s| s.to_float()).collect();
        for (raw, sample) in chunk.iter().zip(buffer.iter_mut()) {
            summary.input_level.update(raw.to_float());
            *sample = filter.process(*sample);
            summary.output_level.update(*sample);
            if S::clips(*sample) {
                summary.clipped += 1;
            }
        }

        let converted: Vec<S> = buffer.iter().map(|&v| S::from_float(v)).collect();
        sink.write_chunk(&converted)?;

        summary.samples += chunk.len();
        summary.chunks += 1;
    }

    Ok(summary)
}

/// In-memory source serving a sample buffer in fixed-size chunks.
pub struct MemorySource<S> {
    samples: Vec<S>,
    position: usize,
    chunk_size: usize,
}

impl<S> MemorySource<S> {
    pub fn new(samples: Vec<S>, chunk_size: usize) -> Self {
        Self {
            samples,
            position: 0,
            chunk_size,
        }
    }
}

impl<S: Sample> SampleSource<S> for MemorySource<S> {
    fn next_chunk(&mut self) -> anyhow::Result<Option<Vec<S>>> {
        if self.position >= self.samples.len() {
            return Ok(None);
        }

        let end = (self.position + self.chunk_size).min(self.samples.len());
        let chunk = self.samples[self.position..end].to_vec();
        self.position = end;

        Ok(Some(chunk))
    }
}

/// In-memory sink collecting every written sample.
pub struct MemorySink<S> {
    samples: Vec<S>,
}

impl<S> MemorySink<S> {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<S> {
        self.samples
    }
}

impl<S> Default for MemorySink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sample> SampleSink<S> for MemorySink<S> {
    fn write_chunk(&mut self, chunk: &[S]) -> anyhow::Result<()> {
        self.samples.extend_from_slice(chunk);
        Ok(())
    }
}
