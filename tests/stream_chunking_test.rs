use lp9k::signal_processing::{DESIGN_SAMPLE_RATE_HZ, Lowpass9k};
use lp9k::simulation::{generate_multi_tone, quantize};
use lp9k::stream::{MemorySink, MemorySource, filter_stream};

fn test_signal() -> Vec<i16> {
    // 0.3 s of mixed in-band and out-of-band content; 9375 samples, which
    // is divisible by none of the chunk sizes below, so every run ends on
    // a partial final chunk.
    quantize(&generate_multi_tone(
        0.3,
        DESIGN_SAMPLE_RATE_HZ,
        &[1000.0, 5000.0, 12000.0],
        9000.0,
    ))
}

fn filter_in_chunks(samples: &[i16], chunk_size: usize) -> Vec<i16> {
    let mut source = MemorySource::new(samples.to_vec(), chunk_size);
    let mut sink = MemorySink::new();
    let mut filter = Lowpass9k::new();

    filter_stream::<i16, _, _, _>(&mut source, &mut sink, &mut filter).expect("memory stream");
    sink.into_samples()
}

#[test]
fn test_chunk_size_does_not_affect_output() {
    let samples = test_signal();
    let reference = filter_in_chunks(&samples, samples.len());

    for chunk_size in [1, 37, 1024, 4096] {
        let output = filter_in_chunks(&samples, chunk_size);
        assert_eq!(
            output, reference,
            "chunk size {} changed the output",
            chunk_size
        );
    }
}

#[test]
fn test_partial_final_chunk_processed_exactly() {
    let samples = test_signal();
    assert_eq!(samples.len() % 4096, 1183);

    let mut source = MemorySource::new(samples.clone(), 4096);
    let mut sink = MemorySink::new();
    let mut filter = Lowpass9k::new();
    let summary =
        filter_stream::<i16, _, _, _>(&mut source, &mut sink, &mut filter).expect("memory stream");

    // Every sample read is processed; nothing is padded out to the nominal
    // chunk size on the short final read.
    assert_eq!(summary.samples, samples.len());
    assert_eq!(summary.chunks, 3);
    assert_eq!(sink.samples().len(), samples.len());
}

#[test]
fn test_overshoot_saturates_instead_of_wrapping() {
    // A near-full-scale square wave rings past the 16-bit bounds on the
    // kernel's step overshoot; the narrowing conversion must clamp, never
    // wrap.
    let samples: Vec<i16> = (0..1000)
        .map(|i| if (i / 50) % 2 == 0 { 30000 } else { -30000 })
        .collect();

    let mut source = MemorySource::new(samples, 256);
    let mut sink = MemorySink::new();
    let mut filter = Lowpass9k::new();
    let summary =
        filter_stream::<i16, _, _, _>(&mut source, &mut sink, &mut filter).expect("memory stream");

    assert!(summary.clipped > 0, "expected overshoot to saturate");

    let output = sink.into_samples();
    let peak = output.iter().map(|&s| i32::from(s).abs()).max().unwrap();
    assert_eq!(peak, 32767);
}

#[test]
fn test_float_stream_runs_identity_conversion() {
    // The f32 path feeds the filter unconverted; outputs must match the
    // filter run directly in the float domain.
    let samples: Vec<f32> = (0..500)
        .map(|i| (f64::from(i) * 0.1).sin() as f32 * 20000.0)
        .collect();

    let mut source = MemorySource::new(samples.clone(), 64);
    let mut sink = MemorySink::new();
    let mut filter = Lowpass9k::new();
    filter_stream::<f32, _, _, _>(&mut source, &mut sink, &mut filter).expect("memory stream");

    let mut reference = Lowpass9k::new();
    let expected: Vec<f32> = samples
        .iter()
        .map(|&x| reference.process(f64::from(x)) as f32)
        .collect();

    assert_eq!(sink.into_samples(), expected);
}
