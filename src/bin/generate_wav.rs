use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use lp9k::save_wav;
use lp9k::signal_processing::DESIGN_SAMPLE_RATE_HZ;
use lp9k::simulation::{apply_awgn, generate_multi_tone, quantize};

#[derive(Parser, Debug)]
#[command(name = "generate_wav")]
#[command(about = "Generate synthetic mono WAV files for filter testing")]
struct Args {
    /// Output WAV path
    #[arg(short, long, default_value = "signal.wav")]
    output: PathBuf,

    /// Tone frequencies in Hz, comma-separated (e.g., "1000,5000,12000")
    #[arg(short = 'F', long, default_value = "5000")]
    freqs: String,

    /// Peak amplitude per tone in PCM units
    #[arg(short, long, default_value_t = 8000.0)]
    amplitude: f64,

    /// Signal duration in seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f32,

    /// Sample rate in Hz
    #[arg(long, default_value_t = DESIGN_SAMPLE_RATE_HZ)]
    sample_rate: u32,

    /// AWGN SNR in dB (omit for a clean signal)
    #[arg(long)]
    snr: Option<f64>,

    /// Seed for reproducible noise
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let freqs = parse_freqs(&args.freqs)?;

    let mut signal = generate_multi_tone(args.duration, args.sample_rate, &freqs, args.amplitude);
    if let Some(snr_db) = args.snr {
        apply_awgn(&mut signal, snr_db, args.seed);
    }
    let samples = quantize(&signal);

    save_wav(&args.output, &samples, args.sample_rate)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} samples ({} Hz) to {}",
        samples.len(),
        args.sample_rate,
        args.output.display()
    );
    Ok(())
}

fn parse_freqs(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("invalid frequency: {}", part))
        })
        .collect()
}
