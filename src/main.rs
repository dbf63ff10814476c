use clap::Parser;
use rolling_stats::Stats;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use lp9k::config::{DEFAULT_CHUNK_SIZE, ProcessingConfig};
use lp9k::signal_processing::{DESIGN_SAMPLE_RATE_HZ, Lowpass9k};
use lp9k::stream::{StreamSummary, filter_stream};
use lp9k::wav::{WavChunkSink, WavChunkSource, WavFormat, wav_format};

#[derive(Parser, Debug)]
#[command(name = "lp9k")]
#[command(about = "Apply a fixed 9 kHz low-pass FIR filter to WAV files", long_about = None)]
struct Args {
    /// WAV files to filter
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output path (single input only; default: <input stem>-filtered.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Samples pulled from the input per read
    #[arg(short = 'c', long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Report format: text, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
struct LevelSummary {
    count: usize,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl LevelSummary {
    fn from_stats(stats: &Stats<f64>) -> Option<Self> {
        if stats.count == 0 {
            return None;
        }
        Some(Self {
            count: stats.count,
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
struct FileReport {
    filename: String,
    output: String,
    sample_rate: Option<u32>,
    channels: Option<u16>,
    samples: usize,
    chunks: usize,
    clipped: usize,
    elapsed_ms: f32,
    input_level: Option<LevelSummary>,
    output_level: Option<LevelSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if args.output.is_some() && args.files.len() > 1 {
        anyhow::bail!("--output is only valid with a single input file");
    }

    let config = ProcessingConfig {
        chunk_size: args.chunk_size,
    };
    config.validate()?;

    let reports: Vec<FileReport> = args
        .files
        .iter()
        .map(|path| {
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| default_output_path(path));
            filter_file(path, &output, &config)
        })
        .collect();

    match args.format {
        OutputFormat::Text => print_text(&reports),
        OutputFormat::Json => print_json(&reports)?,
    }

    Ok(())
}

/// `signal.wav` filters to `signal-filtered.wav` alongside the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}-filtered.wav", stem))
}

fn filter_file(input: &Path, output: &Path, config: &ProcessingConfig) -> FileReport {
    let filename = input
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string());

    match filter_file_impl(input, output, config) {
        Ok(report) => report,
        Err(e) => FileReport {
            filename,
            output: output.display().to_string(),
            sample_rate: None,
            channels: None,
            samples: 0,
            chunks: 0,
            clipped: 0,
            elapsed_ms: 0.0,
            input_level: None,
            output_level: None,
            error: Some(e.to_string()),
        },
    }
}

fn filter_file_impl(
    input: &Path,
    output: &Path,
    config: &ProcessingConfig,
) -> anyhow::Result<FileReport> {
    let start = Instant::now();

    let mut source = WavChunkSource::open(input, config.chunk_size)?;
    let spec = source.spec();
    let format = wav_format(&spec)?;

    if spec.sample_rate != DESIGN_SAMPLE_RATE_HZ {
        log::warn!(
            "{}: sample rate {} Hz differs from the {} Hz design rate; the realized cutoff scales accordingly",
            input.display(),
            spec.sample_rate,
            DESIGN_SAMPLE_RATE_HZ
        );
    }
    if spec.channels > 1 {
        log::warn!(
            "{}: {} interleaved channels are filtered as a single sample stream",
            input.display(),
            spec.channels
        );
    }
    log::info!(
        "{}: {:?}, {} ch, {} Hz -> {}",
        input.display(),
        format,
        spec.channels,
        spec.sample_rate,
        output.display()
    );

    let mut sink = WavChunkSink::create(output, spec)?;
    let mut filter = Lowpass9k::new();

    let summary: StreamSummary = match format {
        WavFormat::Int16 => filter_stream::<i16, _, _, _>(&mut source, &mut sink, &mut filter)?,
        WavFormat::Float32 => filter_stream::<f32, _, _, _>(&mut source, &mut sink, &mut filter)?,
    };
    sink.finalize()?;

    let filename = input
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string());

    Ok(FileReport {
        filename,
        output: output.display().to_string(),
        sample_rate: Some(spec.sample_rate),
        channels: Some(spec.channels),
        samples: summary.samples,
        chunks: summary.chunks,
        clipped: summary.clipped,
        elapsed_ms: start.elapsed().as_secs_f32() * 1000.0,
        input_level: LevelSummary::from_stats(&summary.input_level),
        output_level: LevelSummary::from_stats(&summary.output_level),
        error: None,
    })
}

fn print_text(reports: &[FileReport]) {
    println!(
        "{:<40} {:>10} {:>8} {:>8} {:>10}",
        "File", "Samples", "Chunks", "Clipped", "Time(ms)"
    );
    println!("{}", "-".repeat(80));

    for report in reports {
        if let Some(ref err) = report.error {
            println!("{:<40} ERROR: {}", report.filename, err);
            continue;
        }

        println!(
            "{:<40} {:>10} {:>8} {:>8} {:>10.1}",
            report.filename, report.samples, report.chunks, report.clipped, report.elapsed_ms
        );
    }

    for report in reports {
        if report.error.is_some() {
            continue;
        }

        if let (Some(input), Some(out)) = (&report.input_level, &report.output_level) {
            eprintln!();
            eprintln!("Levels for {} -> {}:", report.filename, report.output);
            eprintln!(
                "  Input:  mean {:>10.1}, peak {:>8.0} / {:>8.0}",
                input.mean, input.min, input.max
            );
            eprintln!(
                "  Output: mean {:>10.1}, peak {:>8.0} / {:>8.0}",
                out.mean, out.min, out.max
            );
            if report.clipped > 0 {
                eprintln!(
                    "  {} output samples saturated at the 16-bit bounds",
                    report.clipped
                );
            }
        }
    }
}

fn print_json(reports: &[FileReport]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{}", json);
    Ok(())
}
