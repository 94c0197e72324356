use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use clap::Parser;
use rspectrum::{compute_fft, magnitudes, parse_samples, parse_samples_lenient, peak_bin};
use tracing_subscriber::EnvFilter;

/// Number of values shown from each end of the data.
const PREVIEW_LEN: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "spectrum")]
#[command(about = "Compute the FFT of a newline-delimited time series", long_about = None)]
struct Cli {
    /// Text file with one sample per line.
    #[arg(default_value = "data.txt")]
    input: PathBuf,
    /// Directory the spectrum files are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Skip lines that are not numbers instead of rejecting the file.
    #[arg(long)]
    lenient: bool,
}

/// Paths of the magnitude and the full complex spectrum files.
struct OutputPaths {
    magnitude: PathBuf,
    full: PathBuf,
}

impl OutputPaths {
    fn new(input: &Path, output_dir: &Path) -> Self {
        let (magnitude, full) = match input.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) if !stem.is_empty() => {
                (format!("{stem}_fft.txt"), format!("{stem}_fft_full.txt"))
            }
            _ => (
                String::from("fft_output.txt"),
                String::from("fft_output_full.txt"),
            ),
        };

        Self {
            magnitude: output_dir.join(magnitude),
            full: output_dir.join(full),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let content = fs::read_to_string(&cli.input)
        .map_err(|error| format!("Cannot read {}: {error}", cli.input.display()))?;

    let samples = read_samples(&content, cli.lenient)?;
    if samples.is_empty() {
        return Err(format!("No valid data points in {}", cli.input.display()));
    }

    println!("Read {} data points", samples.len());
    println!("First {}: {}", PREVIEW_LEN, format_values(head(&samples)));
    println!("Last {}: {}", PREVIEW_LEN, format_values(tail(&samples)));

    let start = Instant::now();
    let spectrum = compute_fft(samples);
    let magnitude = magnitudes(&spectrum).map_err(|error| error.to_string())?;
    let elapsed = start.elapsed();

    println!(
        "FFT of {} points took {:.3} ms",
        magnitude.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "Complex spectrum, first {}: {}",
        PREVIEW_LEN,
        format_values(head(&spectrum))
    );
    println!(
        "Magnitude spectrum, first {}: {}",
        PREVIEW_LEN,
        format_values(head(&magnitude))
    );

    let paths = OutputPaths::new(&cli.input, &cli.output_dir);
    write_values(&paths.magnitude, &magnitude)?;
    write_values(&paths.full, &spectrum)?;
    println!("Magnitudes written to {}", paths.magnitude.display());
    println!("Complex spectrum written to {}", paths.full.display());

    match peak_bin(&magnitude) {
        Some((bin, value)) => println!("Peak magnitude {value} at bin {bin}"),
        None => println!("No finite peak in the magnitude spectrum"),
    }

    Ok(())
}

fn read_samples(content: &str, lenient: bool) -> Result<Vec<f32>, String> {
    if !lenient {
        return parse_samples(content).map_err(|error| error.to_string());
    }

    let report = parse_samples_lenient(content);
    for rejected in &report.rejected {
        tracing::warn!(
            line = rejected.line,
            content = %rejected.content,
            "skipping line that is not a number"
        );
    }
    if !report.rejected.is_empty() {
        tracing::info!(
            skipped = report.rejected.len(),
            kept = report.samples.len(),
            "lenient parse finished"
        );
    }

    Ok(report.samples)
}

fn head(values: &[f32]) -> &[f32] {
    &values[..values.len().min(PREVIEW_LEN)]
}

fn tail(values: &[f32]) -> &[f32] {
    &values[values.len().saturating_sub(PREVIEW_LEN)..]
}

fn format_values(values: &[f32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_values(path: &Path, values: &[f32]) -> Result<(), String> {
    let mut text = String::with_capacity(values.len() * 12);
    for value in values {
        text.push_str(&value.to_string());
        text.push('\n');
    }

    fs::write(path, text).map_err(|error| format!("Cannot write {}: {error}", path.display()))
}
