//! Level and spectral analysis commands.

use clap::{Args, Subcommand};
use jabon_analysis::{Window, dynamics, spectrum};
use jabon_io::read_wav;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    command: AnalyzeCommand,
}

#[derive(Subcommand)]
enum AnalyzeCommand {
    /// Report RMS and peak levels
    Rms {
        /// Input WAV file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Report the dominant spectral peak
    Spectrum {
        /// Input WAV file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// FFT size
        #[arg(long, default_value = "4096")]
        fft_size: usize,
    },
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    match args.command {
        AnalyzeCommand::Rms { input } => {
            let (samples, spec) = read_wav(&input)?;
            println!("{}:", input.display());
            println!(
                "  {} samples, {} Hz, {:.2}s",
                samples.len(),
                spec.sample_rate,
                samples.len() as f32 / spec.sample_rate as f32
            );
            println!(
                "  RMS  {:>7.2} dB ({:.6} linear)",
                dynamics::rms_db(&samples),
                dynamics::rms(&samples)
            );
            println!(
                "  Peak {:>7.2} dB ({:.6} linear)",
                dynamics::peak_db(&samples),
                dynamics::peak(&samples)
            );
        }
        AnalyzeCommand::Spectrum { input, fft_size } => {
            anyhow::ensure!(
                fft_size.is_power_of_two() && fft_size >= 64,
                "FFT size must be a power of two >= 64"
            );

            let (samples, spec) = read_wav(&input)?;
            let sample_rate = spec.sample_rate as f32;

            // Analyze a chunk from the middle of the file, past any transient
            let start = samples.len().saturating_sub(fft_size) / 2;
            let chunk = &samples[start..(start + fft_size).min(samples.len())];

            let mag = spectrum::magnitude_spectrum(chunk, fft_size, Window::Hann);
            let peak_hz = spectrum::peak_frequency(&mag, sample_rate);

            println!("{}:", input.display());
            println!("  FFT size {}, Hann window", fft_size);
            println!("  Dominant peak at {:.1} Hz", peak_hz);
        }
    }

    Ok(())
}
