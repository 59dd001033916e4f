//! Test signal generation command.

use clap::{Args, Subcommand};
use jabon_analysis::signal;
use jabon_io::{WavSpec, write_wav};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate an impulse
    Impulse {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Length in samples
        #[arg(long, default_value = "48000")]
        length: usize,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Impulse amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f32,
    },

    /// Generate silence
    Silence {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let num_samples = (duration * sample_rate as f32) as usize;
            let samples = signal::sine(sample_rate as f32, freq, amplitude, num_samples);
            write(&output, &samples, sample_rate)?;
            println!(
                "Wrote {:.1} Hz tone, {} samples, to {}",
                freq,
                num_samples,
                output.display()
            );
        }
        GenerateCommand::Impulse {
            output,
            length,
            sample_rate,
            amplitude,
        } => {
            let samples = signal::impulse(amplitude, length);
            write(&output, &samples, sample_rate)?;
            println!("Wrote impulse, {} samples, to {}", length, output.display());
        }
        GenerateCommand::Silence {
            output,
            duration,
            sample_rate,
        } => {
            let num_samples = (duration * sample_rate as f32) as usize;
            let samples = signal::silence(num_samples);
            write(&output, &samples, sample_rate)?;
            println!("Wrote silence, {} samples, to {}", num_samples, output.display());
        }
    }

    Ok(())
}

fn write(path: &Path, samples: &[f32], sample_rate: u32) -> anyhow::Result<()> {
    let spec = WavSpec {
        sample_rate,
        ..WavSpec::default()
    };
    write_wav(path, samples, spec)?;
    Ok(())
}
