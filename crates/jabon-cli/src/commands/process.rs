//! File-based engine processing command.

use clap::{Args, ValueEnum};
use jabon_analysis::dynamics;
use jabon_engine::{AudioEngine, ControlFrame, Mode, SabStyle};
use jabon_io::{WavSpec, read_wav_stereo, write_wav_stereo};
use std::path::PathBuf;
use tracing::debug;

/// Operating mode names for the CLI.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliMode {
    #[default]
    Sab,
    Bnp,
    Trm,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Sab => Mode::Sab,
            CliMode::Bnp => Mode::Bnp,
            CliMode::Trm => Mode::Trm,
        }
    }
}

/// SAB rendition names for the CLI.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliStyle {
    #[default]
    Composite,
    Direct,
}

impl From<CliStyle> for SabStyle {
    fn from(style: CliStyle) -> Self {
        match style {
            CliStyle::Composite => SabStyle::Composite,
            CliStyle::Direct => SabStyle::Direct,
        }
    }
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono is duplicated to both channels)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Operating mode
    #[arg(long, value_enum, default_value = "sab")]
    mode: CliMode,

    /// SAB rendition (composite = tremolo + dry blend, direct = 3x bandpass)
    #[arg(long, value_enum, default_value = "composite")]
    style: CliStyle,

    /// Knob 1 position (0-1)
    #[arg(long, default_value = "0.4")]
    knob1: f32,

    /// Knob 2 position (0-1)
    #[arg(long, default_value = "0.5")]
    knob2: f32,

    /// Ramp knob 1 from 0 to 1 across the file (overrides --knob1)
    #[arg(long)]
    sweep_knob1: bool,

    /// Block size in frames
    #[arg(long, default_value = "4")]
    block_size: usize,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.block_size > 0, "block size must be at least one frame");

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav_stereo(&args.input)?;
    let sample_rate = spec.sample_rate as f32;
    let num_frames = samples.len() / 2;

    println!(
        "  {} frames, {} Hz, {:.2}s",
        num_frames,
        spec.sample_rate,
        num_frames as f32 / sample_rate
    );

    let mut engine = AudioEngine::new(sample_rate)?;
    engine.set_sab_style(args.style.into());

    let target_mode = Mode::from(args.mode);
    let mut output = vec![0.0f32; samples.len()];
    let samples_per_block = args.block_size * 2;
    let num_blocks = samples.len().div_ceil(samples_per_block);

    for (i, (in_block, out_block)) in samples
        .chunks(samples_per_block)
        .zip(output.chunks_mut(samples_per_block))
        .enumerate()
    {
        let knob1 = if args.sweep_knob1 {
            i as f32 / num_blocks.max(1) as f32
        } else {
            args.knob1
        };
        let controls = ControlFrame {
            knob1,
            knob2: args.knob2,
            // Step onto the requested mode with the first block's tick
            encoder_delta: if i == 0 { i32::from(target_mode.index()) } else { 0 },
        };
        engine.process_block(in_block, out_block, &controls);
    }

    debug!(mode = ?engine.mode(), leds = ?engine.leds(), "final engine state");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:>6.1} dB, Peak {:>6.1} dB",
        dynamics::rms_db(&samples),
        dynamics::peak_db(&samples)
    );
    println!(
        "  Output: RMS {:>6.1} dB, Peak {:>6.1} dB",
        dynamics::rms_db(&output),
        dynamics::peak_db(&output)
    );

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &output, WavSpec { channels: 2, ..spec })?;
    println!("Done!");

    Ok(())
}
