//! End-to-end scenarios: the engine driven block-by-block with scripted
//! controls, measured with the offline analysis tools. 48 kHz throughout.

use jabon_analysis::{dynamics, signal};
use jabon_engine::{AudioEngine, ControlFrame, Mode, SabStyle};

const SR: f32 = 48000.0;

/// Knob positions that map SAB onto its boot defaults (400 Hz, 50 Hz).
const NEUTRAL: ControlFrame = ControlFrame {
    knob1: 0.4,
    knob2: 0.5,
    encoder_delta: 0,
};

/// Run a mono signal through the engine as interleaved stereo blocks with a
/// fixed control frame, returning the left output channel.
fn run_mono(engine: &mut AudioEngine, mono: &[f32], block_frames: usize, controls: &ControlFrame) -> Vec<f32> {
    let stereo = signal::interleave_mono(mono);
    let mut out = vec![0.0f32; stereo.len()];
    for (in_block, out_block) in stereo
        .chunks(block_frames * 2)
        .zip(out.chunks_mut(block_frames * 2))
    {
        engine.process_block(in_block, out_block, controls);
    }
    signal::deinterleave(&out).0
}

#[test]
fn silence_in_silence_out() {
    // S1: one second of silence through SAB defaults, 4-frame blocks
    let mut engine = AudioEngine::new(SR).unwrap();
    let out = run_mono(&mut engine, &signal::silence(48000), 4, &NEUTRAL);
    assert!(out.iter().all(|s| s.abs() < 1e-6));
}

#[test]
fn sab_passes_the_band_and_rejects_off_band() {
    // S3: 400 Hz rings through; 4000 Hz leaves only the dry bleed
    let mut engine = AudioEngine::new(SR).unwrap();
    let on_band = run_mono(
        &mut engine,
        &signal::sine(SR, 400.0, 1.0, 4800),
        4,
        &NEUTRAL,
    );
    let on_rms = dynamics::rms(&on_band);
    assert!(on_rms > 0.1, "on-band RMS {} too low", on_rms);

    let mut engine = AudioEngine::new(SR).unwrap();
    let off_band = run_mono(
        &mut engine,
        &signal::sine(SR, 4000.0, 1.0, 4800),
        4,
        &NEUTRAL,
    );
    let off_rms = dynamics::rms(&off_band);
    // The 0.1-dry/2 blend floors the off-band output near 0.035 RMS
    assert!(off_rms < 0.04, "off-band RMS {} too high", off_rms);
    assert!(
        on_rms > 4.0 * off_rms,
        "selectivity below 12 dB: {} vs {}",
        on_rms,
        off_rms
    );
}

#[test]
fn direct_style_skips_tremolo_and_dry() {
    // The audition form is 3·soap(x): on a centered tone it runs hotter
    // than the composite and carries no tremolo wobble
    let tone = signal::sine(SR, 400.0, 0.25, 9600);

    let mut engine = AudioEngine::new(SR).unwrap();
    engine.set_sab_style(SabStyle::Direct);
    let direct = run_mono(&mut engine, &tone, 4, &NEUTRAL);

    let mut engine = AudioEngine::new(SR).unwrap();
    let composite = run_mono(&mut engine, &tone, 4, &NEUTRAL);

    assert!(dynamics::rms(&direct) > 2.0 * dynamics::rms(&composite));
}

#[test]
fn knob_sweep_slides_the_passband() {
    // S4: k1 sweeps 0 -> 1 over 1 s; with a 400 Hz probe the output level
    // peaks when the center crosses 400 Hz, i.e. 40% through the sweep.
    // Direct style isolates the filter from the tremolo envelope.
    let mut engine = AudioEngine::new(SR).unwrap();
    engine.set_sab_style(SabStyle::Direct);

    let blocks = 50;
    let block_frames = 960; // 20 ms
    let probe = signal::sine(SR, 400.0, 1.0, blocks * block_frames);
    let stereo = signal::interleave_mono(&probe);
    let mut out = vec![0.0f32; stereo.len()];

    let mut block_levels = Vec::with_capacity(blocks);
    for (i, (in_block, out_block)) in stereo
        .chunks(block_frames * 2)
        .zip(out.chunks_mut(block_frames * 2))
        .enumerate()
    {
        let controls = ControlFrame {
            knob1: i as f32 / blocks as f32,
            knob2: 0.5,
            encoder_delta: 0,
        };
        engine.process_block(in_block, out_block, &controls);
        let (left, _) = signal::deinterleave(out_block);
        block_levels.push(dynamics::rms(&left));
    }

    let peak_block = block_levels
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert!(
        (16..=24).contains(&peak_block),
        "passband peaked at block {} (center {} Hz), expected near 20",
        peak_block,
        peak_block as f32 * 20.0
    );
}

#[test]
fn encoder_steps_switch_mapping_without_cross_talk() {
    // S5: deltas [0, +1, +1] with knobs held at (0.3, 0.5)
    let mut engine = AudioEngine::new(SR).unwrap();
    let silence = signal::silence(4);
    let mut trace = Vec::new();

    for delta in [0, 1, 1] {
        let controls = ControlFrame {
            knob1: 0.3,
            knob2: 0.5,
            encoder_delta: delta,
        };
        run_mono(&mut engine, &silence, 4, &controls);
        trace.push(engine.mode());
    }

    assert_eq!(trace, [Mode::Sab, Mode::Bnp, Mode::Trm]);

    // Third block's active mapping is TRM
    assert!((engine.tremolo().rate() - 0.9).abs() < 1e-4);
    assert_eq!(engine.tremolo().depth(), 0.5);
    // SOAP parameters are unchanged from block 1, SVF from block 2
    assert_eq!(engine.soap().center_freq(), 300.0);
    assert_eq!(engine.soap().bandwidth(), 50.0);
    assert_eq!(engine.svf().cutoff(), 900.0);
}

#[test]
fn every_mode_is_mono_summed() {
    // Property 8: outR == outL in all three modes
    let tone = signal::sine(SR, 300.0, 0.8, 512);
    let stereo = signal::interleave_mono(&tone);

    for deltas in [0, 1, 2] {
        let mut engine = AudioEngine::new(SR).unwrap();
        let controls = ControlFrame {
            knob1: 0.6,
            knob2: 0.4,
            encoder_delta: deltas,
        };
        let mut out = vec![0.0f32; stereo.len()];
        engine.process_block(&stereo, &mut out, &controls);

        let (left, right) = signal::deinterleave(&out);
        assert_eq!(left, right, "mode {:?} not mono-summed", engine.mode());
    }
}

#[test]
fn block_size_does_not_change_audio() {
    // The dispatcher contract is per-sample; carving the same signal into
    // different block sizes must be inaudible when controls are static
    let tone = signal::sine(SR, 250.0, 0.5, 1920);

    let mut small = AudioEngine::new(SR).unwrap();
    let out_small = run_mono(&mut small, &tone, 4, &NEUTRAL);

    let mut large = AudioEngine::new(SR).unwrap();
    let out_large = run_mono(&mut large, &tone, 480, &NEUTRAL);

    assert_eq!(out_small, out_large);
}
