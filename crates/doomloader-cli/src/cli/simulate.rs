use crate::error::{CliError, Result};
use clap::Args;
use doomloader::{AmpSimulator, SimulatorConfig};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::{Path, PathBuf};

pub const TEST_TONE_HZ: f32 = 440.0;
pub const TEST_TONE_AMPLITUDE: f32 = 0.3;
/// Longest test tone `simulate` will render.
pub const MAX_DURATION_SECS: f32 = 600.0;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Model (.nam) or metadata (.json) file.
    pub model: PathBuf,
    /// Overrides the config file's sample rate.
    #[arg(long)]
    pub sample_rate: Option<u32>,
    /// Input gain (0.0-1.0).
    #[arg(long)]
    pub gain: Option<f32>,
    /// Tone (0.0-1.0).
    #[arg(long)]
    pub tone: Option<f32>,
    /// Output volume (0.0-1.0).
    #[arg(long)]
    pub volume: Option<f32>,
    /// DC bias (-1.0-1.0).
    #[arg(long, allow_negative_numbers = true)]
    pub bias: Option<f32>,
    /// Test tone length in seconds.
    #[arg(long, default_value_t = 1.0)]
    pub duration: f32,
    /// TOML file with sample_rate and [parameters].
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Write the processed tone to a mono 32-bit float WAV.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    if !(args.duration.is_finite() && args.duration > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "duration must be a positive number of seconds, got {}",
            args.duration
        )));
    }
    if args.duration > MAX_DURATION_SECS {
        return Err(CliError::InvalidArgument(format!(
            "duration must be at most {MAX_DURATION_SECS} seconds, got {}",
            args.duration
        )));
    }

    let mut config = match &args.config {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    if let Some(sample_rate) = args.sample_rate {
        config.sample_rate = sample_rate;
    }

    let mut sim = AmpSimulator::builder().config(config).build()?;
    let name = sim.load_model(&args.model, None)?;

    let knobs = [
        ("gain", args.gain),
        ("tone", args.tone),
        ("volume", args.volume),
        ("bias", args.bias),
    ];
    sim.set_parameters(knobs.into_iter().filter_map(|(k, v)| Some((k, v?))));

    let input = test_tone(sim.sample_rate(), args.duration);
    let output = sim.process(&input)?;
    let params = sim.parameters();

    println!("Model: {name}");
    println!("  Sample rate: {} Hz", sim.sample_rate());
    println!(
        "  Parameters: gain={:.2} tone={:.2} volume={:.2} bias={:.2}",
        params.gain, params.tone, params.volume, params.bias
    );
    println!("  Samples: {}", output.len());
    println!(
        "  Input:  peak {:.4}, rms {:.4}",
        peak(&input),
        rms(&input)
    );
    println!(
        "  Output: peak {:.4}, rms {:.4}",
        peak(&output),
        rms(&output)
    );

    if let Some(path) = &args.output {
        write_wav(path, &output, sim.sample_rate())?;
        println!("  Wrote {}", path.display());
    }

    Ok(())
}

/// 440 Hz sine at 0.3 amplitude.
pub fn test_tone(sample_rate: u32, duration_secs: f32) -> Vec<f32> {
    let n = (duration_secs * sample_rate as f32) as usize;
    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            TEST_TONE_AMPLITUDE * (2.0 * std::f32::consts::PI * TEST_TONE_HZ * t).sin()
        })
        .collect()
}

pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    tracing::debug!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
