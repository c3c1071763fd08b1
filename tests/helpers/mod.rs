//! Test helpers and fixtures for doomloader integration tests.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact operations (passthrough, unity gain)
//! - `DSP_EPSILON` (1e-4): Comparisons against a reference formula
//! - `SILENCE_THRESHOLD` (0.0001): Silence detection (-80dB)

#![allow(dead_code)]

pub mod tolerances;

use doomloader::AmpSimulator;
use std::path::{Path, PathBuf};

/// Default test sample rate.
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Write a fixture file into `dir` and return its path.
pub fn write_fixture(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Simulator with a single metadata model named `clean_jazz` loaded.
pub fn loaded_simulator(dir: &Path) -> AmpSimulator {
    let path = write_fixture(dir, "clean_jazz.json", br#"{"name": "clean_jazz"}"#);
    let mut sim = AmpSimulator::new();
    sim.load_model(&path, None)
        .expect("Failed to load fixture model");
    sim
}

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// `amplitude * sin(2*pi*f*t)` with `t` spaced evenly over `[0, 1]`,
/// both ends included.
pub fn generate_unit_span_tone(frequency: f64, amplitude: f32, num_samples: usize) -> Vec<f32> {
    let last = num_samples.saturating_sub(1).max(1) as f64;
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / last;
            amplitude * (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate silence (zero samples).
pub fn generate_silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / (u32::MAX >> 1) as f32) * 2.0 - 1.0
        })
        .map(|s| s.clamp(-1.0, 1.0))
        .collect()
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// True when both buffers hold exactly the same bits.
pub fn bit_identical(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

/// Assert every sample lies in `[-1, 1]`.
pub fn assert_full_scale(samples: &[f32]) {
    if let Some((i, s)) = samples
        .iter()
        .enumerate()
        .find(|(_, s)| !(-1.0..=1.0).contains(*s))
    {
        panic!("Sample {} out of full scale: {}", i, s);
    }
}

/// Assert that a signal is approximately silent (all values near zero).
pub fn assert_silence(samples: &[f32], tolerance: f32) {
    let max = peak(samples);
    assert!(
        max <= tolerance,
        "Expected silence, but peak amplitude was {}",
        max
    );
}

/// Assert that a signal has content (not silent).
pub fn assert_has_audio(samples: &[f32], min_rms: f32) {
    let r = rms(samples);
    assert!(
        r >= min_rms,
        "Expected audio content with RMS >= {}, but RMS was {}",
        min_rms,
        r
    );
}
