//! Tolerance constants for audio testing.

/// Floating point rounding errors (for passthrough, exact gain).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Tolerance for full-buffer DSP comparisons against a reference formula.
pub const DSP_EPSILON: f32 = 1e-4;

/// Silence threshold (~-80dB).
/// Values below this are considered silent.
pub const SILENCE_THRESHOLD: f32 = 0.0001;
