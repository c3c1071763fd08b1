//! The amp-simulation signal chain.
//!
//! Three fixed stages run in order over a mono buffer:
//!
//! 1. [`PreEmphasis`]: `clamp(x * gain + bias, -1, 1)`
//! 2. [`Saturation`]: `tanh(x * drive) / drive + sin(x * pi) * tone * 0.1`,
//!    clamped, where `drive = 1 + tone * 4`
//! 3. [`PostGain`]: `clamp(y * volume, -1, 1)`
//!
//! The saturation stage is a fixed curve standing in for model inference. It
//! never reads model weights; only the knob snapshot shapes the output.
//!
//! Every stage is stateless, so the chain is a pure function of the input
//! buffer and the [`ParameterSnapshot`] it was built from.

use crate::parameter::ParameterSnapshot;
use std::f32::consts::PI;

/// A memoryless per-sample processing stage.
pub trait Stage {
    /// Process a single sample.
    fn tick(&self, input: f32) -> f32;

    /// Process a block in place.
    #[inline]
    fn process(&self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.tick(*sample);
        }
    }
}

/// Input gain plus DC bias, hard-limited to full scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreEmphasis {
    pub gain: f32,
    pub bias: f32,
}

impl Stage for PreEmphasis {
    #[inline]
    fn tick(&self, input: f32) -> f32 {
        (input * self.gain + self.bias).clamp(-1.0, 1.0)
    }
}

/// Tube-style soft clipper with a tone-scaled second harmonic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation {
    pub tone: f32,
    drive: f32,
}

impl Saturation {
    pub const HARMONIC_MIX: f32 = 0.1;
    pub const DRIVE_RANGE: f32 = 4.0;

    pub fn new(tone: f32) -> Self {
        Self {
            tone,
            drive: 1.0 + tone * Self::DRIVE_RANGE,
        }
    }

    pub fn drive(&self) -> f32 {
        self.drive
    }
}

impl Stage for Saturation {
    #[inline]
    fn tick(&self, input: f32) -> f32 {
        let shaped = (input * self.drive).tanh() / self.drive;
        let harmonic = (input * PI).sin() * self.tone * Self::HARMONIC_MIX;
        (shaped + harmonic).clamp(-1.0, 1.0)
    }
}

/// Output level, hard-limited to full scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostGain {
    pub volume: f32,
}

impl Stage for PostGain {
    #[inline]
    fn tick(&self, input: f32) -> f32 {
        (input * self.volume).clamp(-1.0, 1.0)
    }
}

/// Pre-emphasis, saturation and post-gain, built from one knob snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalChain {
    pre: PreEmphasis,
    saturation: Saturation,
    post: PostGain,
}

impl SignalChain {
    pub fn new(params: &ParameterSnapshot) -> Self {
        Self {
            pre: PreEmphasis {
                gain: params.gain,
                bias: params.bias,
            },
            saturation: Saturation::new(params.tone),
            post: PostGain {
                volume: params.volume,
            },
        }
    }

    /// Run the chain into a new buffer. The input is left untouched.
    pub fn process_buffer(&self, input: &[f32]) -> Vec<f32> {
        let mut output = input.to_vec();
        self.process(&mut output);
        output
    }

    pub fn pre_emphasis(&self) -> &PreEmphasis {
        &self.pre
    }

    pub fn saturation(&self) -> &Saturation {
        &self.saturation
    }

    pub fn post_gain(&self) -> &PostGain {
        &self.post
    }
}

impl Stage for SignalChain {
    #[inline]
    fn tick(&self, input: f32) -> f32 {
        self.post.tick(self.saturation.tick(self.pre.tick(input)))
    }

    // Stage-major order: each stage sweeps the whole block before the next.
    fn process(&self, buffer: &mut [f32]) {
        self.pre.process(buffer);
        self.saturation.process(buffer);
        self.post.process(buffer);
    }
}
