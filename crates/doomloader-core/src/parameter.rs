//! Amp knobs: ranges, snapshots, and the clamping parameter store.
//!
//! Every knob has a fixed real-valued range. Values outside the range are
//! clamped on the way in rather than rejected, and unknown knob names are
//! ignored with a warning, so bulk updates are always best-effort.
//!
//! # Example
//!
//! ```
//! use doomloader_core::{Param, ParameterStore};
//!
//! let mut store = ParameterStore::new();
//! store.set("gain", 5.0);
//! assert_eq!(store.get(Param::Gain), 1.0);
//!
//! // Unknown names are a no-op
//! assert!(!store.set("presence", 0.3));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed real-valued range with a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    /// Minimum real value
    pub min: f32,
    /// Maximum real value
    pub max: f32,
    /// Default real value
    pub default: f32,
}

impl ParameterRange {
    /// Clamp a real value to this parameter's range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Check if a real value is within range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}

const GAIN_RANGE: ParameterRange = ParameterRange {
    min: 0.0,
    max: 1.0,
    default: 1.0,
};
const TONE_RANGE: ParameterRange = ParameterRange {
    min: 0.0,
    max: 1.0,
    default: 0.5,
};
const VOLUME_RANGE: ParameterRange = ParameterRange {
    min: 0.0,
    max: 1.0,
    default: 0.8,
};
const BIAS_RANGE: ParameterRange = ParameterRange {
    min: -1.0,
    max: 1.0,
    default: 0.0,
};

/// The four amp knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Input drive before saturation
    Gain,
    /// Saturation amount and harmonic content
    Tone,
    /// Output level
    Volume,
    /// DC offset added before saturation
    Bias,
}

impl Param {
    pub const ALL: [Param; 4] = [Param::Gain, Param::Tone, Param::Volume, Param::Bias];

    pub fn name(self) -> &'static str {
        match self {
            Param::Gain => "gain",
            Param::Tone => "tone",
            Param::Volume => "volume",
            Param::Bias => "bias",
        }
    }

    pub fn range(self) -> ParameterRange {
        match self {
            Param::Gain => GAIN_RANGE,
            Param::Tone => TONE_RANGE,
            Param::Volume => VOLUME_RANGE,
            Param::Bias => BIAS_RANGE,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a knob name is not one of `gain`, `tone`, `volume`, `bias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParam(pub String);

impl fmt::Display for UnknownParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown parameter: {}", self.0)
    }
}

impl std::error::Error for UnknownParam {}

impl FromStr for Param {
    type Err = UnknownParam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gain" => Ok(Param::Gain),
            "tone" => Ok(Param::Tone),
            "volume" => Ok(Param::Volume),
            "bias" => Ok(Param::Bias),
            other => Err(UnknownParam(other.to_string())),
        }
    }
}

/// Point-in-time copy of all knob values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSnapshot {
    pub gain: f32,
    pub tone: f32,
    pub volume: f32,
    pub bias: f32,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            gain: Param::Gain.range().default,
            tone: Param::Tone.range().default,
            volume: Param::Volume.range().default,
            bias: Param::Bias.range().default,
        }
    }
}

impl ParameterSnapshot {
    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::Gain => self.gain,
            Param::Tone => self.tone,
            Param::Volume => self.volume,
            Param::Bias => self.bias,
        }
    }

    fn slot_mut(&mut self, param: Param) -> &mut f32 {
        match param {
            Param::Gain => &mut self.gain,
            Param::Tone => &mut self.tone,
            Param::Volume => &mut self.volume,
            Param::Bias => &mut self.bias,
        }
    }

    /// Copy with every field clamped to its range. Non-finite fields fall
    /// back to the knob default.
    pub fn clamped(mut self) -> Self {
        for param in Param::ALL {
            let range = param.range();
            let slot = self.slot_mut(param);
            *slot = if slot.is_finite() {
                range.clamp(*slot)
            } else {
                range.default
            };
        }
        self
    }
}

/// Mutable, clamping store for the amp knobs.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    values: ParameterSnapshot,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: ParameterSnapshot) -> Self {
        Self {
            values: values.clamped(),
        }
    }

    /// Set a knob by name. Returns `false` (and logs a warning) when the
    /// name is unknown or the value is not finite; the store is unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<f64>) -> bool {
        match name.parse::<Param>() {
            Ok(param) => self.set_param(param, value),
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    /// Set a knob, clamping to its range.
    pub fn set_param(&mut self, param: Param, value: impl Into<f64>) -> bool {
        let value = value.into();
        if !value.is_finite() {
            tracing::warn!("Ignoring non-finite value for {}: {}", param, value);
            return false;
        }

        let range = param.range();
        let stored = if range.contains(value) {
            value as f32
        } else {
            let clamped = range.clamp(value as f32);
            tracing::debug!("Clamped {} from {} to {}", param, value, clamped);
            clamped
        };
        *self.values.slot_mut(param) = stored;
        true
    }

    /// Apply several named updates. Unknown names are skipped individually.
    /// Returns how many updates were applied.
    pub fn set_many<'a, I, V>(&mut self, params: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<f64>,
    {
        let mut applied = 0;
        for (name, value) in params {
            if self.set(name, value) {
                applied += 1;
            }
        }
        applied
    }

    pub fn get(&self, param: Param) -> f32 {
        self.values.get(param)
    }

    /// Snapshot copy; later changes to the store do not affect it.
    pub fn get_all(&self) -> ParameterSnapshot {
        self.values
    }

    pub fn reset(&mut self) {
        self.values = ParameterSnapshot::default();
    }
}
