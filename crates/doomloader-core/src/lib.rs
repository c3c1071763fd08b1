//! Numeric core of the DOOMLOADER amp simulator.
//!
//! # Primary API
//!
//! - [`ParameterStore`] / [`ParameterSnapshot`]: the four clamped amp knobs
//! - [`SignalChain`]: pre-emphasis, saturation and post-gain stages
//! - [`SimulatorConfig`]: sample rate and default knobs, loadable from TOML
//!
//! # Example
//!
//! ```
//! use doomloader_core::{ParameterStore, SignalChain};
//!
//! let mut params = ParameterStore::new();
//! params.set("tone", 0.8);
//!
//! let chain = SignalChain::new(&params.get_all());
//! let out = chain.process_buffer(&[0.0, 0.25, -0.5]);
//! assert_eq!(out.len(), 3);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::SimulatorConfig;

pub mod parameter;
pub use parameter::{Param, ParameterRange, ParameterSnapshot, ParameterStore, UnknownParam};

pub mod chain;
pub use chain::{PostGain, PreEmphasis, Saturation, SignalChain, Stage};
