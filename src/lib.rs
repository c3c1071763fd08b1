//! # DOOMLOADER
//!
//! Loading for Neural Amp Modeler (NAM) files and a deterministic amp
//! simulation chain.
//!
//! ## Architecture
//!
//! The umbrella crate re-exports:
//! - **doomloader-core** - Amp knobs, signal chain stages, simulator config
//! - **doomloader-neural** - Model loader, model registry, [`AmpSimulator`]
//! - **doomloader-files** - Directory scanning, validation, manifests
//!
//! ## Quick Start
//!
//! ```no_run
//! use doomloader::prelude::*;
//!
//! let mut sim = AmpSimulator::builder().sample_rate(44100).build()?;
//! sim.load_model("models/clean_jazz.json", None)?;
//! sim.set_parameters([("gain", 0.8), ("tone", 0.6)]);
//!
//! let input = vec![0.0f32; 512];
//! let output = sim.process(&input)?;
//! # let _ = output;
//! # Ok::<(), doomloader::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Everything below
//! - `files` - NAM directory scanning and manifests

mod error;
pub use error::{Error, Result};

/// Re-export of doomloader-core for direct access
pub use doomloader_core as core;

pub use doomloader_core::{
    Param, ParameterRange, ParameterSnapshot, ParameterStore, SignalChain, SimulatorConfig, Stage,
};

/// Re-export of doomloader-neural for direct access
pub use doomloader_neural as neural;

pub use doomloader_neural::{
    AmpSimulator, AmpSimulatorBuilder, ModelInfo, ModelLoader, ModelRecord, ModelRegistry,
    RecordKind, SimulationInfo,
};

// File handling
#[cfg(feature = "files")]
pub use doomloader_files as files;

#[cfg(feature = "files")]
pub use doomloader_files::{
    create_file_manifest, file_info, find_nam_files, scan_directory, validate_file_structure,
};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{AmpSimulator, AmpSimulatorBuilder, ModelLoader, ModelRecord, RecordKind};

    pub use crate::core::{ParameterSnapshot, SignalChain, SimulatorConfig, Stage};

    #[cfg(feature = "files")]
    pub use crate::files::{scan_directory, validate_file_structure};
}
