//! NAM model loading and the amp simulator.
//!
//! [`ModelLoader`] turns `.nam` model files and `.json` metadata sidecars into
//! [`ModelRecord`]s. [`AmpSimulator`] keeps the loaded records in a
//! [`ModelRegistry`], holds the amp knobs and runs audio through the
//! [`SignalChain`](doomloader_core::SignalChain).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doomloader_neural::AmpSimulator;
//!
//! let mut sim = AmpSimulator::builder().sample_rate(48000).build()?;
//! let name = sim.load_model("models/clean_jazz.nam", None)?;
//! sim.set_parameter("tone", 0.7);
//!
//! let out = sim.process(&[0.0, 0.25, -0.5])?;
//! assert_eq!(out.len(), 3);
//! # let _ = name;
//! # Ok::<(), doomloader_neural::Error>(())
//! ```

mod error;
pub use error::{Error, LoadCause, LoadError, Result};

mod record;
pub use record::{ModelInfo, ModelRecord, Payload, RecordKind};

mod loader;
pub use loader::{FileFormat, ModelLoader};

mod registry;
pub use registry::ModelRegistry;

mod simulator;
pub use simulator::{AmpSimulator, AmpSimulatorBuilder, SimulationInfo, NO_MODEL_MESSAGE};
