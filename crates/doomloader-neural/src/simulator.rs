//! Amp simulator: model registry + knobs + signal chain.

use crate::error::{Error, LoadError, Result};
use crate::loader::ModelLoader;
use crate::record::ModelInfo;
use crate::registry::ModelRegistry;
use doomloader_core::{ParameterSnapshot, ParameterStore, SignalChain, SimulatorConfig};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

/// Soft-failure message returned by [`AmpSimulator::describe_model`].
pub const NO_MODEL_MESSAGE: &str = "No model specified or model not found";

/// Snapshot of the simulator's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationInfo {
    pub sample_rate: u32,
    pub current_model: Option<String>,
    pub loaded_models: Vec<String>,
    pub parameters: ParameterSnapshot,
    pub models_count: usize,
}

/// Guitar amp simulator driven by loaded NAM models.
///
/// The simulator is empty until the first successful [`load_model`], which
/// also selects that model. [`process`] is only available once a model is
/// selected.
///
/// The loaded model gates processing but does not shape it: the transform is
/// the fixed [`SignalChain`] driven by the current knob values. Model weights
/// are never read.
///
/// Not internally synchronized. Share across threads behind a mutex, or use
/// one simulator per worker.
///
/// [`load_model`]: AmpSimulator::load_model
/// [`process`]: AmpSimulator::process
#[derive(Debug)]
pub struct AmpSimulator {
    sample_rate: u32,
    loader: ModelLoader,
    registry: ModelRegistry,
    params: ParameterStore,
}

impl Default for AmpSimulator {
    fn default() -> Self {
        Self::from_config(SimulatorConfig::default())
    }
}

impl AmpSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AmpSimulatorBuilder {
        AmpSimulatorBuilder::default()
    }

    fn from_config(config: SimulatorConfig) -> Self {
        Self {
            sample_rate: config.sample_rate,
            loader: ModelLoader::new(),
            registry: ModelRegistry::new(),
            params: ParameterStore::with_values(config.parameters),
        }
    }

    /// Load a model file and register it.
    ///
    /// The name defaults to the file stem. The first model loaded becomes the
    /// current model. Returns the name the model was registered under.
    ///
    /// # Errors
    ///
    /// [`Error::ModelLoad`] for every loader-side failure, including a record
    /// that fails validation.
    pub fn load_model(&mut self, path: impl AsRef<Path>, name: Option<&str>) -> Result<String> {
        let path = path.as_ref();
        let name = name.map_or_else(|| stem_or(path, "unknown"), str::to_string);

        let wrap = |source: LoadError| Error::ModelLoad {
            path: path.to_path_buf(),
            source,
        };

        let record = self.loader.load(path).map_err(wrap)?;
        if !self.loader.validate(&record) {
            return Err(wrap(LoadError::InvalidModel(path.to_path_buf())));
        }

        self.registry.insert(name.clone(), record);
        Ok(name)
    }

    /// Make a loaded model current.
    pub fn select_model(&mut self, name: &str) -> Result<()> {
        self.registry.select(name)
    }

    /// Loaded model names, in load order.
    pub fn list_models(&self) -> Vec<String> {
        self.registry.names().to_vec()
    }

    pub fn current_model(&self) -> Option<&str> {
        self.registry.current()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Summary of a loaded model, or of the current model when `name` is `None`.
    ///
    /// # Errors
    ///
    /// [`Error::NoModelSelected`] when `name` is `None` and nothing is current,
    /// [`Error::UnknownModel`] when `name` is not loaded.
    pub fn model_info(&self, name: Option<&str>) -> Result<ModelInfo> {
        let name = match name.or_else(|| self.registry.current()) {
            Some(name) => name,
            None => return Err(Error::NoModelSelected),
        };

        let record = self.registry.get(name).ok_or_else(|| Error::UnknownModel {
            name: name.to_string(),
            available: self.list_models(),
        })?;

        Ok(self.loader.model_info(record))
    }

    /// Like [`model_info`](Self::model_info), but never fails: when no model
    /// resolves, returns `{"error": "..."}` instead.
    pub fn describe_model(&self, name: Option<&str>) -> Value {
        match self.model_info(name) {
            Ok(info) => serde_json::to_value(info)
                .unwrap_or_else(|e| json!({ "error": e.to_string() })),
            Err(e) => {
                tracing::debug!("describe_model: {}", e);
                json!({ "error": NO_MODEL_MESSAGE })
            }
        }
    }

    /// Set one knob by name. Unknown names are ignored with a warning.
    pub fn set_parameter(&mut self, name: &str, value: impl Into<f64>) -> bool {
        self.params.set(name, value)
    }

    /// Set several knobs by name. Returns how many were applied.
    pub fn set_parameters<'a, I, V>(&mut self, params: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<f64>,
    {
        self.params.set_many(params)
    }

    /// Copy of the current knob values.
    pub fn parameters(&self) -> ParameterSnapshot {
        self.params.get_all()
    }

    /// Run a mono buffer through the amp chain. The input is not modified.
    ///
    /// # Errors
    ///
    /// - [`Error::NoModelSelected`] before any model is loaded
    /// - [`Error::InvalidInput`] if any sample is NaN or infinite
    pub fn process(&self, buffer: &[f32]) -> Result<Vec<f32>> {
        if self.registry.current_record().is_none() {
            return Err(Error::NoModelSelected);
        }

        if let Some(index) = buffer.iter().position(|s| !s.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "non-finite sample {} at index {}",
                buffer[index], index
            )));
        }

        let chain = SignalChain::new(&self.params.get_all());
        Ok(chain.process_buffer(buffer))
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn simulation_info(&self) -> SimulationInfo {
        SimulationInfo {
            sample_rate: self.sample_rate,
            current_model: self.registry.current().map(str::to_string),
            loaded_models: self.list_models(),
            parameters: self.parameters(),
            models_count: self.registry.len(),
        }
    }
}

fn stem_or(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(fallback)
        .to_string()
}

/// Builder for [`AmpSimulator`].
#[derive(Debug, Clone, Default)]
pub struct AmpSimulatorBuilder {
    config: SimulatorConfig,
}

impl AmpSimulatorBuilder {
    /// Default: 44100
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.config.sample_rate = sample_rate;
        self
    }

    /// Initial knob values (clamped on build).
    pub fn parameters(mut self, parameters: ParameterSnapshot) -> Self {
        self.config.parameters = parameters;
        self
    }

    /// Replace sample rate and knobs with a loaded configuration.
    pub fn config(mut self, config: SimulatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<AmpSimulator> {
        self.config.validate()?;
        Ok(AmpSimulator::from_config(self.config))
    }
}
