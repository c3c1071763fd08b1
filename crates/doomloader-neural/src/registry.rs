//! Named model registry with a single current selection.

use crate::error::{Error, Result};
use crate::record::ModelRecord;
use std::collections::HashMap;

/// Models keyed by name, remembered in insertion order.
///
/// `current` is unset only while nothing has been inserted; the first insert
/// selects itself. There is no removal, so once a model is current the
/// registry never returns to an empty selection.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelRecord>,
    order: Vec<String>,
    current: Option<String>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a model. A replaced name keeps its original position.
    /// Returns the previous record stored under `name`, if any.
    pub fn insert(&mut self, name: impl Into<String>, record: ModelRecord) -> Option<ModelRecord> {
        let name = name.into();
        let previous = self.models.insert(name.clone(), record);

        if previous.is_none() {
            self.order.push(name.clone());
            tracing::info!("Registered model '{}'", name);
        } else {
            tracing::info!("Replaced model '{}'", name);
        }

        if self.current.is_none() {
            tracing::debug!("Auto-selected first model '{}'", name);
            self.current = Some(name);
        }

        previous
    }

    /// Make `name` the current model.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownModel`] if nothing is registered under `name`; the
    /// current selection is left as it was.
    pub fn select(&mut self, name: &str) -> Result<()> {
        if !self.models.contains_key(name) {
            return Err(Error::UnknownModel {
                name: name.to_string(),
                available: self.order.clone(),
            });
        }
        tracing::debug!("Selected model '{}'", name);
        self.current = Some(name.to_string());
        Ok(())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_record(&self) -> Option<&ModelRecord> {
        self.current.as_ref().and_then(|name| self.models.get(name))
    }

    pub fn get(&self, name: &str) -> Option<&ModelRecord> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelRecord)> {
        self.order
            .iter()
            .filter_map(|name| self.models.get(name).map(|record| (name.as_str(), record)))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> ModelRecord {
        ModelRecord::binary(path.into(), vec![0u8; 4])
    }

    #[test]
    fn test_registry_basic() {
        let registry = ModelRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.current(), None);
        assert!(registry.current_record().is_none());
    }

    #[test]
    fn test_first_insert_auto_selects() {
        let mut registry = ModelRegistry::new();
        registry.insert("plexi", record("plexi.nam"));
        registry.insert("twin", record("twin.nam"));

        assert_eq!(registry.current(), Some("plexi"));
        assert_eq!(
            registry.current_record().unwrap().origin_path(),
            std::path::Path::new("plexi.nam")
        );
    }

    #[test]
    fn test_insertion_order_kept_on_replace() {
        let mut registry = ModelRegistry::new();
        registry.insert("a", record("a.nam"));
        registry.insert("b", record("b.nam"));
        let previous = registry.insert("a", record("a2.nam"));

        assert!(previous.is_some());
        assert_eq!(registry.names(), ["a".to_string(), "b".to_string()]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("a").unwrap().origin_path(),
            std::path::Path::new("a2.nam")
        );

        let iterated: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(iterated, vec!["a", "b"]);
    }

    #[test]
    fn test_select_unknown_keeps_current() {
        let mut registry = ModelRegistry::new();
        registry.insert("plexi", record("plexi.nam"));

        let err = registry.select("nonexistent").unwrap_err();
        match err {
            Error::UnknownModel { name, available } => {
                assert_eq!(name, "nonexistent");
                assert_eq!(available, vec!["plexi".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(registry.current(), Some("plexi"));
    }

    #[test]
    fn test_select_switches_current() {
        let mut registry = ModelRegistry::new();
        registry.insert("a", record("a.nam"));
        registry.insert("b", record("b.nam"));
        registry.select("b").unwrap();
        assert_eq!(registry.current(), Some("b"));
        assert!(registry.contains("a"));
    }
}
