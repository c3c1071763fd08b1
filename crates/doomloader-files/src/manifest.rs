//! JSON manifests of a model directory.

use crate::error::Result;
use crate::scan::scan_directory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    /// Relative to the manifest directory.
    pub path: String,
    pub size: u64,
    /// Original-case extension with its leading dot, or empty.
    pub extension: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSummary {
    pub total_files: usize,
    pub file_types: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub directory: String,
    /// Unix seconds.
    pub created_at: u64,
    pub file_structure: BTreeMap<String, Vec<ManifestEntry>>,
    pub summary: ManifestSummary,
}

impl Manifest {
    /// Write as pretty-printed JSON.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!("Wrote manifest to {}", path.display());
        Ok(())
    }
}

fn entry(dir: &Path, path: &Path) -> Result<ManifestEntry> {
    let size = std::fs::metadata(path)?.len();
    let relative = path.strip_prefix(dir).unwrap_or(path);

    Ok(ManifestEntry {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: relative.display().to_string(),
        size,
        extension: path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default(),
    })
}

/// Inventory every recognized file under `dir`, and write it to `output`
/// when one is given.
pub fn create_file_manifest(dir: impl AsRef<Path>, output: Option<&Path>) -> Result<Manifest> {
    let dir = dir.as_ref();
    let results = scan_directory(dir)?;

    let mut manifest = Manifest {
        directory: dir.display().to_string(),
        created_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
        file_structure: BTreeMap::new(),
        summary: ManifestSummary::default(),
    };

    for (category, files) in results.by_category() {
        let entries = files
            .iter()
            .map(|path| entry(dir, path))
            .collect::<Result<Vec<_>>>()?;

        manifest.summary.total_files += entries.len();
        manifest
            .summary
            .file_types
            .insert(category.key().to_string(), entries.len());
        manifest
            .file_structure
            .insert(category.key().to_string(), entries);
    }

    if let Some(output) = output {
        manifest.write(output)?;
    }

    Ok(manifest)
}
