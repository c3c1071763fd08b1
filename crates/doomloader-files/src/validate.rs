//! Model directory structure checks.

use crate::error::Result;
use crate::scan::{scan_directory, ScanResults};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub nam_files: usize,
    pub metadata_files: usize,
    pub audio_files: usize,
    pub total_files: usize,
}

impl From<&ScanResults> for FileCounts {
    fn from(results: &ScanResults) -> Self {
        Self {
            nam_files: results.nam_files.len(),
            metadata_files: results.metadata_files.len(),
            audio_files: results.audio_files.len(),
            total_files: results.total(),
        }
    }
}

/// Outcome of [`validate_file_structure`].
///
/// Only errors make a directory invalid. Warnings flag things worth a look,
/// such as models with no metadata sidecar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub file_counts: FileCounts,
}

fn stems(paths: &[PathBuf]) -> BTreeSet<String> {
    paths
        .iter()
        .filter_map(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .collect()
}

/// Check that `dir` holds at least one model, and that models and metadata
/// files pair up by stem.
pub fn validate_file_structure(dir: impl AsRef<Path>) -> Result<ValidationReport> {
    let results = scan_directory(dir)?;
    let mut report = ValidationReport {
        is_valid: true,
        file_counts: FileCounts::from(&results),
        ..Default::default()
    };

    if results.nam_files.is_empty() {
        report.errors.push("No .nam files found".to_string());
        report.is_valid = false;
    }

    if results.metadata_files.is_empty() {
        report
            .warnings
            .push("No metadata (.json) files found".to_string());
    }

    let nam_stems = stems(&results.nam_files);
    let json_stems = stems(&results.metadata_files);

    let unpaired_nam: Vec<&String> = nam_stems.difference(&json_stems).collect();
    if !unpaired_nam.is_empty() {
        report
            .warnings
            .push(format!("NAM files without metadata: {:?}", unpaired_nam));
    }

    let unpaired_json: Vec<&String> = json_stems.difference(&nam_stems).collect();
    if !unpaired_json.is_empty() {
        report
            .warnings
            .push(format!("Metadata files without NAM files: {:?}", unpaired_json));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), b"{}").unwrap();
    }

    #[test]
    fn test_paired_directory_is_clean() {
        let dir = TempDir::new().unwrap();
        write(&dir, "plexi.nam");
        write(&dir, "plexi.json");

        let report = validate_file_structure(dir.path()).unwrap();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.file_counts.total_files, 2);
    }

    #[test]
    fn test_no_models_is_invalid() {
        let dir = TempDir::new().unwrap();
        write(&dir, "orphan.json");

        let report = validate_file_structure(dir.path()).unwrap();
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["No .nam files found".to_string()]);
        assert_eq!(
            report.warnings,
            vec![r#"Metadata files without NAM files: ["orphan"]"#.to_string()]
        );
    }

    #[test]
    fn test_missing_metadata_warns() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.nam");
        write(&dir, "a.nam");
        write(&dir, "take.wav");

        let report = validate_file_structure(dir.path()).unwrap();
        assert!(report.is_valid);
        assert_eq!(report.file_counts.audio_files, 1);
        assert_eq!(
            report.warnings,
            vec![
                "No metadata (.json) files found".to_string(),
                r#"NAM files without metadata: ["a", "b"]"#.to_string(),
            ]
        );
    }
}
