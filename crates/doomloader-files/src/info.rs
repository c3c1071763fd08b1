//! Single-file details.

use crate::error::{Error, Result};
use crate::scan::{lowercase_extension, FileCategory, NAM_EXTENSIONS};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub stem: String,
    /// Extension with its leading dot, or empty.
    pub suffix: String,
    pub size: u64,
    pub size_human: String,
    pub is_nam_file: bool,
    pub is_supported: bool,
    pub parent_directory: String,
}

/// Render a byte count as KB below 1024 KB, MB above, one decimal place.
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{:.1} KB", kb)
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}

pub fn file_info(path: impl AsRef<Path>) -> Result<FileInfo> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let size = std::fs::metadata(path)?.len();
    let lossy = |s: Option<&std::ffi::OsStr>| {
        s.map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    let is_nam_file =
        lowercase_extension(path).is_some_and(|e| NAM_EXTENSIONS.contains(&e.as_str()));

    Ok(FileInfo {
        name: lossy(path.file_name()),
        stem: lossy(path.file_stem()),
        suffix: path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default(),
        size,
        size_human: format_size(size),
        is_nam_file,
        is_supported: FileCategory::from_path(path).is_some(),
        parent_directory: path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    })
}
