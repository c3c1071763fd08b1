//! Directory discovery.

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions the loader understands (`.nam` models and `.json` metadata).
pub const NAM_EXTENSIONS: [&str; 2] = ["nam", "json"];

pub const AUDIO_EXTENSIONS: [&str; 3] = ["wav", "mp3", "flac"];

/// What a file is, judged by its extension (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Model,
    Metadata,
    Audio,
}

impl FileCategory {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = lowercase_extension(path)?;
        match ext.as_str() {
            "nam" => Some(FileCategory::Model),
            "json" => Some(FileCategory::Metadata),
            e if AUDIO_EXTENSIONS.contains(&e) => Some(FileCategory::Audio),
            _ => None,
        }
    }

    /// Key used for this category in reports and manifests.
    pub fn key(self) -> &'static str {
        match self {
            FileCategory::Model => "nam_files",
            FileCategory::Metadata => "metadata_files",
            FileCategory::Audio => "audio_files",
        }
    }
}

pub(crate) fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Files found under a directory, grouped by category. Each list is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResults {
    pub nam_files: Vec<PathBuf>,
    pub metadata_files: Vec<PathBuf>,
    pub audio_files: Vec<PathBuf>,
}

impl ScanResults {
    pub fn files(&self, category: FileCategory) -> &[PathBuf] {
        match category {
            FileCategory::Model => &self.nam_files,
            FileCategory::Metadata => &self.metadata_files,
            FileCategory::Audio => &self.audio_files,
        }
    }

    /// Categories paired with their files, in report order.
    pub fn by_category(&self) -> [(FileCategory, &[PathBuf]); 3] {
        [
            (FileCategory::Model, self.nam_files.as_slice()),
            (FileCategory::Metadata, self.metadata_files.as_slice()),
            (FileCategory::Audio, self.audio_files.as_slice()),
        ]
    }

    pub fn total(&self) -> usize {
        self.nam_files.len() + self.metadata_files.len() + self.audio_files.len()
    }

    fn push(&mut self, category: FileCategory, path: PathBuf) {
        match category {
            FileCategory::Model => self.nam_files.push(path),
            FileCategory::Metadata => self.metadata_files.push(path),
            FileCategory::Audio => self.audio_files.push(path),
        }
    }

    fn sort(&mut self) {
        self.nam_files.sort();
        self.metadata_files.sort();
        self.audio_files.sort();
    }
}

pub(crate) fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Regular files under `dir`. A failure on the root itself is an error;
/// unreadable entries below it are logged and skipped.
fn walk_files(dir: &Path, max_depth: usize) -> Result<Vec<DirEntry>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry),
            Ok(_) => {}
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => tracing::warn!("Skipping unreadable entry: {}", e),
        }
    }
    Ok(files)
}

/// `.nam` and `.json` files in `dir`, sorted. Subdirectories are searched
/// when `recursive` is set.
pub fn find_nam_files(dir: impl AsRef<Path>, recursive: bool) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    ensure_directory(dir)?;

    let depth = if recursive { usize::MAX } else { 1 };
    let mut found: Vec<PathBuf> = walk_files(dir, depth)?
        .into_iter()
        .map(DirEntry::into_path)
        .filter(|p| {
            lowercase_extension(p).is_some_and(|e| NAM_EXTENSIONS.contains(&e.as_str()))
        })
        .collect();
    found.sort();

    tracing::debug!("Found {} NAM files in {}", found.len(), dir.display());
    Ok(found)
}

/// Recursively group every recognized file under `dir`. Unrecognized files
/// are left out.
pub fn scan_directory(dir: impl AsRef<Path>) -> Result<ScanResults> {
    let dir = dir.as_ref();
    ensure_directory(dir)?;

    let mut results = ScanResults::default();
    for entry in walk_files(dir, usize::MAX)? {
        let path = entry.into_path();
        if let Some(category) = FileCategory::from_path(&path) {
            results.push(category, path);
        }
    }
    results.sort();

    tracing::debug!(
        "Scanned {}: {} models, {} metadata, {} audio",
        dir.display(),
        results.nam_files.len(),
        results.metadata_files.len(),
        results.audio_files.len()
    );
    Ok(results)
}
