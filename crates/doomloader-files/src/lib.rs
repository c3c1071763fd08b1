//! File discovery and bookkeeping for NAM model directories.
//!
//! Files are categorized by extension: `.nam` models, `.json` metadata
//! sidecars, and `.wav`/`.mp3`/`.flac` audio. Everything else is ignored.
//!
//! ```rust,no_run
//! use doomloader_files::{scan_directory, validate_file_structure};
//!
//! let results = scan_directory("models")?;
//! println!("{} models", results.nam_files.len());
//!
//! let report = validate_file_structure("models")?;
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok::<(), doomloader_files::Error>(())
//! ```

mod error;
pub use error::{Error, Result};

mod scan;
pub use scan::{
    find_nam_files, scan_directory, FileCategory, ScanResults, AUDIO_EXTENSIONS, NAM_EXTENSIONS,
};

mod validate;
pub use validate::{validate_file_structure, FileCounts, ValidationReport};

mod manifest;
pub use manifest::{create_file_manifest, Manifest, ManifestEntry, ManifestSummary};

mod info;
pub use info::{file_info, format_size, FileInfo};
