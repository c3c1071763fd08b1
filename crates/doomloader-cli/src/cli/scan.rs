use crate::error::Result;
use doomloader::files::{create_file_manifest, scan_directory, validate_file_structure};
use std::path::Path;

pub fn run(directory: &Path, validate: bool, manifest: Option<&Path>) -> Result<()> {
    let results = scan_directory(directory)?;

    println!("Scanning directory: {}", directory.display());
    for (category, files) in results.by_category() {
        println!("  {}: {}", category.key(), files.len());
    }
    for path in &results.nam_files {
        println!("    {}", path.display());
    }
    println!("  total: {}", results.total());

    if validate {
        let report = validate_file_structure(directory)?;
        println!();
        println!(
            "Structure: {}",
            if report.is_valid { "valid" } else { "invalid" }
        );
        for error in &report.errors {
            println!("  error: {error}");
        }
        for warning in &report.warnings {
            println!("  warning: {warning}");
        }
    }

    if let Some(output) = manifest {
        let manifest = create_file_manifest(directory, Some(output))?;
        println!();
        println!(
            "Manifest with {} files written to {}",
            manifest.summary.total_files,
            output.display()
        );
    }

    Ok(())
}
