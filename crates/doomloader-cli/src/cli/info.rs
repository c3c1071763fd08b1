use crate::error::Result;
use doomloader::files::file_info;
use doomloader::AmpSimulator;
use std::path::Path;

pub fn run(file: &Path, detailed: bool) -> Result<()> {
    let mut sim = AmpSimulator::new();
    let name = sim.load_model(file, None)?;
    let info = sim.model_info(Some(&name))?;

    println!("Model: {name}");
    println!("  Path: {}", info.origin_path);
    println!("  Type: {}", info.record_kind);
    println!("  Size: {} bytes", info.byte_size);
    println!("  Valid: {}", info.is_valid);
    if let Some(len) = info.payload_byte_length {
        println!("  Raw payload: {len} bytes (needs processing)");
    }

    if !detailed {
        return Ok(());
    }

    if let Some(record) = sim.registry().get(&name) {
        if let Some(display_name) = record.display_name() {
            println!("  Name: {display_name}");
        }
        let keys = record.payload_keys();
        if !keys.is_empty() {
            println!("  Keys: {}", keys.join(", "));
        }
    }

    let details = file_info(file)?;
    println!("  File size: {}", details.size_human);
    println!("  Directory: {}", details.parent_directory);
    println!("  Supported: {}", details.is_supported);

    Ok(())
}
