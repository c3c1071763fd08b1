//! NAM file loading.
//!
//! Two file kinds are recognized, by extension (case-insensitive):
//!
//! - `.nam`: model files. The bytes are decoded as structured data; anything
//!   that does not decode is kept as an opaque [`RecordKind::BinaryFallback`]
//!   record instead of failing.
//! - `.json`: metadata sidecars. These must decode to an object.
//!
//! Decoding here is a stand-in: it proves the file deserializes, not that it
//! describes a usable network.

use crate::error::{LoadCause, LoadError};
use crate::record::{ModelInfo, ModelRecord, RecordKind};
use serde_json::{Map, Value};
use std::path::Path;

/// Recognized file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    NativeModel,
    Metadata,
}

impl FileFormat {
    pub const NATIVE_EXTENSION: &'static str = "nam";
    pub const METADATA_EXTENSION: &'static str = "json";

    /// Detect the format from the path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            Self::NATIVE_EXTENSION => Some(FileFormat::NativeModel),
            Self::METADATA_EXTENSION => Some(FileFormat::Metadata),
            _ => None,
        }
    }
}

/// Outcome of decoding a `.nam` file's bytes.
#[derive(Debug)]
enum NativeDecode {
    Mapping(Map<String, Value>),
    Scalar(Value),
    Opaque,
}

fn decode_native(bytes: &[u8]) -> Result<NativeDecode, serde_json::Error> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(NativeDecode::Mapping(map)),
        Ok(other) => Ok(NativeDecode::Scalar(other)),
        Err(e) if e.is_io() => Err(e),
        Err(e) => {
            tracing::debug!("Native decode failed ({}), keeping raw bytes", e);
            Ok(NativeDecode::Opaque)
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loads `.nam` models and `.json` metadata into [`ModelRecord`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelLoader;

impl ModelLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn supported_extensions(&self) -> [&'static str; 2] {
        [FileFormat::NATIVE_EXTENSION, FileFormat::METADATA_EXTENSION]
    }

    /// Load a model or metadata file.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] if `path` does not exist
    /// - [`LoadError::UnsupportedFormat`] for extensions other than `.nam` / `.json`
    /// - [`LoadError::LoadFailure`] on I/O errors, or malformed metadata
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ModelRecord, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let format = FileFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })?;

        let record = match format {
            FileFormat::NativeModel => self.load_native(path)?,
            FileFormat::Metadata => self.load_metadata(path)?,
        };

        tracing::debug!("Loaded {} as {}", path.display(), record.kind());
        Ok(record)
    }

    fn load_native(&self, path: &Path) -> Result<ModelRecord, LoadError> {
        let bytes = std::fs::read(path).map_err(|e| LoadError::failure(path, e))?;
        let file_size = std::fs::metadata(path)
            .map_err(|e| LoadError::failure(path, e))?
            .len();

        let mut map = match decode_native(&bytes).map_err(|e| LoadError::failure(path, e))? {
            NativeDecode::Mapping(map) => map,
            NativeDecode::Scalar(value) => {
                tracing::warn!(
                    "NAM file format may not be standard: {} holds a top-level {}",
                    path.display(),
                    value_kind(&value)
                );
                let mut map = Map::new();
                map.insert("raw_data".to_string(), value);
                map
            }
            NativeDecode::Opaque => return Ok(ModelRecord::binary(path.to_path_buf(), bytes)),
        };

        map.insert(
            "file_path".to_string(),
            Value::String(path.display().to_string()),
        );
        map.insert("file_size".to_string(), Value::from(file_size));
        map.insert(
            "model_type".to_string(),
            Value::from(RecordKind::NativeModel.type_tag()),
        );

        Ok(ModelRecord::native(path.to_path_buf(), file_size, map))
    }

    fn load_metadata(&self, path: &Path) -> Result<ModelRecord, LoadError> {
        let bytes = std::fs::read(path).map_err(|e| LoadError::failure(path, e))?;

        let mut map = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(LoadError::failure(
                    path,
                    LoadCause::NotAMapping(value_kind(&other)),
                ))
            }
            Err(e) => return Err(LoadError::failure(path, e)),
        };

        map.insert(
            "file_path".to_string(),
            Value::String(path.display().to_string()),
        );
        map.insert(
            "metadata_type".to_string(),
            Value::from(RecordKind::MetadataOnly.type_tag()),
        );

        Ok(ModelRecord::metadata(path.to_path_buf(), map))
    }

    /// Structural check: the record has an origin and a kind. The payload is
    /// not inspected.
    pub fn validate(&self, record: &ModelRecord) -> bool {
        !record.origin_path().as_os_str().is_empty()
    }

    pub fn model_info(&self, record: &ModelRecord) -> ModelInfo {
        let raw_len = record.raw_bytes().map(<[u8]>::len);

        ModelInfo {
            origin_path: record.origin_path().display().to_string(),
            record_kind: record.kind(),
            byte_size: record.byte_size().unwrap_or(0),
            is_valid: self.validate(record),
            has_raw_payload: raw_len.map(|_| true),
            payload_byte_length: raw_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_format_detection_is_case_insensitive() {
        assert_eq!(
            FileFormat::from_path(Path::new("amp.NAM")),
            Some(FileFormat::NativeModel)
        );
        assert_eq!(
            FileFormat::from_path(Path::new("/x/amp.Json")),
            Some(FileFormat::Metadata)
        );
        assert_eq!(FileFormat::from_path(Path::new("amp.wav")), None);
        assert_eq!(FileFormat::from_path(Path::new("amp")), None);
    }

    #[test]
    fn test_missing_file() {
        let err = ModelLoader::new().load("/no/such/model.nam").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_missing_file_wins_over_bad_extension() {
        let err = ModelLoader::new().load("/no/such/model.wav").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "take1.wav", b"RIFF");
        let err = ModelLoader::new().load(&path).unwrap_err();
        match err {
            LoadError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "wav"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_native_mapping_is_stamped() {
        let dir = TempDir::new().unwrap();
        let body = br#"{"version": "0.5.2", "architecture": "WaveNet"}"#;
        let path = write(&dir, "plexi.nam", body);

        let record = ModelLoader::new().load(&path).unwrap();
        assert_eq!(record.kind(), RecordKind::NativeModel);
        assert_eq!(record.byte_size(), Some(body.len() as u64));

        let map = record.as_mapping().unwrap();
        assert_eq!(map["architecture"], "WaveNet");
        assert_eq!(map["model_type"], "nam");
        assert_eq!(map["file_size"], body.len() as u64);
        assert_eq!(map["file_path"], path.display().to_string());
    }

    #[test]
    fn test_native_scalar_is_wrapped() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "odd.nam", b"[1, 2, 3]");

        let record = ModelLoader::new().load(&path).unwrap();
        assert_eq!(record.kind(), RecordKind::NativeModel);
        let map = record.as_mapping().unwrap();
        assert_eq!(map["raw_data"], serde_json::json!([1, 2, 3]));
        assert_eq!(map["model_type"], "nam");
    }

    #[test]
    fn test_undecodable_native_falls_back_to_bytes() {
        let dir = TempDir::new().unwrap();
        let body = [0x80u8, 0x04, 0x95, 0x00, 0xff];
        let path = write(&dir, "weights.nam", &body);

        let record = ModelLoader::new().load(&path).unwrap();
        assert_eq!(record.kind(), RecordKind::BinaryFallback);
        assert_eq!(record.raw_bytes(), Some(&body[..]));
        assert_eq!(record.byte_size(), Some(5));
        assert!(record.needs_processing());
    }

    #[test]
    fn test_empty_native_falls_back_to_bytes() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.nam", b"");
        let record = ModelLoader::new().load(&path).unwrap();
        assert_eq!(record.kind(), RecordKind::BinaryFallback);
        assert_eq!(record.byte_size(), Some(0));
    }

    #[test]
    fn test_metadata_is_stamped_without_size() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "clean_jazz.json", br#"{"name": "clean_jazz"}"#);

        let record = ModelLoader::new().load(&path).unwrap();
        assert_eq!(record.kind(), RecordKind::MetadataOnly);
        assert_eq!(record.byte_size(), None);
        let map = record.as_mapping().unwrap();
        assert_eq!(map["metadata_type"], "nam_config");
        assert_eq!(map["name"], "clean_jazz");
        assert!(map.get("file_size").is_none());
    }

    #[test]
    fn test_malformed_metadata_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", b"{\"name\": ");
        let err = ModelLoader::new().load(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::LoadFailure {
                cause: LoadCause::Parse(_),
                ..
            }
        ));
    }

    #[test]
    fn test_non_mapping_metadata_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "list.json", b"[\"a\"]");
        let err = ModelLoader::new().load(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::LoadFailure {
                cause: LoadCause::NotAMapping("array"),
                ..
            }
        ));
    }

    #[test]
    fn test_directory_with_model_extension_is_load_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folder.nam");
        fs::create_dir(&path).unwrap();
        let err = ModelLoader::new().load(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::LoadFailure {
                cause: LoadCause::Io(_),
                ..
            }
        ));
    }

    #[test]
    fn test_validate_is_structural() {
        let loader = ModelLoader::new();
        let ok = ModelRecord::binary("a.nam".into(), vec![]);
        assert!(loader.validate(&ok));

        let no_origin = ModelRecord::metadata(PathBuf::new(), Map::new());
        assert!(!loader.validate(&no_origin));
    }

    #[test]
    fn test_model_info_for_binary() {
        let loader = ModelLoader::new();
        let record = ModelRecord::binary("w.nam".into(), vec![9; 16]);
        let info = loader.model_info(&record);
        assert_eq!(info.record_kind, RecordKind::BinaryFallback);
        assert_eq!(info.byte_size, 16);
        assert!(info.is_valid);
        assert_eq!(info.has_raw_payload, Some(true));
        assert_eq!(info.payload_byte_length, Some(16));
    }

    #[test]
    fn test_model_info_for_metadata_defaults_size() {
        let loader = ModelLoader::new();
        let record = ModelRecord::metadata("m.json".into(), Map::new());
        let info = loader.model_info(&record);
        assert_eq!(info.byte_size, 0);
        assert_eq!(info.has_raw_payload, None);
        assert_eq!(info.payload_byte_length, None);
    }
}
