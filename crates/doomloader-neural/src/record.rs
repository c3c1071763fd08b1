//! Loaded model records.

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// How a record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A `.nam` file that deserialized to structured data.
    NativeModel,
    /// A `.nam` file that did not deserialize; kept as raw bytes.
    BinaryFallback,
    /// A `.json` metadata sidecar.
    MetadataOnly,
}

impl RecordKind {
    /// Tag stamped into mapping payloads (`model_type` / `metadata_type`).
    pub fn type_tag(self) -> &'static str {
        match self {
            RecordKind::NativeModel => "nam",
            RecordKind::BinaryFallback => "nam_binary",
            RecordKind::MetadataOnly => "nam_config",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::NativeModel => "native_model",
            RecordKind::BinaryFallback => "binary_fallback",
            RecordKind::MetadataOnly => "metadata_only",
        };
        f.write_str(name)
    }
}

/// Record contents, one variant per [`RecordKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Decoded `.nam` mapping and the size of the file it came from.
    Native {
        mapping: Map<String, Value>,
        file_size: u64,
    },
    /// `.json` sidecar mapping.
    Metadata(Map<String, Value>),
    /// Undecodable `.nam` file contents.
    Binary(Vec<u8>),
}

impl Payload {
    pub fn kind(&self) -> RecordKind {
        match self {
            Payload::Native { .. } => RecordKind::NativeModel,
            Payload::Metadata(_) => RecordKind::MetadataOnly,
            Payload::Binary(_) => RecordKind::BinaryFallback,
        }
    }
}

/// One loaded model file or metadata sidecar.
///
/// Records are built by [`ModelLoader`](crate::ModelLoader) and are immutable
/// afterwards. The kind is read off the payload variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    origin_path: PathBuf,
    payload: Payload,
}

impl ModelRecord {
    pub(crate) fn native(origin_path: PathBuf, file_size: u64, mapping: Map<String, Value>) -> Self {
        Self {
            origin_path,
            payload: Payload::Native { mapping, file_size },
        }
    }

    pub(crate) fn metadata(origin_path: PathBuf, mapping: Map<String, Value>) -> Self {
        Self {
            origin_path,
            payload: Payload::Metadata(mapping),
        }
    }

    pub(crate) fn binary(origin_path: PathBuf, bytes: Vec<u8>) -> Self {
        Self {
            origin_path,
            payload: Payload::Binary(bytes),
        }
    }

    pub fn origin_path(&self) -> &Path {
        &self.origin_path
    }

    pub fn kind(&self) -> RecordKind {
        self.payload.kind()
    }

    /// File size in bytes. `None` for metadata records.
    pub fn byte_size(&self) -> Option<u64> {
        match &self.payload {
            Payload::Native { file_size, .. } => Some(*file_size),
            Payload::Binary(bytes) => Some(bytes.len() as u64),
            Payload::Metadata(_) => None,
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn as_mapping(&self) -> Option<&Map<String, Value>> {
        match &self.payload {
            Payload::Native { mapping, .. } | Payload::Metadata(mapping) => Some(mapping),
            Payload::Binary(_) => None,
        }
    }

    pub fn raw_bytes(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Binary(bytes) => Some(bytes),
            Payload::Native { .. } | Payload::Metadata(_) => None,
        }
    }

    /// True for binary fallback records, whose bytes still need a real decoder.
    pub fn needs_processing(&self) -> bool {
        matches!(self.payload, Payload::Binary(_))
    }

    /// Human-facing model name: top-level `name`, or `metadata.name` as
    /// written by NAM exporters.
    pub fn display_name(&self) -> Option<&str> {
        let map = self.as_mapping()?;
        map.get("name")
            .and_then(Value::as_str)
            .or_else(|| map.get("metadata")?.get("name")?.as_str())
    }

    /// Sorted top-level keys of a mapping payload; empty for raw bytes.
    pub fn payload_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .as_mapping()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}

/// Summary of a record, as reported by [`ModelLoader::model_info`](crate::ModelLoader::model_info).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub origin_path: String,
    pub record_kind: RecordKind,
    pub byte_size: u64,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_raw_payload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_byte_length: Option<usize>,
}
