//! Record store: read-only, ordered sequence of claim rejection records.
//!
//! Records come either from the embedded sample set or from a file
//! (`.json`: array of records, `.toml`: `[[records]]` tables). The store keeps
//! source order and never validates or de-duplicates records.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::record::{ClaimRejectionRecord, CodeType};

/// Errors from loading a record file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read records file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported records file format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

/// TOML files wrap the list in a `records` key.
#[derive(Deserialize)]
struct TomlRecords {
    #[serde(default)]
    records: Vec<ClaimRejectionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<ClaimRejectionRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<ClaimRejectionRecord>) -> Self {
        Self { records }
    }

    /// The embedded two-record sample set.
    pub fn sample() -> Self {
        Self::from_records(vec![
            ClaimRejectionRecord {
                claim_id: "CLM-001".into(),
                code_type: CodeType::Icd,
                icd_code: "Z23".into(),
                activity_code: String::new(),
                activity_type: String::new(),
                rejection_reason:
                    "The ICD code is not appropriate to be used as the principal diagnosis.".into(),
                relation_type: "ICD-principal".into(),
                level: "Edit".into(),
                message: "The ICD code is not valid based on the claim policy.".into(),
            },
            ClaimRejectionRecord {
                claim_id: "CLM-002".into(),
                code_type: CodeType::Activity,
                icd_code: String::new(),
                activity_code: "1230".into(),
                activity_type: "CPT".into(),
                rejection_reason:
                    "The ICD code is not appropriate to be used as the principal diagnosis.".into(),
                relation_type: "CPT-ICD".into(),
                level: "Activity".into(),
                message:
                    "The selected CPT code is not clinically supported by the provided ICD diagnosis."
                        .into(),
            },
        ])
    }

    /// Load records from a `.json` or `.toml` file, keeping file order.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => {
                return Err(StoreError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records = match format {
            Format::Json => serde_json::from_str::<Vec<ClaimRejectionRecord>>(&content).map_err(
                |source| StoreError::Json {
                    path: path.to_path_buf(),
                    source,
                },
            )?,
            Format::Toml => {
                toml::from_str::<TomlRecords>(&content)
                    .map_err(|source| StoreError::Toml {
                        path: path.to_path_buf(),
                        source,
                    })?
                    .records
            }
        };

        tracing::info!(path = %path.display(), count = records.len(), "loaded claim records");
        Ok(Self::from_records(records))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClaimRejectionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClaimRejectionRecord> {
        self.records.get(index)
    }
}

enum Format {
    Json,
    Toml,
}
