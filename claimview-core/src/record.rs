//! Claim rejection record: the single row type of the table.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity key of a claim row.
///
/// Any string is a valid id; the store does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClaimId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClaimId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&ClaimId> for ClaimId {
    fn from(id: &ClaimId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ClaimId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClaimId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Which code field of a record is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeType {
    #[serde(rename = "ICD")]
    Icd,
    #[serde(rename = "Activity")]
    Activity,
}

impl CodeType {
    pub fn label(self) -> &'static str {
        match self {
            CodeType::Icd => "ICD",
            CodeType::Activity => "Activity",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One claim-rejection row.
///
/// Exactly one of `icd_code` or (`activity_code`, `activity_type`) is
/// meaningful, selected by `code_type`. The other is ignored for display even
/// when populated. Records are never validated: empty strings render as empty
/// cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRejectionRecord {
    pub claim_id: ClaimId,
    pub code_type: CodeType,
    #[serde(default)]
    pub icd_code: String,
    #[serde(default)]
    pub activity_code: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub rejection_reason: String,
    #[serde(default)]
    pub relation_type: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
}

impl ClaimRejectionRecord {
    /// An ICD-coded record with the activity fields left empty.
    pub fn icd(claim_id: impl Into<ClaimId>, icd_code: impl Into<String>) -> Self {
        Self {
            claim_id: claim_id.into(),
            code_type: CodeType::Icd,
            icd_code: icd_code.into(),
            activity_code: String::new(),
            activity_type: String::new(),
            rejection_reason: String::new(),
            relation_type: String::new(),
            level: String::new(),
            message: String::new(),
        }
    }

    /// An Activity-coded record with the ICD field left empty.
    pub fn activity(
        claim_id: impl Into<ClaimId>,
        activity_code: impl Into<String>,
        activity_type: impl Into<String>,
    ) -> Self {
        Self {
            claim_id: claim_id.into(),
            code_type: CodeType::Activity,
            icd_code: String::new(),
            activity_code: activity_code.into(),
            activity_type: activity_type.into(),
            rejection_reason: String::new(),
            relation_type: String::new(),
            level: String::new(),
            message: String::new(),
        }
    }

    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = reason.into();
        self
    }

    pub fn with_relation_type(mut self, relation_type: impl Into<String>) -> Self {
        self.relation_type = relation_type.into();
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}
