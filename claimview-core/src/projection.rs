//! Code projection: selects the display fields a record's `code_type` makes valid.

use crate::record::{ClaimRejectionRecord, CodeType};

/// The code fields that are authoritative for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeProjection<'a> {
    Icd { code: &'a str },
    Activity { code: &'a str, activity_type: &'a str },
}

impl<'a> CodeProjection<'a> {
    /// Value of the "Code" column.
    pub fn code(&self) -> &'a str {
        match *self {
            CodeProjection::Icd { code } => code,
            CodeProjection::Activity { code, .. } => code,
        }
    }

    /// Activity type, present only for Activity-coded records.
    pub fn activity_type(&self) -> Option<&'a str> {
        match *self {
            CodeProjection::Icd { .. } => None,
            CodeProjection::Activity { activity_type, .. } => Some(activity_type),
        }
    }

    pub fn code_type(&self) -> CodeType {
        match self {
            CodeProjection::Icd { .. } => CodeType::Icd,
            CodeProjection::Activity { .. } => CodeType::Activity,
        }
    }
}

/// Project a record onto its authoritative code fields.
///
/// Fields belonging to the other code type are ignored even when populated.
pub fn project_code(record: &ClaimRejectionRecord) -> CodeProjection<'_> {
    match record.code_type {
        CodeType::Icd => CodeProjection::Icd {
            code: &record.icd_code,
        },
        CodeType::Activity => CodeProjection::Activity {
            code: &record.activity_code,
            activity_type: &record.activity_type,
        },
    }
}
