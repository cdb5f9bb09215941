// SPDX-License-Identifier: GPL-3.0-only

//! Reading and writing whole documents
//!
//! A document's revision is detected from its shape: 2.0.0 documents carry an
//! `ignition.version` stamp, v1 documents carry nothing or the legacy
//! `ignitionVersion: 1` marker.

use std::fmt;

use provision_types::{SchemaVersion, v1, v2_0};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TranslateError};
use crate::translate;

/// Schema revision a document was written against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaRevision {
    V1,
    V2_0,
}

impl fmt::Display for SchemaRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2_0 => write!(f, "{}", v2_0::MAX_VERSION),
        }
    }
}

/// Work out which schema revision a parsed document belongs to
pub fn detect_revision(value: &Value) -> Result<SchemaRevision> {
    let root = value.as_object().ok_or(TranslateError::NotAnObject)?;

    if let Some(legacy) = root.get("ignitionVersion") {
        return match legacy.as_u64() {
            Some(1) => Ok(SchemaRevision::V1),
            _ => Err(TranslateError::UnsupportedVersion(legacy.to_string())),
        };
    }

    let Some(version) = root.get("ignition").and_then(|ignition| ignition.get("version")) else {
        return Ok(SchemaRevision::V1);
    };

    let raw = version
        .as_str()
        .ok_or_else(|| TranslateError::InvalidVersion(version.to_string()))?;
    let parsed: SchemaVersion = raw
        .parse()
        .map_err(|_| TranslateError::InvalidVersion(raw.to_string()))?;

    if parsed == v2_0::MAX_VERSION {
        Ok(SchemaRevision::V2_0)
    } else {
        Err(TranslateError::UnsupportedVersion(raw.to_string()))
    }
}

/// Parse a JSON document of either revision into a 2.0.0 config
pub fn upgrade_document(input: &str) -> Result<v2_0::Config> {
    let value: Value = serde_json::from_str(input)?;
    let revision = detect_revision(&value)?;
    debug!("Detected schema revision {}", revision);

    match revision {
        SchemaRevision::V1 => {
            let old: v1::Config = serde_json::from_value(value)?;
            Ok(translate(&old))
        }
        SchemaRevision::V2_0 => Ok(serde_json::from_value(value)?),
    }
}

/// Serialize a 2.0.0 config as JSON
pub fn to_json(config: &v2_0::Config, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}
