use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::v1_45::WireTimestamp;

mod usage;

/// Location inside a decoded document, e.g. `Images[2].Created`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response body is empty")]
    EmptyDocument,
    #[error("malformed document: {reason}")]
    Malformed {
        line: usize,
        column: usize,
        reason: String,
    },
    #[error("missing required field `{path}`")]
    MissingField { path: FieldPath },
    #[error("invalid value {raw} at `{path}`: {reason}")]
    InvalidValue {
        path: FieldPath,
        raw: String,
        reason: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed {
            line: e.line(),
            column: e.column(),
            reason: e.to_string(),
        }
    }
}

/// Turns a deserialized wire value into its domain form.
pub trait Normalize: DeserializeOwned {
    type Output;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError>;
}

/// Parses `body` as `W` and normalizes it. Either the whole document
/// decodes or nothing is returned.
pub fn decode<W: Normalize>(body: &[u8]) -> Result<W::Output, DecodeError> {
    let trimmed = body.trim_ascii();
    if trimmed.is_empty() || trimmed == b"null" {
        return Err(DecodeError::EmptyDocument);
    }
    let wire: W = serde_json::from_slice(trimmed)?;
    wire.normalize(&FieldPath::root())
}

pub(crate) fn required<T>(value: Option<T>, at: &FieldPath, field: &str) -> Result<T, DecodeError> {
    value.ok_or_else(|| DecodeError::MissingField { path: at.field(field) })
}

pub(crate) fn timestamp(
    value: Option<WireTimestamp>,
    at: &FieldPath,
    field: &str,
) -> Result<Option<OffsetDateTime>, DecodeError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = match &value {
        WireTimestamp::Unix(secs) => OffsetDateTime::from_unix_timestamp(*secs).map_err(|e| e.to_string()),
        WireTimestamp::Text(s) => OffsetDateTime::parse(s, &Rfc3339).map_err(|e| e.to_string()),
    };
    parsed.map(Some).map_err(|reason| DecodeError::InvalidValue {
        path: at.field(field),
        raw: match value {
            WireTimestamp::Unix(secs) => secs.to_string(),
            WireTimestamp::Text(s) => format!("{s:?}"),
        },
        reason,
    })
}

pub(crate) fn int32(value: Option<i64>, at: &FieldPath, field: &str) -> Result<Option<i32>, DecodeError> {
    value
        .map(|v| {
            i32::try_from(v).map_err(|_| DecodeError::InvalidValue {
                path: at.field(field),
                raw: v.to_string(),
                reason: "out of range for a 32-bit count".to_string(),
            })
        })
        .transpose()
}

pub(crate) fn list<W: Normalize>(
    items: Option<Vec<W>>,
    at: &FieldPath,
    field: &str,
) -> Result<Option<Vec<W::Output>>, DecodeError> {
    let Some(items) = items else {
        return Ok(None);
    };
    let here = at.field(field);
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| item.normalize(&here.index(i)))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
