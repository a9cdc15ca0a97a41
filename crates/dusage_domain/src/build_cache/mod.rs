use serde::Serialize;
use std::fmt;
use time::OffsetDateTime;

/// Kind of build-cache record as reported by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UsageRecordType {
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "frontend")]
    Frontend,
    #[serde(rename = "source.local")]
    LocalSource,
    #[serde(rename = "source.git.checkout")]
    GitCheckout,
    #[serde(rename = "exec.cachemount")]
    CacheMount,
    #[serde(rename = "regular")]
    Regular,
}

impl UsageRecordType {
    pub const ALL: [UsageRecordType; 6] = [
        Self::Internal,
        Self::Frontend,
        Self::LocalSource,
        Self::GitCheckout,
        Self::CacheMount,
        Self::Regular,
    ];

    /// The engine's wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Frontend => "frontend",
            Self::LocalSource => "source.local",
            Self::GitCheckout => "source.git.checkout",
            Self::CacheMount => "exec.cachemount",
            Self::Regular => "regular",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for UsageRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One build-cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildCacheRecord {
    pub id: String,
    pub parent_id: Option<String>,
    pub record_type: Option<UsageRecordType>,
    /// Build step that produced the record.
    pub description: Option<String>,
    pub in_use: Option<bool>,
    pub shared: Option<bool>,
    pub size_bytes: Option<i64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_used_at: Option<OffsetDateTime>,
    pub usage_count: Option<i32>,
}

impl BuildCacheRecord {
    pub fn is_in_use(&self) -> bool {
        self.in_use.unwrap_or(false)
    }

    pub fn is_shared(&self) -> bool {
        self.shared.unwrap_or(false)
    }
}
