use serde::{Deserialize, Serialize};

use super::WireTimestamp;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildCache {
    #[serde(rename = "ID")]
    pub id: Option<String>,
    /// "" when the record has no parent.
    pub parent: Option<String>,
    #[serde(rename = "Type")]
    pub type_: Option<String>,
    /// "" when not available.
    pub description: Option<String>,
    pub in_use: Option<bool>,
    pub shared: Option<bool>,
    pub size: Option<i64>,
    pub created_at: Option<WireTimestamp>,
    pub last_used_at: Option<WireTimestamp>,
    pub usage_count: Option<i64>,
}
