use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::WireTimestamp;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSummary {
    pub id: Option<String>,
    /// "" when the image was pulled rather than built.
    pub parent_id: Option<String>,
    pub repo_tags: Option<Vec<String>>,
    pub repo_digests: Option<Vec<String>>,
    pub created: Option<WireTimestamp>,
    pub size: Option<i64>,
    /// -1 when not calculated.
    pub shared_size: Option<i64>,
    pub labels: Option<HashMap<String, String>>,
    /// -1 when not calculated.
    pub containers: Option<i64>,
}
