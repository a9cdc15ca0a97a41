use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Volume {
    pub name: Option<String>,
    pub driver: Option<String>,
    pub mountpoint: Option<String>,
    pub labels: Option<HashMap<String, String>>,
    pub options: Option<HashMap<String, String>>,
    /// Only sent by /system/df.
    pub usage_data: Option<UsageData>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsageData {
    /// -1 for drivers other than "local".
    pub size: Option<i64>,
    /// -1 when unknown.
    pub ref_count: Option<i64>,
}
