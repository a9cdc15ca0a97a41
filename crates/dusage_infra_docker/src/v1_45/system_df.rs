use serde::{Deserialize, Serialize};

use super::{BuildCache, ContainerSummary, ImageSummary, Volume};

/// Body of `GET /system/df`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemDataUsage {
    pub layers_size: Option<i64>,
    pub images: Option<Vec<ImageSummary>>,
    pub containers: Option<Vec<ContainerSummary>>,
    pub volumes: Option<Vec<Volume>>,
    pub build_cache: Option<Vec<BuildCache>>,
}
