use serde::Serialize;

use crate::build_cache::BuildCacheRecord;
use crate::container::ContainerUsage;
use crate::image::ImageUsage;
use crate::volume::VolumeUsage;

mod summary;
pub use summary::{CategoryUsage, DiskUsageSummary};

/// Point-in-time snapshot of what the engine is using on disk.
///
/// Each collection is `None` when the engine did not report it at all and
/// `Some(vec![])` when it reported none of that kind. No referential
/// integrity between the collections is checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiskUsageReport {
    pub layers_size: Option<i64>,
    pub build_cache: Option<Vec<BuildCacheRecord>>,
    pub images: Option<Vec<ImageUsage>>,
    pub containers: Option<Vec<ContainerUsage>>,
    pub volumes: Option<Vec<VolumeUsage>>,
}

impl DiskUsageReport {
    pub fn images(&self) -> &[ImageUsage] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn containers(&self) -> &[ContainerUsage] {
        self.containers.as_deref().unwrap_or_default()
    }

    pub fn volumes(&self) -> &[VolumeUsage] {
        self.volumes.as_deref().unwrap_or_default()
    }

    pub fn build_cache(&self) -> &[BuildCacheRecord] {
        self.build_cache.as_deref().unwrap_or_default()
    }

    pub fn summary(&self) -> DiskUsageSummary {
        DiskUsageSummary::of(self)
    }
}

#[cfg(test)]
mod tests;
