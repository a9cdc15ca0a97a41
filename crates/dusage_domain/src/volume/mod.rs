use serde::Serialize;
use std::collections::HashMap;

/// Disk accounting for a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UsageData {
    /// Only known for volumes of the `local` driver.
    pub size_bytes: Option<i64>,
    /// Containers referencing the volume.
    pub ref_count: Option<i64>,
}

/// One volume as seen by the disk usage endpoint.
///
/// `usage` is only ever filled in here; a plain volume inspection never
/// carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeUsage {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    pub labels: Option<HashMap<String, String>>,
    pub options: Option<HashMap<String, String>>,
    pub usage: Option<UsageData>,
}

impl VolumeUsage {
    pub fn size_bytes(&self) -> Option<i64> {
        self.usage.and_then(|u| u.size_bytes)
    }

    pub fn ref_count(&self) -> Option<i64> {
        self.usage.and_then(|u| u.ref_count)
    }
}
