//! Engine-reported disk usage, with every "not available" wire value already
//! resolved to `None`.

pub mod build_cache;
pub mod container;
pub mod image;
pub mod report;
pub mod volume;

pub use build_cache::{BuildCacheRecord, UsageRecordType};
pub use container::{ContainerUsage, EndpointSummary, HostConfigSummary, MountInfo, MountType, NetworkSummary, PortMapping};
pub use image::ImageUsage;
pub use report::{CategoryUsage, DiskUsageReport, DiskUsageSummary};
pub use volume::{UsageData, VolumeUsage};
