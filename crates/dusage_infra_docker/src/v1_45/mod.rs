// Unknown fields are ignored so newer engines keep decoding.
// We do NOT use #[serde(deny_unknown_fields)]

pub mod build_cache;
pub mod error;
pub mod image;
pub mod summary;
pub mod system_df;
pub mod timestamp;
pub mod version;
pub mod volume;

pub use build_cache::BuildCache;
pub use error::ErrorResponse;
pub use image::ImageSummary;
pub use summary::{ContainerSummary, EndpointSettings, HostConfigSummary, Mount, Port, SummaryNetworkSettings};
pub use system_df::SystemDataUsage;
pub use timestamp::WireTimestamp;
pub use version::{Component, Platform, Version};
pub use volume::{UsageData, Volume};
