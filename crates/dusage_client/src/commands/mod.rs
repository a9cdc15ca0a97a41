mod disk_usage;
mod version;

pub use disk_usage::DiskUsageCmd;
pub use version::VersionCmd;
