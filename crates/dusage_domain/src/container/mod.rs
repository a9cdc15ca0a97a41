use serde::Serialize;
use std::collections::HashMap;
use time::OffsetDateTime;

pub mod mount;
pub mod network;

pub use mount::{MountInfo, MountType};
pub use network::{EndpointSummary, NetworkSummary};

/// Disk usage of one container.
///
/// The engine reports this with the same shape as a container listing but
/// fills in only part of it: of the host configuration only the network
/// mode is present. Do not treat it as a full container inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerUsage {
    pub id: String,
    pub names: Vec<String>,
    /// Image name as given at creation time.
    pub image: String,
    pub image_id: String,
    pub command: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub ports: Vec<PortMapping>,
    /// Bytes created or changed by the container, excluding mounted volumes.
    pub size_rw_bytes: Option<i64>,
    /// Total size of all files in the container.
    pub size_root_fs_bytes: Option<i64>,
    pub labels: HashMap<String, String>,
    /// e.g. "running", "exited".
    pub state: String,
    /// Human-readable status, e.g. "Up 2 minutes".
    pub status: String,
    pub host_config: HostConfigSummary,
    pub network_settings: NetworkSummary,
    pub mounts: Vec<MountInfo>,
}

impl ContainerUsage {
    pub fn is_running(&self) -> bool {
        self.state.eq_ignore_ascii_case("running")
    }

    /// Running, paused or restarting; what `system df` counts as active.
    pub fn is_active(&self) -> bool {
        ["running", "paused", "restarting"]
            .iter()
            .any(|s| self.state.eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortMapping {
    pub ip: Option<String>,
    pub private_port: u16,
    pub public_port: Option<u16>,
    /// "tcp", "udp" or "sctp".
    pub protocol: String,
}

/// The only part of the host configuration reported alongside usage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HostConfigSummary {
    pub network_mode: Option<String>,
}
