use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MountType {
    /// A file or directory from the host.
    Bind,
    Volume,
    Tmpfs,
    /// A named pipe from the host.
    Npipe,
    Cluster,
}

impl MountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bind => "bind",
            Self::Volume => "volume",
            Self::Tmpfs => "tmpfs",
            Self::Npipe => "npipe",
            Self::Cluster => "cluster",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        [Self::Bind, Self::Volume, Self::Tmpfs, Self::Npipe, Self::Cluster]
            .into_iter()
            .find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for MountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountInfo {
    pub mount_type: Option<MountType>,
    /// Volume name; absent for bind mounts.
    pub name: Option<String>,
    pub source: String,
    pub destination: String,
    pub driver: Option<String>,
    /// e.g. "rw", "z".
    pub mode: Option<String>,
    pub rw: bool,
    pub propagation: Option<String>,
}
