use serde::Serialize;
use std::collections::HashMap;
use time::OffsetDateTime;

/// Disk usage of one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUsage {
    /// Content-addressable digest of the image configuration,
    /// e.g. `sha256:ec3f0931a6e6...`. Not the same as the manifest digests in
    /// `repo_digests`.
    pub id: String,
    /// Only set for images built or committed locally.
    pub parent_id: Option<String>,
    /// Empty for untagged images.
    pub repo_tags: Vec<String>,
    /// Usually only populated once the image was pulled from or pushed to a registry.
    pub repo_digests: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Total size including every layer.
    pub size_bytes: i64,
    /// Bytes of layers shared with other images.
    pub shared_size_bytes: Option<i64>,
    pub labels: Option<HashMap<String, String>>,
    /// Stopped and running containers using this image.
    pub container_count: Option<i32>,
}

impl ImageUsage {
    pub fn is_dangling(&self) -> bool {
        self.repo_tags.is_empty()
    }

    /// Bytes freed by removing only this image.
    pub fn unique_size_bytes(&self) -> i64 {
        self.size_bytes
            .saturating_sub(self.shared_size_bytes.unwrap_or(0))
            .max(0)
    }
}
