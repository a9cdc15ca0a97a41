use serde::{Deserialize, Serialize};

use crate::decode::{DecodeError, FieldPath, Normalize};

/// Body of `GET /version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Version {
    pub platform: Option<Platform>,
    pub components: Option<Vec<Component>>,
    pub version: String,
    pub api_version: String,
    pub min_a_p_i_version: Option<String>,
    pub git_commit: Option<String>,
    pub go_version: Option<String>,
    pub os: String,
    pub arch: String,
    pub kernel_version: Option<String>,
    #[serde(default)]
    pub experimental: bool,
    pub build_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Platform {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Component {
    pub name: String,
    pub version: String,
    pub details: Option<serde_json::Value>,
}

// No sentinel fields; the wire shape is the result.
impl Normalize for Version {
    type Output = Version;

    fn normalize(self, _at: &FieldPath) -> Result<Self::Output, DecodeError> {
        Ok(self)
    }
}
