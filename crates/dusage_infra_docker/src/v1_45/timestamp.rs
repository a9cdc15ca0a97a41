use serde::{Deserialize, Serialize};

/// Images and containers report `Created` as unix seconds, the build cache
/// uses RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireTimestamp {
    Unix(i64),
    Text(String),
}
