use serde::{Deserialize, Serialize};

/// Body the engine sends with any non-2xx status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
