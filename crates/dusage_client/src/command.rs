use std::borrow::Cow;

use dusage_infra_docker::v1_45::ErrorResponse;
use dusage_infra_docker::{decode, Normalize};
use tracing::{debug, info_span, trace, warn};
use uuid::Uuid;

use crate::error::ClientError;
use crate::transport::{Transport, JSON};

/// A read-only query: a resource path plus the wire type its body decodes into.
///
/// New endpoints only implement this; request, status handling and decoding
/// are shared through [`execute`].
pub trait ReadCommand {
    type Response: Normalize;

    /// Path below the API root, e.g. `/system/df`.
    fn path(&self) -> Cow<'_, str>;
}

/// What a command yields on success.
pub type Output<C> = <<C as ReadCommand>::Response as Normalize>::Output;

/// Issues exactly one GET for `command` and decodes the body.
///
/// Transport failures come back untouched, a non-2xx status is never
/// handed to the decoder, and there is no retry.
pub fn execute<C, T>(transport: &T, api_prefix: &str, command: &C) -> Result<Output<C>, ClientError>
where
    C: ReadCommand + ?Sized,
    T: Transport + ?Sized,
{
    let path = format!("{}{}", api_prefix, command.path());
    let request_id = Uuid::new_v4();
    let span = info_span!(
        "engine_request",
        request_id = %request_id,
        method = "GET",
        path = %path,
    );
    let _entered = span.enter();

    debug!("Request started");
    let response = transport.get(&path, JSON)?;
    debug!(status = response.status, "Request finished");

    if !response.is_success() {
        let message = error_message(&response.body);
        warn!(status = response.status, error = ?message, "Engine rejected request");
        return Err(ClientError::Protocol {
            path,
            status: response.status,
            message,
        });
    }

    trace!(bytes = response.body.len(), "Decoding response");
    decode::<C::Response>(&response.body).map_err(|source| ClientError::Decode { path, source })
}

/// The engine's `{"message": ...}`, or the raw text when the body is not JSON.
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(err) = serde_json::from_slice::<ErrorResponse>(body) {
        return Some(err.message);
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
