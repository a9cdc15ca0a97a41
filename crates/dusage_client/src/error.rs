use dusage_common::diagnostic::{Diagnosable, DiagnosticCode, Severity};
use dusage_infra_docker::DecodeError;
use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed. Not retried here.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The engine answered with a non-2xx status.
    #[error("Engine returned status {status} for {path}{}", describe(.message))]
    Protocol {
        path: String,
        status: u16,
        message: Option<String>,
    },
    /// The exchange succeeded but the body has the wrong shape.
    #[error("Cannot decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },
}

fn describe(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Diagnosable for ClientError {
    fn code(&self) -> DiagnosticCode {
        match self {
            Self::Transport(TransportError::Connect { .. }) => DiagnosticCode("ENGINE_UNREACHABLE"),
            Self::Transport(TransportError::Timeout { .. }) => DiagnosticCode("ENGINE_TIMEOUT"),
            Self::Transport(TransportError::Request { .. }) => DiagnosticCode("ENGINE_REQUEST_FAILED"),
            Self::Transport(TransportError::Setup(_)) => DiagnosticCode("CLIENT_SETUP_FAILED"),
            Self::Protocol { .. } => DiagnosticCode("ENGINE_ERROR_STATUS"),
            Self::Decode { .. } => DiagnosticCode("ENGINE_BAD_RESPONSE"),
        }
    }

    // A slow engine usually answers on the next attempt.
    fn severity(&self) -> Severity {
        match self {
            Self::Transport(TransportError::Timeout { .. }) => Severity::Warning,
            _ => Severity::Error,
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::Transport(TransportError::Connect { .. }) => {
                Some("Check that the engine is running and DUSAGE_HOST points at it.".to_string())
            }
            Self::Transport(TransportError::Timeout { .. }) => {
                Some("Computing disk usage can be slow on large hosts; raise DUSAGE_TIMEOUT_SECS.".to_string())
            }
            Self::Protocol { status: 400 | 404, .. } => {
                Some("The engine may not support the requested API version. Check DUSAGE_API_VERSION.".to_string())
            }
            _ => None,
        }
    }
}
