//! Synchronous, read-only queries against a container engine daemon.

pub mod client;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod transport;

pub use client::EngineClient;
pub use command::{execute, Output, ReadCommand};
pub use commands::{DiskUsageCmd, VersionCmd};
pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use transport::{HttpTransport, RawResponse, Transport, TransportError, JSON};
