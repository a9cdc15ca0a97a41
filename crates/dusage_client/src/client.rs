use dusage_domain::DiskUsageReport;
use dusage_infra_docker::v1_45::Version;

use crate::command::{self, Output, ReadCommand};
use crate::commands::{DiskUsageCmd, VersionCmd};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{HttpTransport, Transport};

/// Entry point for queries. Every call is an independent snapshot; the
/// client holds no per-call state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct EngineClient<T = HttpTransport> {
    transport: T,
    api_prefix: String,
}

impl EngineClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> EngineClient<T> {
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            api_prefix: config.api_prefix(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn execute<C: ReadCommand + ?Sized>(&self, command: &C) -> Result<Output<C>, ClientError> {
        command::execute(&self.transport, &self.api_prefix, command)
    }

    pub fn disk_usage(&self) -> Result<DiskUsageReport, ClientError> {
        self.execute(&DiskUsageCmd)
    }

    pub fn version(&self) -> Result<Version, ClientError> {
        self.execute(&VersionCmd)
    }
}
