use std::borrow::Cow;

use dusage_infra_docker::v1_45::SystemDataUsage;

use crate::command::ReadCommand;

/// `GET /system/df`: images, containers, volumes and build cache on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskUsageCmd;

impl ReadCommand for DiskUsageCmd {
    type Response = SystemDataUsage;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/system/df")
    }
}
