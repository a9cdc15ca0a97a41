use std::borrow::Cow;

use dusage_infra_docker::v1_45::Version;

use crate::command::ReadCommand;

/// `GET /version`
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionCmd;

impl ReadCommand for VersionCmd {
    type Response = Version;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/version")
    }
}
