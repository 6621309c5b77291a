// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use serde::Deserialize;
use vlanmap::{
    Candidate, DeviceContext, EnableSelection, PortSelection, RuleTable,
    VlanRule,
};

use super::CliError;

/// Snapshot of the device configuration plus the pending submission, as
/// fed to the checker. Sections not needed by a subcommand may be left
/// out of the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct DeviceState {
    #[serde(default)]
    pub(crate) context: DeviceContext,
    #[serde(default)]
    pub(crate) rules: Vec<VlanRule>,
    #[serde(default)]
    pub(crate) candidate: Option<Candidate>,
    #[serde(default)]
    pub(crate) bridge: Option<PortSelection>,
    #[serde(default)]
    pub(crate) enable: Option<EnableSelection>,
}

impl DeviceState {
    pub(crate) fn table(&self) -> RuleTable {
        RuleTable::new(self.rules.clone())
    }
}

pub(crate) fn state_from_file(
    file_path: &str,
) -> Result<DeviceState, CliError> {
    if file_path == "-" {
        state_from_fd(&mut std::io::stdin())
    } else {
        state_from_fd(&mut std::fs::File::open(file_path)?)
    }
}

fn state_from_fd<R>(fd: &mut R) -> Result<DeviceState, CliError>
where
    R: Read,
{
    let mut content = String::new();
    // Replace non-breaking space '\u{A0}'  to normal space
    fd.read_to_string(&mut content)?;
    let content = content.replace('\u{A0}', " ");

    Ok(serde_yaml::from_str::<DeviceState>(&content)?)
}
