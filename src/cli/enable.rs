// SPDX-License-Identifier: Apache-2.0

use vlanmap::{check_enable_list, check_manual_vlan_id};

use super::{state::state_from_file, CliError};

pub(crate) struct CommandEnable;

impl CommandEnable {
    pub(crate) const CMD: &str = "enable";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new("enable")
            .alias("e")
            .about("Validate a set of VLAN rules selected for bridging")
            .arg(
                clap::Arg::new("STATE_FILE")
                    .required(false)
                    .index(1)
                    .help("Device state file, '-' for stdin"),
            )
    }

    pub(crate) fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let state = state_from_file(
            matches
                .get_one::<String>("STATE_FILE")
                .map(String::as_str)
                .unwrap_or("-"),
        )?;
        let selection = state.enable.as_ref().ok_or_else(|| {
            CliError::from("Device state file holds no `enable` section")
        })?;
        check_enable_list(&state.table(), selection, &state.context)?;
        if state.context.manual_vlan_id_support {
            if let Some(manual_id) = selection.manual_vlan_id.as_deref() {
                let id = check_manual_vlan_id(manual_id)?;
                println!("Manual VLAN ID {id} accepted");
            }
        }
        println!("Enable list of {} rules accepted", selection.selected.len());
        Ok(())
    }
}
