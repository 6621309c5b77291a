// SPDX-License-Identifier: Apache-2.0

use vlanmap::check_bridge_ports;

use super::{state::state_from_file, CliError};

pub(crate) struct CommandBridge;

impl CommandBridge {
    pub(crate) const CMD: &str = "bridge";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new("bridge")
            .alias("b")
            .about("Validate an IPTV bridge-mode port selection")
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
        let selection = state.bridge.as_ref().ok_or_else(|| {
            CliError::from("Device state file holds no `bridge` section")
        })?;
        let config = check_bridge_ports(selection)?;
        println!("Accepted:\n---\n{}", serde_yaml::to_string(&config)?);
        Ok(())
    }
}
