// SPDX-License-Identifier: Apache-2.0

use super::{state::state_from_file, CliError};

pub(crate) struct CommandDelete;

impl CommandDelete {
    pub(crate) const CMD: &str = "delete";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new("delete")
            .alias("d")
            .about("Check whether a VLAN rule may be deleted")
            .arg(
                clap::Arg::new("INDEX")
                    .required(true)
                    .index(1)
                    .help("Slot index of the rule to delete"),
            )
            .arg(
                clap::Arg::new("STATE_FILE")
                    .required(false)
                    .index(2)
                    .help("Device state file, '-' for stdin"),
            )
    }

    pub(crate) fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let index: usize = matches
            .get_one::<String>("INDEX")
            .ok_or_else(|| CliError::from("No rule index defined"))?
            .parse()
            .map_err(|_| CliError::from("Invalid rule index"))?;
        let state = state_from_file(
            matches
                .get_one::<String>("STATE_FILE")
                .map(String::as_str)
                .unwrap_or("-"),
        )?;
        state.table().check_delete(index, &state.context)?;
        println!("Rule {index} can be deleted");
        Ok(())
    }
}
