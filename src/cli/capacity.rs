// SPDX-License-Identifier: Apache-2.0

use super::{state::state_from_file, CliError};

pub(crate) struct CommandCapacity;

impl CommandCapacity {
    pub(crate) const CMD: &str = "capacity";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new("capacity")
            .about("Check whether the rule table has room for another rule")
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
        let table = state.table();
        table.ensure_add_capacity(&state.context)?;
        println!(
            "Room for another rule, {} of {} custom slots used",
            table.last_index(),
            state.context.max_custom_rules()
        );
        Ok(())
    }
}
