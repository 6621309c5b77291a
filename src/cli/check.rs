// SPDX-License-Identifier: Apache-2.0

use vlanmap::check_candidate;

use super::{state::state_from_file, CliError};

pub(crate) struct CommandCheck;

impl CommandCheck {
    pub(crate) const CMD: &str = "check";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new("check")
            .alias("c")
            .about("Validate a candidate VLAN rule against the rule table")
            .arg(
                clap::Arg::new("STATE_FILE")
                    .required(false)
                    .index(1)
                    .help("Device state file, '-' for stdin"),
            )
            .arg(
                clap::Arg::new("JSON")
                    .long("json")
                    .action(clap::ArgAction::SetTrue)
                    .help("Print the accepted rule as JSON"),
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
        let candidate = state.candidate.as_ref().ok_or_else(|| {
            CliError::from("Device state file holds no `candidate` section")
        })?;
        let checked =
            check_candidate(&state.table(), candidate, &state.context)?;
        if matches.get_flag("JSON") {
            println!("{}", serde_json::to_string_pretty(&checked)?);
        } else {
            println!(
                "Accepted:\n---\n{}",
                serde_yaml::to_string(&checked)?
            );
        }
        Ok(())
    }
}
