// SPDX-License-Identifier: Apache-2.0

mod bridge;
mod capacity;
mod check;
mod delete;
mod enable;
mod error;
mod state;

pub(crate) use self::error::CliError;
use self::{
    bridge::CommandBridge, capacity::CommandCapacity, check::CommandCheck,
    delete::CommandDelete, enable::CommandEnable,
};

fn main() -> Result<(), CliError> {
    let mut cli_cmd = clap::Command::new("vmt")
        .about("VLAN / IPTV port-mapping checker")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Increase verbose level")
                .global(true),
        )
        .subcommand(CommandCheck::new_cmd())
        .subcommand(CommandBridge::new_cmd())
        .subcommand(CommandEnable::new_cmd())
        .subcommand(CommandDelete::new_cmd())
        .subcommand(CommandCapacity::new_cmd());

    let matches = cli_cmd.get_matches_mut();

    let (log_targets, log_level) = match matches.get_count("verbose") {
        0 => (vec!["vlanmap", "vmt"], log::LevelFilter::Info),
        1 => (vec!["vlanmap", "vmt"], log::LevelFilter::Debug),
        _ => (vec![""], log::LevelFilter::Trace),
    };

    if !matches.get_flag("quiet") {
        let mut log_builder = env_logger::Builder::new();
        if log_targets.is_empty() {
            log_builder.filter(None, log_level);
        } else {
            for log_target in log_targets {
                log_builder.filter(Some(log_target), log_level);
            }
        }
        log_builder.init();
    }

    log::info!("vmt version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = call_subcommand(&matches) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

fn call_subcommand(matches: &clap::ArgMatches) -> Result<(), CliError> {
    if let Some(matches) = matches.subcommand_matches(CommandCheck::CMD) {
        CommandCheck::handle(matches)
    } else if let Some(matches) =
        matches.subcommand_matches(CommandBridge::CMD)
    {
        CommandBridge::handle(matches)
    } else if let Some(matches) =
        matches.subcommand_matches(CommandEnable::CMD)
    {
        CommandEnable::handle(matches)
    } else if let Some(matches) =
        matches.subcommand_matches(CommandDelete::CMD)
    {
        CommandDelete::handle(matches)
    } else if let Some(matches) =
        matches.subcommand_matches(CommandCapacity::CMD)
    {
        CommandCapacity::handle(matches)
    } else {
        Err(CliError::from("Unknown command"))
    }
}
