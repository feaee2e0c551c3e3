use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, extract::extract, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// Prints help and succeeds when no command is given.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => Ok(ExitStatus::Success),
    }
}
