use std::process::ExitCode;

use clap::Parser;
use jsmsg::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    jsmsg::logger::init(args.verbose());

    match jsmsg::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
