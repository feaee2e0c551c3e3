//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate message definitions and report diagnostics
//! - `extract`: Write validated messages as JSON
//! - `init`: Initialize the jsmsg configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{IdStrategy, MessageStyle};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by `check` and `extract`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Message style (overrides config file)
    #[arg(long, value_enum, env = "JSMSG_STYLE")]
    pub style: Option<MessageStyle>,

    /// Message id strategy (overrides config file)
    #[arg(long, value_enum)]
    pub id_generator: Option<IdStrategy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write messages to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in (defaults to the current one)
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate message definitions
    Check(CheckCommand),
    /// Extract validated messages as JSON
    Extract(ExtractCommand),
    /// Create a default .jsmsgrc.json
    Init(InitCommand),
}
