use std::io;

use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_success_to, report};
use crate::core::{CheckContext, LintOnly};

/// Validate every message definition, printing diagnostics to stdout.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let issues = ctx.run(&mut LintOnly);

    if issues.is_empty() {
        print_success_to(ctx.files.len(), None, &mut io::stdout().lock());
    } else {
        report(&issues);
    }

    Ok(ExitStatus::from_issues(&issues))
}
