use std::{fs, io};

use anyhow::{Context, Result};
use tracing::info;

use super::super::args::ExtractCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_success_to, report_to};
use crate::core::{CheckContext, ExtractedMessages};

/// Extract validated messages as JSON.
///
/// Messages go to stdout (or `--output`); diagnostics always go to stderr
/// so the JSON stays machine readable.
pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let mut extracted = ExtractedMessages::new();
    let issues = ctx.run(&mut extracted);

    let json = serde_json::to_string_pretty(&extracted).context("Failed to serialize messages")?;
    match &cmd.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), messages = extracted.messages.len(), "wrote messages");
        }
        None => println!("{}", json),
    }

    let mut stderr = io::stderr().lock();
    if issues.is_empty() {
        if cmd.output.is_some() {
            print_success_to(ctx.files.len(), Some(extracted.messages.len()), &mut stderr);
        }
    } else {
        report_to(&issues, &mut stderr);
    }

    Ok(ExitStatus::from_issues(&issues))
}
