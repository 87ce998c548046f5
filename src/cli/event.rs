use std::io::Write;

use super::ProjectArgs;
use crate::event::{Action, ScriptEvent};

/// Dispatch a composer script event.
pub(super) fn run(
    event: ScriptEvent,
    project: &ProjectArgs,
    out: &mut dyn Write,
) -> miette::Result<()> {
    match event.action() {
        Action::InstallHooks => super::install::run(project, out),
        Action::Ignore => {
            tracing::debug!(%event, "event not subscribed, nothing to do");
            Ok(())
        }
    }
}
