use std::io::Write;

use miette::IntoDiagnostic;

use crate::domain::HookKind;
use crate::hook;

/// Print the generated script for `kind`.
pub(super) fn run(kind: HookKind, out: &mut dyn Write) -> miette::Result<()> {
    out.write_all(hook::render(kind).as_bytes()).into_diagnostic()
}
