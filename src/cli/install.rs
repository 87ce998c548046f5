use std::io::Write;

use miette::IntoDiagnostic;

use super::ProjectArgs;
use crate::composer;
use crate::installer::{self, InstallConfig};

/// Resolve the project layout and install both hooks.
pub(super) fn run(project: &ProjectArgs, out: &mut dyn Write) -> miette::Result<()> {
    let config = resolve(project)?;
    tracing::debug!(
        project_root = %config.project_root.display(),
        vendor_dir = %config.vendor_dir,
        "installing hooks"
    );
    installer::install_hooks(&config, out)?;
    Ok(())
}

fn resolve(project: &ProjectArgs) -> miette::Result<InstallConfig> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    // Absolute, so an absolute vendor-dir under it can be made relative.
    let project_root = match &project.project_root {
        Some(root) => cwd.join(root),
        None => cwd,
    };
    let vendor_dir = composer::resolve_vendor_dir(&project_root, project.vendor_dir.as_deref())?;
    Ok(InstallConfig {
        project_root,
        vendor_dir,
    })
}
