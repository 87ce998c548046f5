use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{HookKind, VendorDir};
use crate::hook;

/// Name of git's metadata directory.
pub const GIT_DIR: &str = ".git";
/// Hooks live directly under the git directory.
pub const HOOKS_DIR: &str = "hooks";

/// Where to install: the project root and composer's `vendor-dir` for it.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    pub project_root: PathBuf,
    pub vendor_dir: VendorDir,
}

/// Errors that abort hook installation.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InstallError {
    #[error("only the standard composer folder structure is supported: vendor-dir '{vendor_dir}' must be a direct child of the project root")]
    #[diagnostic(
        code(composer_lock_alert::configuration),
        help("set `config.vendor-dir` in composer.json to a single directory name such as `vendor`")
    )]
    Configuration { vendor_dir: VendorDir },

    #[error("only git is supported, and the command must run on the project root: no readable '.git' directory at {}", .git_dir.display())]
    #[diagnostic(
        code(composer_lock_alert::environment),
        help("run from the repository root, or pass --project-root")
    )]
    Environment { git_dir: PathBuf },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(composer_lock_alert::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to report installed hooks")]
    #[diagnostic(code(composer_lock_alert::output))]
    Output(#[source] std::io::Error),
}

impl InstallError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> InstallError + '_ {
        move |source| InstallError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Install the `post-checkout` and `post-merge` hooks into `.git/hooks`.
///
/// The git directory is looked up one level above the vendor directory, which
/// is why a nested `vendor-dir` is refused before anything is touched. Existing
/// hook files of the same name are replaced without a backup.
///
/// One line per written hook is reported to `out`. Returns the written paths.
pub fn install_hooks(
    config: &InstallConfig,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>, InstallError> {
    if !config.vendor_dir.is_direct_child() {
        return Err(InstallError::Configuration {
            vendor_dir: config.vendor_dir.clone(),
        });
    }

    let vendor_path = config.project_root.join(config.vendor_dir.as_path());
    let git_dir = vendor_path
        .parent()
        .unwrap_or(&config.project_root)
        .join(GIT_DIR);
    tracing::debug!(git_dir = %git_dir.display(), "resolved git directory");

    if !is_readable_dir(&git_dir) {
        return Err(InstallError::Environment { git_dir });
    }

    let hooks_dir = git_dir.join(HOOKS_DIR);
    create_hooks_dir(&hooks_dir)?;

    let mut written = Vec::with_capacity(HookKind::ALL.len());
    for kind in HookKind::ALL {
        let path = hooks_dir.join(kind.file_name());
        write_executable(&path, &hook::render(kind))?;
        tracing::info!(hook = %kind, path = %path.display(), "installed hook");
        writeln!(out, "Installed {kind} hook at {}", path.display())
            .map_err(InstallError::Output)?;
        written.push(path);
    }

    Ok(written)
}

fn is_readable_dir(path: &Path) -> bool {
    path.is_dir() && std::fs::read_dir(path).is_ok()
}

fn create_hooks_dir(path: &Path) -> Result<(), InstallError> {
    if path.is_dir() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "creating hooks directory");

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path).map_err(InstallError::io(path))
}

/// Replace `path` with a fresh file holding `content`.
///
/// The file is recreated rather than truncated so the 0o755 mode (minus the
/// process umask) applies even when a hook with other permissions was there.
fn write_executable(path: &Path, content: &str) -> Result<(), InstallError> {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "replacing existing hook"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(InstallError::io(path)(e)),
    }

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o755);
    }

    let mut file = options.open(path).map_err(InstallError::io(path))?;
    file.write_all(content.as_bytes())
        .map_err(InstallError::io(path))
}
