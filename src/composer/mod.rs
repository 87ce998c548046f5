use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::VendorDir;

/// Name of composer's project manifest.
pub const MANIFEST: &str = "composer.json";

/// The subset of `composer.json` this tool reads.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub config: ManifestConfig,
}

/// The `config` section of `composer.json`.
#[derive(Debug, Default, Deserialize)]
pub struct ManifestConfig {
    #[serde(rename = "vendor-dir")]
    pub vendor_dir: Option<PathBuf>,
}

/// Errors that can occur when reading `composer.json`.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ComposerError {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(composer_lock_alert::composer::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {}", .path.display())]
    #[diagnostic(
        code(composer_lock_alert::composer::parse),
        help("fix the JSON syntax, or pass --vendor-dir explicitly")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Manifest {
    /// Load `composer.json` from `project_root`.
    ///
    /// A missing manifest yields the defaults, matching composer's own
    /// behaviour for a project without configuration.
    pub fn load(project_root: &Path) -> Result<Self, ComposerError> {
        let path = project_root.join(MANIFEST);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no composer manifest, using defaults");
                return Ok(Manifest::default());
            }
            Err(source) => return Err(ComposerError::Read { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| ComposerError::Parse { path, source })
    }
}

/// Resolve the vendor directory for `project_root`.
///
/// Precedence: `explicit` (command line or `COMPOSER_VENDOR_DIR`), then
/// `config.vendor-dir` from `composer.json`, then `vendor`.
pub fn resolve_vendor_dir(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<VendorDir, ComposerError> {
    if let Some(dir) = explicit {
        return Ok(VendorDir::new(dir, project_root));
    }
    let manifest = Manifest::load(project_root)?;
    Ok(manifest
        .config
        .vendor_dir
        .map(|dir| VendorDir::new(dir, project_root))
        .unwrap_or_default())
}
