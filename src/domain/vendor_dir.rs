use std::path::{Component, Path, PathBuf};

/// The dependency directory as configured by composer, relative to the
/// project root (`vendor`, `libs`, ...).
///
/// Construction never fails: a nested value such as `pkg/vendor` is kept so the
/// installer can reject it with a typed error. An absolute path is rebased onto
/// the project root when it lives underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDir(pub(crate) PathBuf);

/// Composer's default `vendor-dir`.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

impl VendorDir {
    pub fn new(raw: impl AsRef<Path>, project_root: &Path) -> Self {
        let raw = raw.as_ref();
        let relative = match raw.strip_prefix(project_root) {
            Ok(rest) if raw.is_absolute() => rest,
            _ => raw,
        };
        VendorDir(relative.to_path_buf())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// `true` when the path is a single plain component directly below the
    /// project root, so that its parent is the project root itself.
    pub fn is_direct_child(&self) -> bool {
        let mut components = self.0.components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }
}

impl Default for VendorDir {
    fn default() -> Self {
        VendorDir(PathBuf::from(DEFAULT_VENDOR_DIR))
    }
}

impl std::fmt::Display for VendorDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
