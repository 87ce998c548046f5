pub mod hook_kind;
pub mod vendor_dir;

pub use hook_kind::{HookKind, RevisionPair};
pub use vendor_dir::VendorDir;
