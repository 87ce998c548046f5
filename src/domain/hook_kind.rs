/// File name of the hook git runs after `git checkout` / `git switch`.
pub const POST_CHECKOUT_FILENAME: &str = "post-checkout";
/// File name of the hook git runs after a successful `git merge` / `git pull`.
pub const POST_MERGE_FILENAME: &str = "post-merge";

/// The two revisions a hook script compares.
///
/// Values are emitted verbatim into a double-quoted shell assignment, so they
/// are either positional parameters (`$1`) or plain ref names (`HEAD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionPair {
    pub from: &'static str,
    pub to: &'static str,
}

/// A git hook this tool installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    PostCheckout,
    PostMerge,
}

impl HookKind {
    /// Every hook, in installation order.
    pub const ALL: [HookKind; 2] = [HookKind::PostCheckout, HookKind::PostMerge];

    pub fn file_name(self) -> &'static str {
        match self {
            HookKind::PostCheckout => POST_CHECKOUT_FILENAME,
            HookKind::PostMerge => POST_MERGE_FILENAME,
        }
    }

    /// Revisions compared by the generated script.
    ///
    /// `post-checkout` receives the previous and new HEAD as `$1` and `$2`.
    /// `post-merge` gets no useful arguments, so it reads `ORIG_HEAD` and `HEAD`.
    pub fn revisions(self) -> RevisionPair {
        match self {
            HookKind::PostCheckout => RevisionPair { from: "$1", to: "$2" },
            HookKind::PostMerge => RevisionPair {
                from: "ORIG_HEAD",
                to: "HEAD",
            },
        }
    }
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

impl std::str::FromStr for HookKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookKind::ALL
            .into_iter()
            .find(|kind| kind.file_name() == s)
            .ok_or_else(|| {
                format!("unknown hook '{s}', expected '{POST_CHECKOUT_FILENAME}' or '{POST_MERGE_FILENAME}'")
            })
    }
}
