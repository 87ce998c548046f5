//! Composer script events that trigger a hook installation.
//!
//! Wire the binary into a project's `composer.json`:
//!
//! ```json
//! "scripts": {
//!     "post-install-cmd": "composer-lock-alert event post-install-cmd",
//!     "post-update-cmd": "composer-lock-alert event post-update-cmd"
//! }
//! ```

/// A composer lifecycle event this tool can be invoked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    PreInstallCmd,
    PostInstallCmd,
    PreUpdateCmd,
    PostUpdateCmd,
    PreStatusCmd,
    PostStatusCmd,
    PreArchiveCmd,
    PostArchiveCmd,
    PreAutoloadDump,
    PostAutoloadDump,
    PostRootPackageInstall,
    PostCreateProjectCmd,
}

/// What to do when an event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InstallHooks,
    Ignore,
}

impl ScriptEvent {
    /// Every script event composer defines.
    const ALL: [ScriptEvent; 12] = [
        ScriptEvent::PreInstallCmd,
        ScriptEvent::PostInstallCmd,
        ScriptEvent::PreUpdateCmd,
        ScriptEvent::PostUpdateCmd,
        ScriptEvent::PreStatusCmd,
        ScriptEvent::PostStatusCmd,
        ScriptEvent::PreArchiveCmd,
        ScriptEvent::PostArchiveCmd,
        ScriptEvent::PreAutoloadDump,
        ScriptEvent::PostAutoloadDump,
        ScriptEvent::PostRootPackageInstall,
        ScriptEvent::PostCreateProjectCmd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScriptEvent::PreInstallCmd => "pre-install-cmd",
            ScriptEvent::PostInstallCmd => "post-install-cmd",
            ScriptEvent::PreUpdateCmd => "pre-update-cmd",
            ScriptEvent::PostUpdateCmd => "post-update-cmd",
            ScriptEvent::PreStatusCmd => "pre-status-cmd",
            ScriptEvent::PostStatusCmd => "post-status-cmd",
            ScriptEvent::PreArchiveCmd => "pre-archive-cmd",
            ScriptEvent::PostArchiveCmd => "post-archive-cmd",
            ScriptEvent::PreAutoloadDump => "pre-autoload-dump",
            ScriptEvent::PostAutoloadDump => "post-autoload-dump",
            ScriptEvent::PostRootPackageInstall => "post-root-package-install",
            ScriptEvent::PostCreateProjectCmd => "post-create-project-cmd",
        }
    }

    /// Events that install the hooks: after every install and update, when
    /// `composer.lock` is in its final state.
    pub fn subscribed() -> &'static [ScriptEvent] {
        &[ScriptEvent::PostInstallCmd, ScriptEvent::PostUpdateCmd]
    }

    pub fn action(self) -> Action {
        if Self::subscribed().contains(&self) {
            Action::InstallHooks
        } else {
            Action::Ignore
        }
    }
}

impl std::fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an event name composer does not define.
#[derive(Debug, thiserror::Error, miette::Diagnostic, PartialEq, Eq)]
#[error("unknown composer script event: '{0}'")]
#[diagnostic(code(composer_lock_alert::event))]
pub struct UnknownEvent(pub String);

impl std::str::FromStr for ScriptEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEvent(s.to_string()))
    }
}
