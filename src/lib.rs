pub mod composer;
pub mod domain;
pub mod event;
pub mod hook;
pub mod installer;
pub mod logging;

pub(crate) mod cli;

pub use cli::Command;

/// Run a parsed subcommand, writing user-facing output to stdout.
///
/// This is the binary entry point. Library callers should use
/// [`installer::install_hooks`] directly.
pub fn run(command: Command) -> miette::Result<()> {
    cli::run(command, &mut std::io::stdout().lock())
}
