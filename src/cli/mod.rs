mod event;
mod install;
mod show;

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::domain::HookKind;
use crate::event::ScriptEvent;

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install the post-checkout and post-merge hooks into .git/hooks
    Install(ProjectArgs),
    /// Entry point for composer scripts: installs the hooks on post-install-cmd and post-update-cmd
    Event {
        /// Composer script event name, e.g. post-install-cmd
        event: ScriptEvent,
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Print the script generated for one hook
    Show {
        /// post-checkout or post-merge
        hook: HookKind,
    },
}

/// Where the project lives and how composer lays it out.
#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Project root containing composer.json and .git [default: current directory]
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Composer vendor-dir, relative to the project root [default: from composer.json, else "vendor"]
    #[arg(long, env = "COMPOSER_VENDOR_DIR")]
    pub vendor_dir: Option<PathBuf>,
}

pub(crate) fn run(command: Command, out: &mut dyn Write) -> miette::Result<()> {
    match command {
        Command::Install(project) => install::run(&project, out),
        Command::Event { event, project } => event::run(event, &project, out),
        Command::Show { hook } => show::run(hook, out),
    }
}
