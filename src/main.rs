use clap::Parser;

/// Git hooks that warn when composer.lock changes across checkout and merge.
#[derive(Debug, Parser)]
#[command(name = "composer-lock-alert", version, about)]
struct Cli {
    #[command(subcommand)]
    command: composer_lock_alert::Command,
}

fn main() -> miette::Result<()> {
    composer_lock_alert::logging::init();
    let cli = Cli::parse();
    composer_lock_alert::run(cli.command)
}
