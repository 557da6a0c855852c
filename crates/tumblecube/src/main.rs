//! Headless runner for the tumbling cube widget.

use clap::Parser;

mod cli;

fn main() -> eyre::Result<()> {
    env_logger::builder().init();
    color_eyre::install()?;

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
