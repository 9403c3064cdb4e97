// src/bin/levgroups.rs
use clap::Parser;
use colored::Colorize;

use levgroups_core::cli::{self, Cli};
use levgroups_core::exit::LevGroupsExit;
use levgroups_core::logging;

fn main() -> LevGroupsExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::handle(&cli) {
        Ok(()) => LevGroupsExit::Success,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LevGroupsExit::for_error(&e)
        }
    }
}
