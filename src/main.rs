mod cli;
mod commands;
mod logging;
mod models;
mod services;
mod utils;

use crate::cli::parser::Cli;
use crate::commands::uninstall::{self, Completion};
use crate::logging::init::init_logging;
use crate::models::config::Config;
use crate::services::prompter::TerminalPrompter;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug, cli.quiet);

    match execute() {
        Ok(Completion::Cancelled) => ExitCode::SUCCESS,
        Ok(Completion::Finished(report)) => {
            log::debug!("finished with {} step(s)", report.steps.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn execute() -> anyhow::Result<Completion> {
    let config = Config::new()?;
    log::debug!("home directory: {}", config.home_dir.display());
    let mut prompter = TerminalPrompter::new();
    uninstall::run(&config, &mut prompter)
}
