mod args;
mod command;
mod error;
mod options;
mod session;

use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::CliArgs;
use crate::command::Command;
use crate::error::CliError;
use crate::session::{Flow, Session};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match File::create("dropdown-cli.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {e}");
            }
        }
        Err(e) => eprintln!("Failed to create log file: {e}"),
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), CliError> {
    log::info!("Starting with {args:?}");

    let stdout = io::stdout();
    let session = Session::from_args(&args, stdout.is_terminal())?;
    log::debug!("{:?}", session.dropdown());
    let mut out = stdout.lock();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match session.execute(command, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => {
                log::warn!("Command failed: {e}");
                writeln!(out, "error: {e}")?;
            }
        }
        out.flush()?;
    }

    log::info!("Exiting");
    Ok(())
}
