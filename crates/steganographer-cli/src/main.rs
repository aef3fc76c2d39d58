use clap::Parser;
use log::error;
use std::process::ExitCode;
use steganographer_core::SteganoError;
use thiserror::Error;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Stegano(#[from] SteganoError),
}

pub type CliResult<T> = std::result::Result<T, CliError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> CliResult<()> {
    let dct = args.dct_options();

    match args.command {
        Commands::Hide(hide) => hide.run(dct),
        Commands::Unveil(unveil) => unveil.run(dct),
        Commands::Capacity(capacity) => capacity.run(dct),
    }
}
