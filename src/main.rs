#![allow(dead_code)]

mod backup;
mod behavior;
mod cli;
mod context;
mod doc;
mod entry;
mod error;
mod fs;
mod index;
mod logger;
mod op;
mod queue;
mod registry;
mod sort;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::real_cli()
}
