use crate::context::Context;
use crate::doc::usage;
use crate::logger::Logger;
use std::io::Write;
use std::process::ExitCode;

/// What we decide to do based on CLI arguments
#[derive(PartialEq, Debug)]
pub enum Behavior {
    Help,
    Version,
    Pipeline(Vec<String>),
}

pub fn parse<S>(args: impl Iterator<Item = S>) -> Behavior
where
    S: AsRef<str>,
{
    let mut pipeline_args: Vec<String> = vec![];
    for arg in args {
        match arg.as_ref() {
            "--version" => return Behavior::Version,
            "--help" => return Behavior::Help,
            other => pipeline_args.push(other.to_owned()),
        }
    }

    if pipeline_args.is_empty() {
        Behavior::Help
    } else {
        Behavior::Pipeline(pipeline_args)
    }
}

pub fn execute(behavior: Behavior, log: &mut Logger) -> ExitCode {
    let result = match behavior {
        Behavior::Help => write!(log.stdout, "{}", usage()),
        Behavior::Version => write!(log.stdout, "{}\n", env!("CARGO_PKG_VERSION")),
        Behavior::Pipeline(args) => Context::new(log).parse_apply(args),
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            write!(log.stderr, "Failed to execute: {}\n", e).expect("Failed to print failure msg");
            ExitCode::from(1)
        }
    }
}

pub fn real_cli() -> ExitCode {
    let mut log = Logger::new_real();
    let behavior = parse(std::env::args().skip(1));
    execute(behavior, &mut log)
}
