// EN: src/cli/handlers/run.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use super::build::BuildArgs;
use crate::{core::env::EnvMap, system::launcher};

/// The main handler for the `run` command.
///
/// Accepts the same arguments as `build`, then executes the invocation with the
/// terminal attached. A non-zero exit is returned as a `launcher::ExecutionError`.
pub fn handle(args: Vec<String>, env: &EnvMap) -> Result<()> {
    let run_args = BuildArgs::try_parse_from(&args)?;
    let invocation = run_args.invocation(env)?;

    eprintln!("> {}", invocation.line.green());
    launcher::run(&invocation, None)?;
    Ok(())
}
