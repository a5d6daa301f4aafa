// EN: src/cli/handlers/build.rs

use anyhow::Result;
use clap::Parser;

use super::commons;
use crate::{core::env::EnvMap, models::Invocation, system::dispatcher};

#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
pub(crate) struct BuildArgs {
    /// Interpreter to target (e.g. `sh`, `cmd.exe`). Defaults to the platform shell.
    #[arg(long)]
    pub(crate) shell: Option<String>,
    /// Print the invocation as JSON.
    #[arg(long)]
    pub(crate) json: bool,
    /// The program (or command prefix) placed verbatim at the start of the line.
    pub(crate) program: String,
    /// Arguments escaped for the chosen interpreter.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) args: Vec<String>,
}

impl BuildArgs {
    /// Builds the invocation, using the configured shell when `--shell` is absent.
    pub(crate) fn invocation(&self, env: &EnvMap) -> Result<Invocation> {
        let config = commons::load_config(env)?;
        let shell = config.shell_request(self.shell.clone());
        Ok(dispatcher::build_invocation(
            &self.program,
            &self.args,
            &shell,
            env,
        ))
    }
}

/// The main handler for the `build` command.
pub fn handle(args: Vec<String>, env: &EnvMap) -> Result<()> {
    let build_args = BuildArgs::try_parse_from(&args)?;
    let invocation = build_args.invocation(env)?;
    println!("{}", commons::render_invocation(&invocation, build_args.json)?);
    Ok(())
}
