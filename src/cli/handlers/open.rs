// EN: src/cli/handlers/open.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use super::commons;
use crate::{
    core::env::EnvMap,
    models::Invocation,
    system::{launcher, opener},
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct OpenArgs {
    /// The URL or path to open.
    target: String,
    /// Command to open the target with, instead of the platform default.
    #[arg(long)]
    command: Option<String>,
    /// Print the invocation instead of running it.
    #[arg(long)]
    dry_run: bool,
    /// With `--dry-run`, print the invocation as JSON.
    #[arg(long)]
    json: bool,
}

impl OpenArgs {
    fn invocation(&self, env: &EnvMap) -> Result<Invocation> {
        let config = commons::load_config(env)?;
        let command = config.open_command(self.command.clone());
        Ok(opener::open(&self.target, command.as_deref(), env)?)
    }
}

/// The main handler for the `open` command.
pub fn handle(args: Vec<String>, env: &EnvMap) -> Result<()> {
    let open_args = OpenArgs::try_parse_from(&args)?;
    let invocation = open_args.invocation(env)?;

    if open_args.dry_run {
        println!("{}", commons::render_invocation(&invocation, open_args.json)?);
        return Ok(());
    }

    println!("\n> {}", invocation.line.green());
    launcher::run(&invocation, None)?;
    Ok(())
}
