// EN: src/bin/spawnline.rs

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::*;
use spawnline::{
    EnvMap,
    cli::{Cli, handlers},
    system::launcher::ExecutionError,
};

// --- Command Definition and Registry ---

/// Defines an action, its aliases, and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>, &EnvMap) -> Result<()>,
}

/// The single source of truth for all actions.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "build",
        aliases: &[],
        handler: handlers::build::handle,
    },
    CommandDefinition {
        name: "escape",
        aliases: &["esc"],
        handler: handlers::escape::handle,
    },
    CommandDefinition {
        name: "open",
        aliases: &[],
        handler: handlers::open::handle,
    },
    CommandDefinition {
        name: "run",
        aliases: &["exec"],
        handler: handlers::run::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Sets up logging, dispatches to the action's handler and handles errors centrally.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // A failing child already reported on the terminal; just forward its code.
        if let Some(exec_err) = e.downcast_ref::<ExecutionError>() {
            if !matches!(exec_err, ExecutionError::Spawn(..)) {
                std::process::exit(exec_err.exit_code());
            }
        }

        // Clap's own errors (help, version, usage) know how to print themselves.
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }

        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let command = find_command(&cli.action).ok_or_else(|| {
        let known: Vec<_> = COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect();
        anyhow!(
            "Unknown action '{}'. Expected one of: {}",
            cli.action,
            known.join(", ")
        )
    })?;

    let env = EnvMap::from_process();
    (command.handler)(cli.args, &env)
}
