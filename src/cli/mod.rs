// EN: src/cli/mod.rs

use clap::Parser;

pub mod handlers;

/// spawnline: build command lines that survive `sh -c` and `cmd.exe /d /s /c`.
///
/// Actions:
/// - `spawnline escape <sh|cmd> [--double] <ARG>...`
/// - `spawnline build [--shell <SHELL>] [--json] <PROGRAM> [ARGS]...`
/// - `spawnline run [--shell <SHELL>] <PROGRAM> [ARGS]...`
/// - `spawnline open [--command <CMD>] [--dry-run] [--json] <TARGET>`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The action to perform.
    pub action: String,

    /// All remaining arguments, passed to the action's own parser.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
