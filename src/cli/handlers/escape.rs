// EN: src/cli/handlers/escape.rs

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{core::env::EnvMap, models::EscapingMode};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    /// POSIX shell single-quote grammar.
    Sh,
    /// `cmd.exe` caret grammar.
    Cmd,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct EscapeArgs {
    /// The interpreter grammar to escape for.
    grammar: Grammar,
    /// Triple the carets, for arguments passed to a `.bat`/`.cmd` script.
    #[arg(long)]
    double: bool,
    /// The arguments to escape; each is printed on its own line.
    #[arg(required = true, allow_hyphen_values = true)]
    values: Vec<String>,
}

impl EscapeArgs {
    fn mode(&self) -> EscapingMode {
        match self.grammar {
            Grammar::Sh => EscapingMode::Posix,
            Grammar::Cmd => EscapingMode::cmd(self.double),
        }
    }
}

/// The main handler for the `escape` command.
pub fn handle(args: Vec<String>, _env: &EnvMap) -> Result<()> {
    let escape_args = EscapeArgs::try_parse_from(&args)?;
    if escape_args.double && escape_args.grammar == Grammar::Sh {
        log::warn!("--double only applies to the cmd grammar; ignoring it.");
    }

    for line in escape_lines(&escape_args) {
        println!("{line}");
    }
    Ok(())
}

fn escape_lines(escape_args: &EscapeArgs) -> Vec<String> {
    let mode = escape_args.mode();
    escape_args
        .values
        .iter()
        .map(|value| mode.escape(value))
        .collect()
}
