// EN: src/cli/handlers/commons.rs

// Shared helpers for the action handlers.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    core::{
        config::{self, Config},
        env::EnvMap,
    },
    models::Invocation,
};

/// Loads the user configuration, attaching the handler's context to any failure.
pub fn load_config(env: &EnvMap) -> Result<Config> {
    config::load_config(env).context("Failed to load spawnline configuration")
}

/// Renders an invocation either as JSON or as one human-readable block.
pub fn render_invocation(invocation: &Invocation, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(invocation)
            .context("Failed to serialize invocation to JSON");
    }

    let mut out = format!("{} {}\n", "interpreter:".dimmed(), invocation.interpreter.cyan());
    for arg in invocation.argv() {
        out.push_str(&format!("  {}\n", arg.green()));
    }
    if invocation.verbatim_args {
        out.push_str(&format!("{}\n", "(arguments passed verbatim)".dimmed()));
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Invocation {
        Invocation {
            interpreter: "sh".to_string(),
            flags: vec!["-c".to_string()],
            line: "echo 'a b'".to_string(),
            verbatim_args: false,
        }
    }

    #[test]
    fn test_render_json_round_trips() {
        let rendered = render_invocation(&sample(), true).unwrap();
        let parsed: Invocation = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_render_human_lists_argv() {
        colored::control::set_override(false);
        let rendered = render_invocation(&sample(), false).unwrap();
        assert_eq!(rendered, "interpreter: sh\n  -c\n  echo 'a b'");
    }
}
