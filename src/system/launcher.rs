// EN: src/system/launcher.rs

//! Hands a finished [`Invocation`] to the operating system.
//!
//! This is the thin process-launcher seam: no output capture, no buffering policy.
//! The child inherits the terminal and its exit status is reported back.

use crate::{core::env::EnvMap, models::Invocation};
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Failure to run an [`Invocation`] to a successful exit.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The interpreter could not be started.
    #[error("Command '{0}' could not be executed: {1}")]
    Spawn(String, std::io::Error),
    /// The child ran and exited with a failing code.
    #[error("Command '{command}' exited with code {code}.")]
    NonZeroExit {
        /// The invocation as displayed.
        command: String,
        /// The child's exit code.
        code: i32,
    },
    /// The child was killed before it could exit.
    #[error("Command '{0}' was terminated by a signal.")]
    Signaled(String),
}

impl ExecutionError {
    /// The exit code the caller should propagate.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NonZeroExit { code, .. } => *code,
            Self::Signaled(_) => 130,
            Self::Spawn(..) => 1,
        }
    }
}

/// Converts `invocation` into a `std::process::Command` without spawning it.
///
/// On Windows, a `cmd.exe` line is appended with `raw_arg` so the standard library does
/// not re-quote an already escaped script.
pub fn to_command(invocation: &Invocation, env: Option<&EnvMap>) -> StdCommand {
    let mut command = StdCommand::new(&invocation.interpreter);
    push_args(&mut command, invocation);

    if let Some(env) = env {
        command.env_clear();
        command.envs(env.iter());
    }
    command
}

#[cfg(windows)]
fn push_args(command: &mut StdCommand, invocation: &Invocation) {
    use std::os::windows::process::CommandExt;

    if invocation.verbatim_args {
        for arg in invocation.argv() {
            command.raw_arg(arg);
        }
    } else {
        command.args(invocation.argv());
    }
}

#[cfg(not(windows))]
fn push_args(command: &mut StdCommand, invocation: &Invocation) {
    command.args(invocation.argv());
}

/// Runs `invocation` with inherited stdio and waits for it to finish.
pub fn run(invocation: &Invocation, env: Option<&EnvMap>) -> Result<(), ExecutionError> {
    let display = invocation.to_string();
    log::debug!("Spawning: {}", display);

    let status = to_command(invocation, env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ExecutionError::Spawn(display.clone(), e))?;

    check_status(display, status)
}

fn check_status(command: String, status: ExitStatus) -> Result<(), ExecutionError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => {
            log::warn!("Command '{}' exited with code {}", command, code);
            Err(ExecutionError::NonZeroExit { command, code })
        }
        None => Err(ExecutionError::Signaled(command)),
    }
}
