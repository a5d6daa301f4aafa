// EN: src/system/dispatcher.rs

//! Builds the interpreter invocation for a program and its arguments.
//!
//! The interpreter is chosen ahead of spawning so arguments can be escaped for the
//! grammar that will actually parse them.

use crate::{
    constants::{CMD_SHELL_FLAGS, DEFAULT_COMSPEC, ENV_COMSPEC, POSIX_SHELL, POSIX_SHELL_FLAGS},
    core::{classifier, env::EnvMap},
    models::{EscapingMode, Invocation, ShellRequest},
    system::platform::Platform,
};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    /// `cmd` or `cmd.exe` as the last path component, any case.
    static ref CMD_INTERPRETER_RE: Regex =
        Regex::new(r"(?i)(?:^|[\\/])cmd(?:\.exe)?$").expect("valid cmd interpreter regex");
}

/// Builds the invocation for the running host.
pub fn build_invocation<S: AsRef<str>>(
    program: &str,
    args: &[S],
    shell: &ShellRequest,
    env: &EnvMap,
) -> Invocation {
    build_invocation_on(Platform::current(), program, args, shell, env)
}

/// Builds the invocation as it would be on `platform`.
pub fn build_invocation_on<S: AsRef<str>>(
    platform: Platform,
    program: &str,
    args: &[S],
    shell: &ShellRequest,
    env: &EnvMap,
) -> Invocation {
    let interpreter = resolve_interpreter(platform, shell, env);

    let (mode, flags, verbatim_args) = if is_cmd_interpreter(&interpreter) {
        let mode = classifier::classify(program, env).mode();
        (mode, CMD_SHELL_FLAGS, true)
    } else {
        (EscapingMode::Posix, POSIX_SHELL_FLAGS, false)
    };

    let line = join_escaped(program, args, mode);
    debug!("Built {:?} line for '{}': {}", mode, interpreter, line);

    Invocation {
        interpreter,
        flags: flags.iter().map(|flag| flag.to_string()).collect(),
        line,
        verbatim_args,
    }
}

/// The interpreter for `shell` on `platform`.
pub fn resolve_interpreter(platform: Platform, shell: &ShellRequest, env: &EnvMap) -> String {
    match shell {
        ShellRequest::Named(name) => name.clone(),
        ShellRequest::Default if platform.is_windows() => env
            .get_non_empty(ENV_COMSPEC)
            .unwrap_or(DEFAULT_COMSPEC)
            .to_string(),
        ShellRequest::Default => POSIX_SHELL.to_string(),
    }
}

/// Returns `true` if `interpreter` names `cmd.exe`, with or without a directory.
pub fn is_cmd_interpreter(interpreter: &str) -> bool {
    CMD_INTERPRETER_RE.is_match(interpreter)
}

fn join_escaped<S: AsRef<str>>(program: &str, args: &[S], mode: EscapingMode) -> String {
    let mut script = program.to_string();
    for arg in args {
        script.push(' ');
        script.push_str(&mode.escape(arg.as_ref()));
    }
    script
}

// MARK: --- UNIT TESTS ---
