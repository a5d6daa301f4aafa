// EN: src/system/opener.rs

use crate::{
    constants::{ENV_BROWSER, MACOS_OPEN_COMMAND, WINDOWS_OPEN_COMMAND, XDG_OPEN_COMMAND},
    core::env::EnvMap,
    models::{Invocation, ShellRequest},
    system::{dispatcher, platform::Platform},
};
use thiserror::Error;

/// Failure to pick a command for opening a target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// Running under WSL with `BROWSER` unset or empty.
    #[error(
        "no handler command available: running under WSL and BROWSER is not set (pass a command explicitly or set BROWSER)"
    )]
    NoHandler,
}

impl Platform {
    /// The command that opens a URL or path with the default handler on this host.
    ///
    /// A WSL guest has no reliable GUI bridge, so it requires `BROWSER`.
    pub fn default_open_command(self, env: &EnvMap) -> Result<String, OpenError> {
        match self {
            Self::Windows => Ok(WINDOWS_OPEN_COMMAND.to_string()),
            Self::MacOs => Ok(MACOS_OPEN_COMMAND.to_string()),
            Self::Linux | Self::OtherPosix => Ok(XDG_OPEN_COMMAND.to_string()),
            Self::WslGuest => env
                .get_non_empty(ENV_BROWSER)
                .map(str::to_string)
                .ok_or(OpenError::NoHandler),
        }
    }
}

/// Builds the invocation that opens `target` on the running host.
pub fn open(target: &str, command: Option<&str>, env: &EnvMap) -> Result<Invocation, OpenError> {
    open_on(Platform::current(), target, command, env)
}

/// Builds the invocation that opens `target` as it would be on `platform`.
///
/// `command` replaces the platform default but never the interpreter; opening always
/// goes through the default shell. A WSL guest needs `BROWSER` even when `command`
/// is given.
pub fn open_on(
    platform: Platform,
    target: &str,
    command: Option<&str>,
    env: &EnvMap,
) -> Result<Invocation, OpenError> {
    let default = platform.default_open_command(env)?;
    let base = command.map_or(default, str::to_string);
    log::debug!("Opening '{}' with '{}' on {}", target, base, platform);

    Ok(dispatcher::build_invocation_on(
        platform,
        &base,
        &[target],
        &ShellRequest::Default,
        env,
    ))
}
