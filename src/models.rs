// EN: src/models.rs

use crate::core::escape;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- ESCAPING ---

/// Selects the grammar used to make one argument safe for an interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapingMode {
    /// Single-quote grammar of a POSIX shell.
    Posix,
    /// `cmd.exe` carets, emitted once. Used for native executables.
    CmdSingle,
    /// `cmd.exe` carets, tripled. Used when the target is a `.bat`/`.cmd` script.
    CmdDouble,
}

impl EscapingMode {
    /// Picks the `cmd.exe` mode for a target that is (or is not) a batch script.
    pub fn cmd(double_escape: bool) -> Self {
        if double_escape {
            Self::CmdDouble
        } else {
            Self::CmdSingle
        }
    }

    /// Encodes `arg` as a single token of this mode's grammar.
    pub fn escape(self, arg: &str) -> String {
        match self {
            Self::Posix => escape::escape_sh(arg),
            Self::CmdSingle => escape::escape_cmd(arg, false),
            Self::CmdDouble => escape::escape_cmd(arg, true),
        }
    }
}

// --- DISPATCH ---

/// Which interpreter a command line should be built for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShellRequest {
    /// The platform default: `ComSpec` on Windows, `sh` elsewhere.
    #[default]
    Default,
    /// An explicit interpreter path or name, used as given.
    Named(String),
}

impl From<&str> for ShellRequest {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

impl From<String> for ShellRequest {
    fn from(value: String) -> Self {
        Self::Named(value)
    }
}

impl From<Option<String>> for ShellRequest {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Default, Self::Named)
    }
}

/// A finished interpreter invocation, ready to be handed to a process launcher.
///
/// The interpreter is started with `flags` followed by the single `line` argument.
/// When `verbatim_args` is set the launcher must pass the arguments to the OS as-is,
/// because `line` is already escaped for `cmd.exe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// The shell program to start, e.g. `sh` or the `ComSpec` path.
    pub interpreter: String,
    /// Flags placed before the command line: `-c` or `/d /s /c`.
    pub flags: Vec<String>,
    /// The program followed by its escaped arguments.
    pub line: String,
    /// Pass the arguments to the OS without further quoting.
    pub verbatim_args: bool,
}

impl Invocation {
    /// The full argument vector for the interpreter: flags, then the command line.
    pub fn argv(&self) -> Vec<&str> {
        self.flags
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.line.as_str()))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.interpreter)?;
        for flag in &self.flags {
            write!(f, " {flag}")?;
        }
        write!(f, " {}", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping_mode_dispatches_to_escapers() {
        assert_eq!(EscapingMode::Posix.escape("hello world"), "'hello world'");
        assert_eq!(EscapingMode::CmdSingle.escape("%PATH%"), "^%PATH^%");
        assert_eq!(EscapingMode::CmdDouble.escape("%PATH%"), "^^^%PATH^^^%");
        assert_eq!(EscapingMode::cmd(true), EscapingMode::CmdDouble);
        assert_eq!(EscapingMode::cmd(false), EscapingMode::CmdSingle);
    }

    #[test]
    fn test_shell_request_conversions() {
        assert_eq!(ShellRequest::from(None), ShellRequest::Default);
        assert_eq!(
            ShellRequest::from(Some("bash".to_string())),
            ShellRequest::Named("bash".to_string())
        );
        assert_eq!(ShellRequest::from("cmd.exe"), ShellRequest::Named("cmd.exe".into()));
    }

    #[test]
    fn test_invocation_argv_appends_line_after_flags() {
        let invocation = Invocation {
            interpreter: "cmd.exe".to_string(),
            flags: vec!["/d".into(), "/s".into(), "/c".into()],
            line: "echo hello".to_string(),
            verbatim_args: true,
        };
        assert_eq!(invocation.argv(), vec!["/d", "/s", "/c", "echo hello"]);
        assert_eq!(invocation.to_string(), "cmd.exe /d /s /c echo hello");
    }
}
