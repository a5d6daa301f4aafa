// EN: src/core/classifier.rs

//! Decides whether a `cmd.exe` command line targets a batch script.
//!
//! A `.bat`/`.cmd` target is parsed by a second `cmd.exe`, so its arguments need the
//! double caret form. Resolution never fails the caller: any miss degrades to single
//! escaping.

use crate::{
    constants::{BATCH_EXTENSIONS, DEFAULT_PATHEXT, ENV_PATH, ENV_PATHEXT},
    core::env::EnvMap,
    models::EscapingMode,
};
use log::debug;
use std::path::{Path, PathBuf};

/// The outcome of classifying the leading command of a `cmd.exe` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The leading token as it appears in the command line, quotes included.
    pub token: String,
    /// The file the token resolved to, if any.
    pub resolved: Option<PathBuf>,
    /// `true` when `resolved` is a batch script.
    pub double_escape: bool,
}

impl Classification {
    /// The escaping mode arguments following this command need.
    pub fn mode(&self) -> EscapingMode {
        EscapingMode::cmd(self.double_escape)
    }
}

/// Extracts the first space-delimited token of `command`.
///
/// A `"` or `'` toggles a quoted run, so `"two words" hello` yields `"two words"`.
/// The quote characters are kept.
pub fn leading_token(command: &str) -> &str {
    let mut inside_quotes = false;
    for (idx, ch) in command.char_indices() {
        match ch {
            ' ' if !inside_quotes => return command.get(..idx).unwrap_or(command),
            '"' | '\'' => inside_quotes = !inside_quotes,
            _ => {}
        }
    }
    command
}

/// Classifies the executable that `command` starts with, resolving it against the
/// `PATH` and `PATHEXT` of `env`. On Windows the current directory is searched first.
pub fn classify(command: &str, env: &EnvMap) -> Classification {
    let token = leading_token(command);
    let resolved = resolve_executable(token, env);

    let double_escape = resolved.as_deref().is_some_and(is_batch_script);
    debug!(
        "Classified '{}' as {:?} (resolved: {:?})",
        token,
        EscapingMode::cmd(double_escape),
        resolved
    );

    Classification {
        token: token.to_string(),
        resolved,
        double_escape,
    }
}

/// Finds the file `token` would run, or `None` if it cannot be resolved.
pub fn resolve_executable(token: &str, env: &EnvMap) -> Option<PathBuf> {
    let cwd = if cfg!(windows) {
        std::env::current_dir().ok()
    } else {
        None
    };
    resolve_executable_from(token, env, cwd.as_deref())
}

/// Resolves `token` the way `cmd.exe` does: `cwd` (when given) before every `PATH` entry.
fn resolve_executable_from(token: &str, env: &EnvMap, cwd: Option<&Path>) -> Option<PathBuf> {
    let name: String = token.chars().filter(|c| *c != '"' && *c != '\'').collect();
    if name.is_empty() {
        return None;
    }

    let extensions = path_extensions(env);
    let candidates = candidate_names(&name, &extensions);

    if name.contains(['/', '\\']) {
        return candidates
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.is_file());
    }

    let search_path = env.get(ENV_PATH).unwrap_or_default();
    if search_path.is_empty() {
        debug!("No PATH in the environment for '{}'", name);
    }

    cwd.map(Path::to_path_buf)
        .into_iter()
        .chain(std::env::split_paths(search_path))
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates.iter().map(move |c| dir.join(c)))
        .find(|candidate| candidate.is_file())
}

/// The `PATHEXT` list, normalized to lowercase with a leading dot.
fn path_extensions(env: &EnvMap) -> Vec<String> {
    env.get_non_empty(ENV_PATHEXT)
        .unwrap_or(DEFAULT_PATHEXT)
        .split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

/// File names to probe for `name`. The bare name is only tried when it already carries
/// one of the executable extensions, so a sibling `tool` shell script never shadows
/// `tool.cmd`.
fn candidate_names(name: &str, extensions: &[String]) -> Vec<String> {
    let lower = name.to_ascii_lowercase();
    let has_known_ext = extensions.iter().any(|ext| lower.ends_with(ext.as_str()));

    let mut candidates = Vec::with_capacity(extensions.len() + 1);
    if has_known_ext {
        candidates.push(name.to_string());
    }
    candidates.extend(extensions.iter().map(|ext| format!("{name}{ext}")));
    candidates
}

fn is_batch_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            BATCH_EXTENSIONS
                .iter()
                .any(|batch| ext.eq_ignore_ascii_case(batch))
        })
}
