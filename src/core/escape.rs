// EN: src/core/escape.rs

//! Argument escaping for POSIX shells and `cmd.exe`.
//!
//! Both functions are total: every input string, including the empty one, maps to a
//! single token that the target interpreter re-parses into exactly the original text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters a POSIX shell would interpret outside of quotes.
    static ref SH_SPECIAL_RE: Regex =
        Regex::new(r#"[\s'"$`\\;&|<>()*?\[\]{}~#!%]"#).expect("valid sh regex");

    /// Whitespace or quotes force the C-runtime argv quoting pass.
    static ref CMD_NEEDS_QUOTES_RE: Regex =
        Regex::new(r#"[ \t\n\x0B"]"#).expect("valid cmd quoting regex");

    /// Characters the `cmd.exe` line parser acts on unless prefixed with a caret.
    static ref CMD_META_RE: Regex =
        Regex::new(r#"[ !%\^&()<>|"]"#).expect("valid cmd meta regex");
}

// --- POSIX ---

/// Escapes `input` so a POSIX shell reads it back as exactly one word.
///
/// Single quotes inside the argument become `'\''`. When the argument itself starts or
/// ends with a single quote, the redundant empty `''` pair at that boundary is dropped,
/// so `'$1'` encodes to `\''$1'\'` rather than `''\''$1'\'''`.
pub fn escape_sh(input: &str) -> String {
    if input.is_empty() {
        return "''".to_string();
    }

    if !SH_SPECIAL_RE.is_match(input) {
        return input.to_string();
    }

    let quoted = format!("'{}'", input.replace('\'', r"'\''"));

    // Leading `''` pairs are empty words; keep at least one character.
    let mut trimmed = quoted.as_str();
    while let Some(rest) = trimmed.strip_prefix("''") {
        if rest.is_empty() {
            break;
        }
        trimmed = rest;
    }

    trimmed.replace(r"\'''", r"\'")
}

// --- CMD ---

/// Escapes `input` for a command line that goes through `cmd.exe` and then through the
/// target program's C-runtime argv parsing.
///
/// With `double_escape`, the caret pass is applied twice so the argument also survives
/// the nested `cmd.exe` that runs a `.bat`/`.cmd` target.
pub fn escape_cmd(input: &str, double_escape: bool) -> String {
    if input.is_empty() {
        return r#""""#.to_string();
    }

    let quoted = if CMD_NEEDS_QUOTES_RE.is_match(input) {
        quote_for_argv(input)
    } else {
        input.to_string()
    };

    let escaped = caret_escape(&quoted);
    if double_escape {
        caret_escape(&escaped)
    } else {
        escaped
    }
}

/// Wraps `input` in double quotes following the MSVC runtime rules: backslashes are
/// literal unless they precede a quote (or the closing quote), in which case the run
/// is doubled.
fn quote_for_argv(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 2);
    result.push('"');

    let mut chars = input.chars().peekable();
    loop {
        let mut slash_count = 0;
        while chars.next_if_eq(&'\\').is_some() {
            slash_count += 1;
        }

        match chars.next() {
            None => {
                result.push_str(&"\\".repeat(slash_count * 2));
                break;
            }
            Some('"') => {
                result.push_str(&"\\".repeat(slash_count * 2 + 1));
                result.push('"');
            }
            Some(ch) => {
                result.push_str(&"\\".repeat(slash_count));
                result.push(ch);
            }
        }
    }

    result.push('"');
    result
}

fn caret_escape(input: &str) -> String {
    CMD_META_RE.replace_all(input, "^$0").into_owned()
}

// MARK: --- UNIT TESTS ---
