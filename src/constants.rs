// EN: src/constants.rs

/// The interpreter used for `ShellRequest::Default` on every non-Windows host.
pub const POSIX_SHELL: &str = "sh";

/// Fallback for `ComSpec` when the environment does not define it.
pub const DEFAULT_COMSPEC: &str = r"C:\Windows\System32\cmd.exe";

/// Invocation flags for POSIX-style interpreters.
pub const POSIX_SHELL_FLAGS: &[&str] = &["-c"];

/// Invocation flags for `cmd.exe`: no AutoRun, keep quotes as-is, run and exit.
pub const CMD_SHELL_FLAGS: &[&str] = &["/d", "/s", "/c"];

/// Used when `PATHEXT` is absent from the caller's environment.
pub const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Extensions whose targets are re-parsed by a nested `cmd.exe`.
pub const BATCH_EXTENSIONS: &[&str] = &["bat", "cmd"];

// --- Open commands ---

/// `start` treats its first quoted token as a window title, hence the empty one.
pub const WINDOWS_OPEN_COMMAND: &str = r#"start """#;
/// Hands a URL or path to Launch Services on macOS.
pub const MACOS_OPEN_COMMAND: &str = "open";
/// The freedesktop opener used on Linux and other POSIX hosts.
pub const XDG_OPEN_COMMAND: &str = "xdg-open";

/// Substring of the kernel release that identifies a WSL guest.
pub const WSL_KERNEL_MARKER: &str = "microsoft";

/// Where Linux exposes the running kernel release.
pub const KERNEL_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

// --- Environment variables ---

/// Directories searched when resolving a bare program name.
pub const ENV_PATH: &str = "PATH";
/// Executable extensions tried after a bare program name.
pub const ENV_PATHEXT: &str = "PATHEXT";
/// The Windows command interpreter.
pub const ENV_COMSPEC: &str = "ComSpec";
/// The browser command a WSL guest must provide for `open`.
pub const ENV_BROWSER: &str = "BROWSER";

/// Overrides the location of the configuration file.
pub const ENV_CONFIG_PATH: &str = "SPAWNLINE_CONFIG";

// --- Configuration ---

/// The name of the directory holding spawnline configuration (in ~/.config/).
pub const CONFIG_DIR_NAME: &str = "spawnline";

/// The name of the configuration file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";
