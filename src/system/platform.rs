// EN: src/system/platform.rs

use crate::constants::{KERNEL_RELEASE_PATH, WSL_KERNEL_MARKER};
use std::fmt;

/// The host identity that decides the default interpreter and open command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Native Windows; the interpreter is `ComSpec`.
    Windows,
    /// macOS; opens targets with `open`.
    MacOs,
    /// A Linux kernel that is not a WSL guest.
    Linux,
    /// A Linux kernel running as a guest under Windows (WSL).
    WslGuest,
    /// Any other POSIX system (BSDs, illumos, ...).
    OtherPosix,
}

impl Platform {
    /// Classifies a host from its OS name (as in `std::env::consts::OS`) and its
    /// kernel release string.
    pub fn classify(os: &str, kernel_release: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" if is_wsl_release(kernel_release) => Self::WslGuest,
            "linux" => Self::Linux,
            _ => Self::OtherPosix,
        }
    }

    /// Classifies the running host.
    pub fn current() -> Self {
        let os = std::env::consts::OS;
        let release = if os == "linux" {
            kernel_release()
        } else {
            String::new()
        };
        let platform = Self::classify(os, &release);
        log::debug!(
            "Host classified as {} (os: {}, kernel: '{}')",
            platform,
            os,
            release
        );
        platform
    }

    /// `true` only for native Windows; a WSL guest runs POSIX shells.
    pub fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::WslGuest => "wsl",
            Self::OtherPosix => "posix",
        };
        f.write_str(name)
    }
}

fn is_wsl_release(kernel_release: &str) -> bool {
    kernel_release
        .to_ascii_lowercase()
        .contains(WSL_KERNEL_MARKER)
}

/// Reads the running kernel release. Returns an empty string when it is unavailable.
fn kernel_release() -> String {
    match std::fs::read_to_string(KERNEL_RELEASE_PATH) {
        Ok(release) => release.trim().to_string(),
        Err(e) => {
            log::debug!("Could not read {}: {}", KERNEL_RELEASE_PATH, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_hosts() {
        assert_eq!(Platform::classify("windows", ""), Platform::Windows);
        assert_eq!(Platform::classify("macos", "23.1.0"), Platform::MacOs);
        assert_eq!(
            Platform::classify("linux", "6.8.0-45-generic"),
            Platform::Linux
        );
        assert_eq!(Platform::classify("freebsd", "14.0-RELEASE"), Platform::OtherPosix);
        assert_eq!(Platform::classify("openbsd", ""), Platform::OtherPosix);
    }

    #[test]
    fn test_classify_wsl_is_case_insensitive() {
        assert_eq!(
            Platform::classify("linux", "5.15.153.1-microsoft-standard-WSL2"),
            Platform::WslGuest
        );
        assert_eq!(
            Platform::classify("linux", "4.4.0-19041-Microsoft"),
            Platform::WslGuest
        );
        assert_eq!(Platform::classify("linux", "MICROSOFT"), Platform::WslGuest);
    }

    #[test]
    fn test_only_native_windows_is_windows() {
        assert!(Platform::Windows.is_windows());
        assert!(!Platform::WslGuest.is_windows());
        assert!(!Platform::MacOs.is_windows());
    }

    #[test]
    fn test_current_matches_compile_target() {
        let current = Platform::current();
        if cfg!(windows) {
            assert_eq!(current, Platform::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(current, Platform::MacOs);
        } else if cfg!(target_os = "linux") {
            assert!(matches!(current, Platform::Linux | Platform::WslGuest));
        }
    }
}
