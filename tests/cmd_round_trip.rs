// EN: tests/cmd_round_trip.rs

//! Runs escaped arguments through a real `cmd.exe` and checks that the target program
//! receives them unchanged.
//!
//! `spawnline escape sh -- <arg>` serves as the argv echo: it prints `escape_sh(arg)`,
//! so its stdout pins down exactly what arrived in `argv`.

#![cfg(windows)]

use spawnline::{
    EnvMap, Platform, ShellRequest, build_invocation_on, constants::ENV_PATH, escape_sh,
    system::launcher,
};
use std::{fs, path::Path};
use tempfile::TempDir;

const INPUTS: &[&str] = &[
    "",
    "test",
    "%PATH%",
    r#""%PATH%""#,
    "'%PATH%'",
    r"\%PATH%",
    r#"--arg="%PATH%""#,
    r#"--arg=npm exec -c "%PATH%""#,
    "--arg=npm exec -c '%PATH%'",
    r#"'--arg=npm exec -c "%PATH%"'"#,
    r#""C:\Program Files\test.bat""#,
    r#""C:\Program Files\test%.bat""#,
    "% % %",
    "hello^^^^^^",
    "hello world",
    r#"hello"world"#,
    r#"hello""world"#,
    r"hello\world",
    r"hello\\world",
    r#"hello\"world"#,
    r#"hello\\"world"#,
    r"hello world\",
    "hello %PATH%",
];

/// The process environment with `dirs` searched ahead of the inherited `PATH`.
fn env_with_path(dirs: &[&Path]) -> EnvMap {
    let inherited = std::env::var_os("PATH").unwrap_or_default();
    let search = std::env::join_paths(
        dirs.iter()
            .map(|dir| dir.to_path_buf())
            .chain(std::env::split_paths(&inherited)),
    )
    .unwrap();
    EnvMap::from_process().with(ENV_PATH, search.to_string_lossy())
}

fn echoed_through_cmd(program: &str, input: &str, env: &EnvMap) -> String {
    let invocation = build_invocation_on(
        Platform::Windows,
        program,
        &[input],
        &ShellRequest::from("cmd.exe"),
        env,
    );
    let output = launcher::to_command(&invocation, Some(env))
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "`{invocation}` failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_single_escape_round_trips_to_native_executable() {
    // --- Setup ---
    let bin = Path::new(env!("CARGO_BIN_EXE_spawnline"));
    let bin_dir = bin.parent().unwrap();
    let env = env_with_path(&[bin_dir]);

    // --- Execute & Assert ---
    for input in INPUTS {
        let stdout = echoed_through_cmd("spawnline escape sh --", input, &env);
        assert_eq!(
            stdout,
            format!("{}\n", escape_sh(input)),
            "`{input}` did not survive a single cmd.exe pass"
        );
    }
}

#[test]
fn test_double_escape_round_trips_through_batch_shim() {
    // --- Setup ---
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("shim.cmd"),
        "@echo off\r\nspawnline escape sh -- %*\r\n",
    )
    .unwrap();
    let bin = Path::new(env!("CARGO_BIN_EXE_spawnline"));
    let env = env_with_path(&[temp.path(), bin.parent().unwrap()]);

    let classification = spawnline::classify("shim", &env);
    assert!(classification.double_escape);

    // --- Execute & Assert ---
    for input in INPUTS {
        let stdout = echoed_through_cmd("shim", input, &env);
        assert_eq!(
            stdout,
            format!("{}\n", escape_sh(input)),
            "`{input}` did not survive the nested cmd.exe of a batch script"
        );
    }
}
