// EN: src/system/mod.rs

//! # System Interaction Layer
//!
//! This module turns a program and its arguments into an interpreter invocation for a
//! concrete host, and hands that invocation to the operating system.
//!
//! ## Modules
//!
//! - **`platform`**: Classifies the host once per call (Windows, macOS, Linux, WSL guest,
//!   other POSIX). Every platform-dependent default is keyed on this value.
//! - **`dispatcher`**: Picks the interpreter for a shell request, escapes each argument
//!   for it, and returns the finished `Invocation`. It never starts a process.
//! - **`opener`**: Resolves the "open with the default handler" command for the host and
//!   delegates to the dispatcher.
//! - **`launcher`**: Converts an `Invocation` into a `std::process::Command` and runs it
//!   with inherited stdio.

pub mod dispatcher;
pub mod launcher;
pub mod opener;
pub mod platform;
