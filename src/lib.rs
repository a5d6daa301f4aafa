// EN: src/lib.rs

//! Build command lines that survive a trip through `sh -c` or `cmd.exe /d /s /c`.
//!
//! ```
//! use spawnline::{EnvMap, Platform, ShellRequest, build_invocation_on};
//!
//! let invocation = build_invocation_on(
//!     Platform::Linux,
//!     "echo",
//!     &["hello world"],
//!     &ShellRequest::Default,
//!     &EnvMap::new(),
//! );
//! assert_eq!(invocation.argv(), vec!["-c", "echo 'hello world'"]);
//! ```

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;

pub use crate::core::{
    classifier::{Classification, classify, leading_token},
    env::EnvMap,
    escape::{escape_cmd, escape_sh},
};
pub use crate::models::{EscapingMode, Invocation, ShellRequest};
pub use crate::system::{
    dispatcher::{build_invocation, build_invocation_on},
    opener::{OpenError, open, open_on},
    platform::Platform,
};
