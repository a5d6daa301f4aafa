// EN: src/cli/handlers/mod.rs

// One module per CLI action. Each exposes `handle(args, env)`.

pub mod build;
pub mod commons;
pub mod escape;
pub mod open;
pub mod run;
