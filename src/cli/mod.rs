//! CLI module - argument parsing, prompts, and run orchestration

mod args;
mod prompts;
pub mod run;

pub use args::{Cli, ModeArgs};
pub use prompts::*;
pub use run::{resolve_root, run_rename};
