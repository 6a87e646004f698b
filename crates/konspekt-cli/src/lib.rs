//! Konspekt CLI library.
//!
//! Argument parsing and error plumbing for the `konspekt` binary; the
//! actual pipeline lives in `konspekt-pipeline`.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command, RunArgs};
pub use error::{CliError, Result};
