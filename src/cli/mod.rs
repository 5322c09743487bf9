//! Command-line interface.

mod args;
pub mod generate;
pub mod init;

pub use args::{Cli, Commands, GenerateArgs};
