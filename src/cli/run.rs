//! Dispatches to the command handler for the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the error count
//! - `Err` if the command fails (e.g., invalid config, unwritable output)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
