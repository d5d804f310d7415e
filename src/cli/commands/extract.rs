use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::{CommandResult, ExtractSummary};
use crate::{
    cli::args::ExtractCommand,
    core::{RunContext, render_pot},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.args)?;
    tracing::debug!(
        "extracting from {} file(s) under {}",
        ctx.files.len(),
        ctx.root_dir.display()
    );

    let output = ctx.run();
    let pot = render_pot(&output.catalog);

    match &ctx.destination {
        Some(path) => write_pot(path, &pot)?,
        None => io::stdout()
            .lock()
            .write_all(pot.as_bytes())
            .context("Failed to write to stdout")?,
    }

    Ok(CommandResult::extract(ExtractSummary {
        files_scanned: ctx.files.len(),
        skipped_paths: ctx.skipped_paths,
        entry_count: output.catalog.len(),
        stats: output.stats,
        destination: ctx.destination.clone(),
        read_failures: output.read_failures,
        skipped_calls: output.skipped_calls,
    }))
}

fn write_pot(path: &Path, pot: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    fs::write(path, pot).with_context(|| format!("Failed to write POT file: {:?}", path))
}
