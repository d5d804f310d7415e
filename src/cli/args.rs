//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan PHP sources and write a POT template
//! - `init`: Write a default `.wppotrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Options for the `extract` command. Every option overrides the
/// corresponding config file value.
#[derive(Debug, Clone, Default, Parser)]
pub struct ExtractArgs {
    /// Source code root directory; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Only extract calls for this text domain
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Project name for the header (defaults to the domain)
    #[arg(long)]
    pub package: Option<String>,

    /// Report-Msgid-Bugs-To header value
    #[arg(long)]
    pub bug_report: Option<String>,

    /// Last-Translator header value
    #[arg(long)]
    pub last_translator: Option<String>,

    /// Language-Team header value
    #[arg(long)]
    pub team: Option<String>,

    /// Emit only the required core headers
    #[arg(long, conflicts_with = "headers")]
    pub no_headers: bool,

    /// Custom header, may be repeated: --header "Hello-World=This is a test"
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Output file (defaults to `destFile` relative to the source root)
    #[arg(short = 'o', long, conflicts_with = "stdout")]
    pub dest_file: Option<PathBuf>,

    /// Write the template to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into a POT file
    Extract(ExtractCommand),
    /// Initialize a .wppotrc.json config file
    Init,
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid header '{}': expected NAME=VALUE", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid header '{}': name is empty", s));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
