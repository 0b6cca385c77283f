use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Herald: email drafting and live news briefings from the terminal.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Completion model id override.
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draft emails from a description of the situation.
    Email {
        /// Name used to sign the drafts.
        #[arg(long)]
        sender: Option<String>,
        /// Initial tone profile.
        #[arg(long)]
        style: Option<String>,
    },
    /// Ask questions about the current top headlines.
    News {
        /// Initial briefing profile.
        #[arg(long)]
        style: Option<String>,
        /// Country label or code.
        #[arg(long)]
        country: Option<String>,
        /// Headlines fetched per question (3-10).
        #[arg(long)]
        count: Option<u32>,
    },
    /// List the available tone and briefing profiles.
    Styles,
    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Tracing directive: `--log-level` wins over the config file.
    pub fn log_directive(&self, configured: &'static str) -> String {
        match self.log_level.as_deref() {
            Some(level) if !level.contains('=') => format!("herald={level}"),
            Some(directive) => directive.to_string(),
            None => configured.to_string(),
        }
    }
}
