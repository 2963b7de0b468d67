use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blockwatch — join/leave notifications for a Minecraft server.
#[derive(Parser, Debug)]
#[command(name = "blockwatch", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "debug" or "blockwatch_core=trace").
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Watch the server and announce joins and leaves (the default).
    Watch,
    /// Query the server once and print a status summary.
    Status,
}

pub fn parse() -> Args {
    Args::parse()
}
