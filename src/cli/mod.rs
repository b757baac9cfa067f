//! CLI module for the FAQ gateway
//!
//! `serve` (the default) runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// FAQ gateway - multilingual FAQ API
#[derive(Parser)]
#[command(name = "faq-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API server
    #[default]
    Serve,
}
