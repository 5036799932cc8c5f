//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Clinic staffing and intake toolkit: staff hierarchy trees and priority triage queues
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the sample staff hierarchy and print its traversal orders
    Hierarchy,

    /// Run the sample emergency intake scenario
    Intake,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
