pub mod check;
pub mod lookup;
pub mod stats;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use rego_common::config::{DEFAULT_REGISTRATIONS, DEFAULT_VEHICLE_SPECS};

#[derive(Parser)]
#[command(name = "rego")]
#[command(about = "Look up vehicles by registration.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Vehicle specification CSV
    #[arg(long, global = true, default_value = DEFAULT_VEHICLE_SPECS)]
    pub specs: PathBuf,

    /// Registration binding CSV
    #[arg(long, global = true, default_value = DEFAULT_REGISTRATIONS)]
    pub regos: PathBuf,

    /// Print less; repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what the bootstrap loaded and skipped
    #[command(alias = "s")]
    Stats,
    /// Find the vehicle behind a registration
    #[command(alias = "g")]
    Get { registration: String },
    /// Find a vehicle by id, registered or not
    #[command(alias = "v")]
    Vehicle { vehicle_id: String },
    /// Test whether a cataloged vehicle could take a registration
    #[command(alias = "c")]
    Check {
        registration: String,
        vehicle_id: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
