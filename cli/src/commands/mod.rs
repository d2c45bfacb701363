//! Command handlers.
//!
//! Each command builds a `HookRegistry` over its own run context, registers
//! its handlers, and runs its lifecycle events in order.

pub mod bucket;
pub mod config;
pub mod info;
pub mod version;

use clap::Args;

/// Target selection shared by commands that talk to a deployed stack.
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// Stage of the service (default: provider.stage, then `dev`)
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Region of the service (default: provider.region, then `us-east-1`)
    #[arg(short, long)]
    pub region: Option<String>,

    /// AWS profile to use for the lookup
    #[arg(long, value_name = "NAME")]
    pub aws_profile: Option<String>,
}
