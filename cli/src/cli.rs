//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Inspect and configure serverless deployments
#[derive(Parser)]
#[command(
    name = "deployctl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Path to the service file (default: serverless.yml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage provider configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show deployed service information
    Info(commands::ServiceArgs),

    /// Resolve the deployment bucket
    Bucket(commands::ServiceArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            config,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            config,
        });

        match command {
            Command::Config(cmd) => commands::config::run(&app, cmd).await,
            Command::Info(args) => commands::info::run(&app, &args).await,
            Command::Bucket(args) => commands::bucket::run(&app, &args).await,
            Command::Version => commands::version::run(&app),
        }
    }
}
