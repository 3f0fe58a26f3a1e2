//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::output::OutputContext;

/// Launch a WordPress EC2 instance and open it in your browser
#[derive(Parser)]
#[command(name = "wplaunch", version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(flatten)]
    pub provision: commands::provision::ProvisionArgs,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if any provisioning step or the browser launch fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            provision,
        } = self;
        let ctx = OutputContext::new(no_color, quiet || json);
        commands::provision::run(&ctx, &provision, json).await
    }
}
