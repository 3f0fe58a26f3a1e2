//! wplaunch - Launch a WordPress EC2 instance and open it in the browser

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wplaunch_cli::cli::Cli;
use wplaunch_cli::domain::ProvisionError;
use wplaunch_cli::output::json;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = cli.run().await {
        if json_mode {
            let code = e
                .downcast_ref::<ProvisionError>()
                .map_or("ERROR", ProvisionError::code);
            match json::format_error(&format!("{e:#}"), code) {
                Ok(out) => println!("{out}"),
                Err(_) => eprintln!("Error: {e:#}"),
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
