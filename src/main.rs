//! kube-context - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use kube_context::ui::message;
use kube_context::{run_command, Cli, TerminalPrompter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting kube-context v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: command={:?}, context={:?}, kubeconfig={:?}",
        cli.command, cli.context, cli.kubeconfig
    );

    let prompter = TerminalPrompter::new();
    match run_command(&cli, &prompter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => message::report(&e),
    }
}
