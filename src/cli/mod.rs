//! CLI argument parsing

mod common;
mod context;

pub use common::OutputFormat;
pub use context::{DeleteArgs, ListArgs, RenameArgs, SetNamespaceArgs, SwitchArgs};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::defaults;

/// kube-context CLI
#[derive(Parser, Debug)]
#[command(name = "kube-context")]
#[command(version)]
#[command(about = "Manage Kubernetes contexts in a user-friendly way")]
#[command(
    long_about = "kube-context simplifies the management of the contexts in your kubeconfig, \
                  letting you switch between Kubernetes clusters with ease.\n\n\
                  Without a subcommand it switches the current context."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Name of the context to switch to (prompted when omitted)
    #[arg(short = 'c', long = "context")]
    pub context: Option<String>,

    /// Kubeconfig file location [default: $KUBECONFIG or ~/.kube/config]
    #[arg(long = "kubeconfig", visible_alias = "config", global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all available contexts in the kubeconfig
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Display the current context
    Current,

    /// Switch to another context
    #[command(visible_alias = "use")]
    Switch(SwitchArgs),

    /// Add a context to the kubeconfig (interactive)
    Add,

    /// Change a context's name
    #[command(visible_alias = "mv")]
    Rename(RenameArgs),

    /// Remove a context from the kubeconfig
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// Change a context's default namespace
    #[command(name = "set-namespace", visible_alias = "ns")]
    SetNamespace(SetNamespaceArgs),

    /// Retrieve information regarding the current context's cluster
    Info,
}
