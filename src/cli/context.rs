//! Context command arguments

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'list' subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'switch' subcommand
#[derive(Parser, Debug)]
pub struct SwitchArgs {
    /// Name of context to which you want to switch (prompted when omitted)
    #[arg(short = 'c', long = "context")]
    pub context: Option<String>,
}

/// Arguments for 'rename' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        kube-context rename                       # pick a context and type its new name\n  \
        kube-context rename --from dev --to staging")]
pub struct RenameArgs {
    /// Name of context which you want to rename
    #[arg(short = 'f', long = "from", requires = "to")]
    pub from: Option<String>,

    /// New name of the context
    #[arg(short = 't', long = "to", requires = "from")]
    pub to: Option<String>,
}

/// Arguments for 'delete' subcommand
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of context which you want to delete (prompted when omitted)
    #[arg(short = 'c', long = "context")]
    pub context: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'set-namespace' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        kube-context set-namespace                     # pick from the cluster's namespaces\n  \
        kube-context set-namespace -n web              # verify 'web' exists, then set it\n  \
        kube-context set-namespace -c prod -n web --no-verify")]
pub struct SetNamespaceArgs {
    /// Name of namespace you want to set as default (prompted when omitted)
    #[arg(short = 'n', long = "namespace")]
    pub namespace: Option<String>,

    /// Context to update [default: current context]
    #[arg(short = 'c', long = "context")]
    pub context: Option<String>,

    /// Don't contact the cluster to check that the namespace exists
    #[arg(long, default_value_t = false, requires = "namespace")]
    pub no_verify: bool,
}
