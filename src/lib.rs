//! kube-context - Manage Kubernetes contexts in a user-friendly way
//!
//! A CLI tool to inspect and edit the contexts of a kubeconfig file.
//!
//! # Features
//!
//! - Switch between contexts, interactively or by name
//! - Add, rename and delete contexts
//! - Set a context's default namespace from the cluster's namespaces
//! - Check a cluster's reachability and count its pods and namespaces
//! - Multiple output formats for the context list (table, JSON, YAML, names)
//!
//! # Example
//!
//! ```bash
//! # Pick a context from a list
//! kube-context
//!
//! # Switch directly
//! kube-context switch -c prod
//!
//! # List contexts as JSON
//! kube-context list -o json
//!
//! # Set the default namespace of the current context
//! kube-context set-namespace -n web
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod remote;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use context::{run_command, ContextStore, Kubeconfig, NewContext};
pub use error::{KubeContextError, Result};
pub use output::{output_contexts, ContextRow};
pub use remote::{ClusterClient, ResourceKind};
pub use ui::{Prompter, TerminalPrompter};
