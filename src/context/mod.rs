//! Context management module
//!
//! Reads the kubeconfig, applies context mutations in memory and writes the
//! result back atomically.

mod commands;
mod models;
mod operations;
mod resolve;
mod store;
pub mod validate;

pub use commands::run_command;
pub use models::{
    AuthEntry, ClusterEntry, ContextEntry, Kubeconfig, NamedAuthInfo, NamedCluster, NamedContext,
    NewContext,
};
pub use operations::{Deletion, Switch};
pub use resolve::{default_config_path, resolve_config_path};
pub use store::ContextStore;
