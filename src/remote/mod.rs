//! Remote cluster inspection
//!
//! Reachability checks against the API endpoint and resource listings through
//! the Kubernetes API.

mod client;
mod probe;

pub use client::{ClusterClient, ResourceKind};
pub use probe::{ensure_reachable, probe};
