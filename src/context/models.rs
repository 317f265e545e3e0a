//! Kubeconfig data models
//!
//! Mirrors the subset of the kubeconfig schema this tool edits. Every level
//! carries an `extra` map so that keys we do not model (certificate data,
//! tokens, exec plugins, extensions, preferences) survive a load/save cycle.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Keys present in the file that are not modelled explicitly
pub type Extra = BTreeMap<String, serde_yml::Value>;

/// Top-level kubeconfig document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion", default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<NamedCluster>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<NamedContext>,
    /// Name of the active context, empty when none is selected
    #[serde(
        rename = "current-context",
        default,
        deserialize_with = "null_as_default"
    )]
    pub current_context: String,
    /// Credential sets, keyed `users` on disk
    #[serde(rename = "users", default, deserialize_with = "null_as_default")]
    pub auth_infos: Vec<NamedAuthInfo>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A context entry together with its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedContext {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: ContextEntry,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Which cluster and credentials a context uses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: String,
    /// Name of the auth info (`users` entry)
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    /// Default namespace, empty when unset
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A cluster entry together with its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCluster {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: ClusterEntry,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Connection endpoint of a cluster
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub server: String,
    /// Path to the certificate authority file
    #[serde(
        rename = "certificate-authority",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_authority: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// An auth info entry together with its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAuthInfo {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: AuthEntry,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Client credentials
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthEntry {
    #[serde(
        rename = "client-certificate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_certificate: Option<String>,
    #[serde(rename = "client-key", default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Parameters collected by the add flow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewContext {
    pub name: String,
    pub server: String,
    pub certificate_authority: Option<String>,
    pub client_certificate: Option<String>,
    pub client_key: Option<String>,
}

/// kubectl writes empty collections as `null`; treat them as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
