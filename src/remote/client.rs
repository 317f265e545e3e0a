//! Kubernetes API client for resource listings

use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config, ResourceExt};
use log::debug;
use std::fmt;
use std::path::Path;

use crate::error::{KubeContextError, Result};

/// Resource kinds the tool can count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Namespaces,
    Pods,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Namespaces => write!(f, "namespaces"),
            ResourceKind::Pods => write!(f, "pods"),
        }
    }
}

/// Client bound to one context of a kubeconfig
pub struct ClusterClient {
    client: Client,
    context: String,
}

impl ClusterClient {
    /// Build a client for `context` from the kubeconfig at `path`
    pub async fn connect(path: &Path, context: &str) -> Result<Self> {
        let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
            KubeContextError::Remote(format!(
                "Failed to load {} for the API client: {}",
                path.display(),
                e
            ))
        })?;

        let options = KubeConfigOptions {
            context: Some(context.to_string()),
            ..Default::default()
        };
        let config = Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|e| {
                KubeContextError::Remote(format!(
                    "Failed to build client configuration for context '{}': {}",
                    context, e
                ))
            })?;

        debug!(
            "Connecting to {} for context '{}'",
            config.cluster_url, context
        );
        let client = Client::try_from(config)?;

        Ok(Self {
            client,
            context: context.to_string(),
        })
    }

    /// Names of all resources of `kind`, across every namespace
    pub async fn list(&self, kind: ResourceKind) -> Result<Vec<String>> {
        let params = ListParams::default();
        let names: Vec<String> = match kind {
            ResourceKind::Namespaces => {
                let api: Api<Namespace> = Api::all(self.client.clone());
                api.list(&params)
                    .await?
                    .items
                    .iter()
                    .map(|ns| ns.name_any())
                    .collect()
            }
            ResourceKind::Pods => {
                let api: Api<Pod> = Api::all(self.client.clone());
                api.list(&params)
                    .await?
                    .items
                    .iter()
                    .map(|pod| pod.name_any())
                    .collect()
            }
        };

        debug!(
            "Found {} {} in context '{}'",
            names.len(),
            kind,
            self.context
        );
        Ok(names)
    }
}
