//! In-memory context mutations
//!
//! Every operation validates before it touches the document, so a failed call
//! leaves the [`Kubeconfig`] exactly as it was. Persisting is the caller's job.

use std::collections::HashSet;

use crate::config::kubeconfig as kubeconfig_config;
use crate::error::{KubeContextError, Result};

use super::models::{
    AuthEntry, ClusterEntry, ContextEntry, Extra, Kubeconfig, NamedAuthInfo, NamedCluster,
    NamedContext, NewContext,
};

/// Outcome of switching the active context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// current-context now points at the requested context
    Switched,
    /// The requested context was already active; nothing changed
    AlreadyActive,
}

/// Outcome of deleting a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    /// The deleted context was not the active one
    Inactive,
    /// The deleted context was active; current-context moved to this one
    ReassignedTo(String),
    /// The deleted context was active and was the last one
    ActiveCleared,
}

/// Context names must be non-empty and carry no surrounding whitespace
fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.trim() != name {
        return Err(KubeContextError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl Kubeconfig {
    /// An empty document, as written for a brand new kubeconfig
    pub fn empty() -> Self {
        Self {
            api_version: Some(kubeconfig_config::API_VERSION.to_string()),
            kind: Some(kubeconfig_config::KIND.to_string()),
            ..Default::default()
        }
    }

    /// Context names in file order
    pub fn context_names(&self) -> Vec<String> {
        self.contexts.iter().map(|c| c.name.clone()).collect()
    }

    /// The active context name, verbatim (may be empty or dangling)
    pub fn current_context(&self) -> &str {
        &self.current_context
    }

    pub fn has_context(&self, name: &str) -> bool {
        self.contexts.iter().any(|c| c.name == name)
    }

    pub fn context(&self, name: &str) -> Option<&ContextEntry> {
        self.contexts
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.context)
    }

    pub fn cluster(&self, name: &str) -> Option<&ClusterEntry> {
        self.clusters
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.cluster)
    }

    /// Whether current-context names a context that no longer exists
    pub fn has_dangling_current_context(&self) -> bool {
        !self.current_context.is_empty() && !self.has_context(&self.current_context)
    }

    /// API server URL of the cluster a context points at
    pub fn server_for(&self, context: &str) -> Result<&str> {
        let entry = self
            .context(context)
            .ok_or_else(|| KubeContextError::not_found(context, &self.context_names()))?;
        let cluster =
            self.cluster(&entry.cluster)
                .ok_or_else(|| KubeContextError::ClusterNotFound {
                    context: context.to_string(),
                    cluster: entry.cluster.clone(),
                })?;
        Ok(&cluster.server)
    }

    /// Name of the first context that appears more than once, if any
    pub fn duplicate_context_name(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.contexts
            .iter()
            .map(|c| c.name.as_str())
            .find(|name| !seen.insert(*name))
    }

    /// Make `name` the active context
    pub fn switch_context(&mut self, name: &str) -> Result<Switch> {
        if !self.has_context(name) {
            return Err(KubeContextError::not_found(name, &self.context_names()));
        }
        if self.current_context == name {
            return Ok(Switch::AlreadyActive);
        }
        self.current_context = name.to_string();
        Ok(Switch::Switched)
    }

    /// Add a context with a cluster and user of the same name.
    ///
    /// Cluster and user entries already using that name are replaced; they
    /// are typically leftovers of a deleted context.
    pub fn add_context(&mut self, new: NewContext) -> Result<()> {
        check_name(&new.name)?;
        if self.has_context(&new.name) {
            return Err(KubeContextError::NameConflict(new.name));
        }

        let cluster = NamedCluster {
            name: new.name.clone(),
            cluster: ClusterEntry {
                server: new.server,
                certificate_authority: new.certificate_authority,
                extra: Extra::new(),
            },
            extra: Extra::new(),
        };
        match self.clusters.iter_mut().find(|c| c.name == new.name) {
            Some(existing) => *existing = cluster,
            None => self.clusters.push(cluster),
        }

        let auth = NamedAuthInfo {
            name: new.name.clone(),
            user: AuthEntry {
                client_certificate: new.client_certificate,
                client_key: new.client_key,
                extra: Extra::new(),
            },
            extra: Extra::new(),
        };
        match self.auth_infos.iter_mut().find(|a| a.name == new.name) {
            Some(existing) => *existing = auth,
            None => self.auth_infos.push(auth),
        }

        self.contexts.push(NamedContext {
            context: ContextEntry {
                cluster: new.name.clone(),
                user: new.name.clone(),
                ..Default::default()
            },
            name: new.name,
            extra: Extra::new(),
        });
        Ok(())
    }

    /// Rename a context. Its cluster and user entries keep their names.
    pub fn rename_context(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.has_context(from) {
            return Err(KubeContextError::not_found(from, &self.context_names()));
        }
        check_name(to)?;
        if self.has_context(to) {
            return Err(KubeContextError::NameConflict(to.to_string()));
        }

        if let Some(entry) = self.contexts.iter_mut().find(|c| c.name == from) {
            entry.name = to.to_string();
        }
        if self.current_context == from {
            self.current_context = to.to_string();
        }
        Ok(())
    }

    /// Remove a context entry. Its cluster and user entries are left in place.
    ///
    /// When the active context is removed, another remaining context becomes
    /// active. Which one is unspecified.
    pub fn delete_context(&mut self, name: &str) -> Result<Deletion> {
        let index = self
            .contexts
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| KubeContextError::not_found(name, &self.context_names()))?;
        self.contexts.remove(index);

        if self.current_context != name {
            return Ok(Deletion::Inactive);
        }

        match self.contexts.first() {
            Some(next) => {
                self.current_context = next.name.clone();
                Ok(Deletion::ReassignedTo(next.name.clone()))
            }
            None => {
                self.current_context.clear();
                Ok(Deletion::ActiveCleared)
            }
        }
    }

    /// Set the default namespace of a context; an empty string clears it
    pub fn set_namespace(&mut self, context: &str, namespace: &str) -> Result<()> {
        let names = self.context_names();
        let entry = self
            .contexts
            .iter_mut()
            .find(|c| c.name == context)
            .ok_or_else(|| KubeContextError::not_found(context, &names))?;
        entry.context.namespace = namespace.to_string();
        Ok(())
    }
}
