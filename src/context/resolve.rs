//! Kubeconfig path resolution from multiple sources

use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::kubeconfig as kubeconfig_config;

/// Resolve the kubeconfig path from multiple sources:
/// 1. --kubeconfig CLI flag
/// 2. first entry of the KUBECONFIG env var
/// 3. ~/.kube/config
pub fn resolve_config_path(cli_path: Option<&Path>) -> PathBuf {
    resolve_from(cli_path, std::env::var_os(kubeconfig_config::ENV_VAR))
}

fn resolve_from(cli_path: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = cli_path {
        debug!("Using kubeconfig from CLI flag: {}", path.display());
        return path.to_path_buf();
    }

    // KUBECONFIG may list several files; edits go to the first one
    if let Some(value) = env_value {
        if let Some(path) = std::env::split_paths(&value).find(|p| !p.as_os_str().is_empty()) {
            debug!(
                "Using kubeconfig from {} env var: {}",
                kubeconfig_config::ENV_VAR,
                path.display()
            );
            return path;
        }
    }

    let path = default_config_path();
    debug!("Using default kubeconfig: {}", path.display());
    path
}

/// Get the default kubeconfig path (~/.kube/config)
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(kubeconfig_config::DIR_NAME)
        .join(kubeconfig_config::FILE_NAME)
}
