//! Kubeconfig file I/O

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::kubeconfig as kubeconfig_config;
use crate::error::{KubeContextError, Result};

use super::models::Kubeconfig;

/// Handles reading and writing the kubeconfig file
pub struct ContextStore {
    config_path: PathBuf,
}

impl ContextStore {
    /// Create a store for the kubeconfig at `path`
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Path of the kubeconfig file this store manages
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the kubeconfig from disk.
    /// Returns `None` if the file doesn't exist, errors on unreadable YAML.
    pub fn load(&self) -> Result<Option<Kubeconfig>> {
        if !self.config_path.exists() {
            debug!("No kubeconfig at {}", self.config_path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            KubeContextError::ConfigUnreadable(format!(
                "Failed to read kubeconfig {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            debug!("Kubeconfig {} is empty", self.config_path.display());
            return Ok(Some(Kubeconfig::default()));
        }

        let config: Kubeconfig = serde_yml::from_str(&content).map_err(|e| {
            KubeContextError::ConfigUnreadable(format!(
                "Failed to parse kubeconfig {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        if let Some(name) = config.duplicate_context_name() {
            return Err(KubeContextError::ConfigUnreadable(format!(
                "Invalid kubeconfig {}: duplicate context name '{}'",
                self.config_path.display(),
                name
            )));
        }

        debug!(
            "Loaded {} context(s) from {}",
            config.contexts.len(),
            self.config_path.display()
        );
        Ok(Some(config))
    }

    /// Load the kubeconfig, failing if it doesn't exist
    pub fn load_existing(&self) -> Result<Kubeconfig> {
        self.load()?
            .ok_or_else(|| KubeContextError::ConfigMissing(self.config_path.clone()))
    }

    /// Load the kubeconfig, starting from an empty one if it doesn't exist.
    /// Nothing is written until [`ContextStore::save`] is called.
    pub fn load_or_empty(&self) -> Result<Kubeconfig> {
        Ok(self.load()?.unwrap_or_else(Kubeconfig::empty))
    }

    /// File that writes land in: a symlinked kubeconfig resolves to its
    /// target so the link itself is kept.
    fn write_target(&self) -> PathBuf {
        match fs::canonicalize(&self.config_path) {
            Ok(resolved) => {
                if resolved != self.config_path {
                    debug!(
                        "Kubeconfig {} resolves to {}",
                        self.config_path.display(),
                        resolved.display()
                    );
                }
                resolved
            }
            Err(_) => self.config_path.clone(),
        }
    }

    /// Save the kubeconfig to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, config: &Kubeconfig) -> Result<()> {
        let target = self.write_target();

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    KubeContextError::PersistFailed(format!(
                        "Failed to create kubeconfig directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let yaml = serde_yml::to_string(config).map_err(|e| {
            KubeContextError::PersistFailed(format!("Failed to serialize kubeconfig: {}", e))
        })?;

        let tmp_path = target.with_extension(kubeconfig_config::TMP_EXTENSION);
        fs::write(&tmp_path, &yaml).map_err(|e| {
            KubeContextError::PersistFailed(format!(
                "Failed to write temp kubeconfig {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Credentials live in this file: 0600 on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            if let Err(e) = fs::set_permissions(&tmp_path, permissions) {
                let _ = fs::remove_file(&tmp_path);
                return Err(KubeContextError::PersistFailed(format!(
                    "Failed to set permissions on kubeconfig: {}",
                    e
                )));
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(KubeContextError::PersistFailed(format!(
                "Failed to replace kubeconfig {}: {}",
                target.display(),
                e
            )));
        }

        debug!("Saved kubeconfig to {}", target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::models::NewContext;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> ContextStore {
        ContextStore::with_path(dir.path().join("config"))
    }

    fn new_context(name: &str) -> NewContext {
        NewContext {
            name: name.to_string(),
            server: "https://10.0.0.1:6443".to_string(),
            certificate_authority: Some("/tmp/ca.pem".to_string()),
            client_certificate: Some("/tmp/c.pem".to_string()),
            client_key: Some("/tmp/k.pem".to_string()),
        }
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_existing_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let err = store.load_existing().unwrap_err();
        assert!(matches!(err, KubeContextError::ConfigMissing(_)));
    }

    #[test]
    fn test_load_or_empty_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let config = store.load_or_empty().unwrap();
        assert_eq!(config, Kubeconfig::empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_load_corrupt_yaml_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "contexts: [unclosed").unwrap();
        let store = ContextStore::with_path(path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, KubeContextError::ConfigUnreadable(_)));
        assert!(err.to_string().contains("Failed to parse kubeconfig"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "\n").unwrap();
        let store = ContextStore::with_path(path);
        let config = store.load().unwrap().unwrap();
        assert!(config.contexts.is_empty());
    }

    #[test]
    fn test_load_duplicate_context_names_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(
            &path,
            "contexts:\n- name: dev\n  context: {cluster: a, user: a}\n- name: dev\n  context: {cluster: b, user: b}\n",
        )
        .unwrap();
        let store = ContextStore::with_path(path);
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("duplicate context name 'dev'"));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".kube").join("config");
        let store = ContextStore::with_path(path.clone());
        store.save(&Kubeconfig::empty()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.save(&Kubeconfig::empty()).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let mut config = Kubeconfig::empty();
        config.add_context(new_context("dev")).unwrap();
        config.add_context(new_context("prod")).unwrap();
        config.switch_context("prod").unwrap();
        config.set_namespace("prod", "web").unwrap();

        store.save(&config).unwrap();
        let loaded = store.load_existing().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_save_preserves_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(
            &path,
            r#"apiVersion: v1
kind: Config
preferences:
  colors: true
clusters:
- name: dev
  cluster:
    server: https://10.0.0.1:6443
    insecure-skip-tls-verify: true
contexts:
- name: dev
  context:
    cluster: dev
    user: dev
  extensions:
  - name: lens
    extension: {}
current-context: dev
users:
- name: dev
  user:
    token: abc123
"#,
        )
        .unwrap();

        let store = ContextStore::with_path(path.clone());
        let mut config = store.load_existing().unwrap();
        config.set_namespace("dev", "web").unwrap();
        store.save(&config).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("insecure-skip-tls-verify: true"));
        assert!(written.contains("token: abc123"));
        assert!(written.contains("colors: true"));
        assert!(written.contains("lens"));
        assert!(written.contains("namespace: web"));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let mut first = Kubeconfig::empty();
        first.add_context(new_context("first")).unwrap();
        store.save(&first).unwrap();

        let mut second = Kubeconfig::empty();
        second.add_context(new_context("second")).unwrap();
        store.save(&second).unwrap();

        let loaded = store.load_existing().unwrap();
        assert_eq!(loaded.context_names(), vec!["second"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_writes_through_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("dotfiles").join("kubeconfig");
        fs::create_dir_all(real.parent().unwrap()).unwrap();
        fs::write(&real, "apiVersion: v1\nkind: Config\n").unwrap();
        let link = dir.path().join("config");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let store = ContextStore::with_path(link.clone());
        let mut config = store.load_existing().unwrap();
        config.add_context(new_context("dev")).unwrap();
        config.set_namespace("dev", "web").unwrap();
        store.save(&config).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert!(fs::read_to_string(&real).unwrap().contains("namespace: web"));
        assert_eq!(store.load_existing().unwrap(), config);
        // No temp file left next to the target
        assert_eq!(fs::read_dir(real.parent().unwrap()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.save(&Kubeconfig::empty()).unwrap();

        let metadata = fs::metadata(store.path()).unwrap();
        let mode = metadata.permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_save_into_missing_parent_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let store = ContextStore::with_path(blocker.join("config"));
        let err = store.save(&Kubeconfig::empty()).unwrap_err();
        assert!(matches!(err, KubeContextError::PersistFailed(_)));
    }
}
