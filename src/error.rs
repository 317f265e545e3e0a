use std::fmt;
use std::path::PathBuf;

/// Custom error type for kubeconfig and cluster operations
#[derive(Debug)]
pub enum KubeContextError {
    /// Kubeconfig file does not exist
    ConfigMissing(PathBuf),
    /// Kubeconfig file exists but could not be read or parsed
    ConfigUnreadable(String),
    /// Writing the kubeconfig back to disk failed
    PersistFailed(String),
    /// A context with this name already exists
    NameConflict(String),
    /// A context name that is blank or padded with whitespace
    InvalidName(String),
    /// No context with this name exists
    ProfileNotFound { name: String, available: Vec<String> },
    /// The kubeconfig has no contexts to choose from
    NoContexts,
    /// The kubeconfig has no current-context set
    NoCurrentContext,
    /// A context references a cluster that is not defined
    ClusterNotFound { context: String, cluster: String },
    /// The cluster has no namespace with this name
    NamespaceNotFound {
        namespace: String,
        available: Vec<String>,
    },
    /// The user interrupted an interactive prompt
    UserCancelled,
    /// An interactive prompt failed for a reason other than cancellation
    Prompt(String),
    /// The cluster API endpoint did not answer as expected
    RemoteUnreachable { server: String, reason: String },
    /// Kubernetes API request failed
    Remote(String),
    /// Rendering command output failed
    Output(String),
}

impl fmt::Display for KubeContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KubeContextError::ConfigMissing(path) => {
                write!(f, "Could not find a kubeconfig file at {}", path.display())
            }
            KubeContextError::ConfigUnreadable(msg) => write!(f, "{}", msg),
            KubeContextError::PersistFailed(msg) => write!(f, "{}", msg),
            KubeContextError::NameConflict(name) => {
                write!(f, "A context with name '{}' already exists", name)
            }
            KubeContextError::InvalidName(name) => write!(
                f,
                "'{}' is not a valid context name: names cannot be empty or start or end with whitespace",
                name
            ),
            KubeContextError::ProfileNotFound { name, available } => {
                if available.is_empty() {
                    write!(
                        f,
                        "Could not find context '{}': the kubeconfig has no contexts",
                        name
                    )
                } else {
                    write!(
                        f,
                        "Could not find context '{}'. Available contexts: {}",
                        name,
                        available.join(", ")
                    )
                }
            }
            KubeContextError::NoContexts => write!(
                f,
                "The kubeconfig has no contexts. Use 'kube-context add' to create one."
            ),
            KubeContextError::NamespaceNotFound {
                namespace,
                available,
            } => write!(
                f,
                "Could not find namespace '{}' in the cluster. Available namespaces: {}",
                namespace,
                available.join(", ")
            ),
            KubeContextError::NoCurrentContext => write!(
                f,
                "No current context set. Use 'kube-context switch' to select one."
            ),
            KubeContextError::ClusterNotFound { context, cluster } => write!(
                f,
                "Context '{}' references cluster '{}', which is not defined in the kubeconfig",
                context, cluster
            ),
            KubeContextError::UserCancelled => write!(f, "Operation cancelled by user"),
            KubeContextError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            KubeContextError::RemoteUnreachable { server, reason } => write!(
                f,
                "Could not connect to the API endpoint {}: {}",
                server, reason
            ),
            KubeContextError::Remote(msg) => write!(f, "Kubernetes API error: {}", msg),
            KubeContextError::Output(msg) => write!(f, "Failed to render output: {}", msg),
        }
    }
}

impl std::error::Error for KubeContextError {}

impl From<dialoguer::Error> for KubeContextError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                KubeContextError::UserCancelled
            }
            other => KubeContextError::Prompt(other.to_string()),
        }
    }
}

impl From<kube::Error> for KubeContextError {
    fn from(err: kube::Error) -> Self {
        KubeContextError::Remote(err.to_string())
    }
}

impl From<serde_json::Error> for KubeContextError {
    fn from(err: serde_json::Error) -> Self {
        KubeContextError::Output(err.to_string())
    }
}

impl From<serde_yml::Error> for KubeContextError {
    fn from(err: serde_yml::Error) -> Self {
        KubeContextError::Output(err.to_string())
    }
}

impl KubeContextError {
    /// Build a not-found error listing what the kubeconfig does contain
    pub fn not_found<S: AsRef<str>>(name: &str, available: &[S]) -> Self {
        let mut available: Vec<String> =
            available.iter().map(|s| s.as_ref().to_string()).collect();
        available.sort();
        KubeContextError::ProfileNotFound {
            name: name.to_string(),
            available,
        }
    }

    /// Whether this error is a user interruption rather than a failure
    pub fn is_cancellation(&self) -> bool {
        matches!(self, KubeContextError::UserCancelled)
    }
}

/// Result type alias for kube-context operations
pub type Result<T> = std::result::Result<T, KubeContextError>;
