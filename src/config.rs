/// Configuration constants for locating the kubeconfig file
pub mod kubeconfig {
    /// Directory under the home directory holding the kubeconfig
    pub const DIR_NAME: &str = ".kube";

    /// Kubeconfig file name
    pub const FILE_NAME: &str = "config";

    /// Environment variable listing kubeconfig paths
    pub const ENV_VAR: &str = "KUBECONFIG";

    /// `apiVersion` written into a freshly created kubeconfig
    pub const API_VERSION: &str = "v1";

    /// `kind` written into a freshly created kubeconfig
    pub const KIND: &str = "Config";

    /// Extension of the temp file used for atomic writes
    pub const TMP_EXTENSION: &str = "kube-context.tmp";
}

/// Configuration constants for talking to the cluster
pub mod remote {
    /// Timeout for the reachability probe, in seconds
    pub const PROBE_TIMEOUT_SECS: u64 = 10;

    /// Status codes that prove the API server answered an anonymous request
    pub const PROBE_ACCEPTED_STATUSES: &[u16] = &[401, 403];
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
