/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API including the `/api` prefix, without a trailing slash.
    pub api_base: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                      |
    /// |-----------------------|------------------------------|
    /// | `INVENTORY_API_BASE`  | `http://localhost:5000/api`  |
    /// | `CLIENT_TIMEOUT_SECS` | `10`                         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("INVENTORY_API_BASE")
            .unwrap_or_else(|| "http://localhost:5000/api".into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = lookup("CLIENT_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .expect("CLIENT_TIMEOUT_SECS must be a valid u64");

        Self {
            api_base,
            timeout_secs,
        }
    }
}
