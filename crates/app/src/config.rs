/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the record store (default: `http://127.0.0.1:4300`).
    pub store_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var     | Default                 |
    /// |-------------|-------------------------|
    /// | `STORE_URL` | `http://127.0.0.1:4300` |
    pub fn from_env() -> Self {
        let store_url =
            std::env::var("STORE_URL").unwrap_or_else(|_| "http://127.0.0.1:4300".into());

        Self { store_url }
    }
}
