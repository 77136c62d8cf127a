use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub routes: RouteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API surface, including the `/api` segment.
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Redirect targets used by the route guard and the 401/403 handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub login: String,
    pub root: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://localhost:7118/api".to_string(),
                timeout_secs: 30,
            },
            routes: RouteConfig {
                login: "/login".to_string(),
                root: "/".to_string(),
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("OPSDECK_API_URL") {
            if !v.trim().is_empty() {
                self.api.base_url = v;
            }
        }
        if let Ok(v) = env::var("OPSDECK_API_TIMEOUT_SECS") {
            self.api.timeout_secs = v.parse().unwrap_or(self.api.timeout_secs);
        }
        if let Ok(v) = env::var("OPSDECK_LOGIN_ROUTE") {
            if !v.trim().is_empty() {
                self.routes.login = v;
            }
        }
        self
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Global configuration singleton, loaded once from the environment.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::defaults();
        assert_eq!(config.api.base_url, "https://localhost:7118/api");
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.routes.root, "/");
    }
}
