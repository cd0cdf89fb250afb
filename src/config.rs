//! Runtime configuration for the auth core.
//!
//! Values come from `Default`, optionally overridden by environment variables
//! on native targets. Missing or unparsable variables keep the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_LATENCY_MS: u64 = 1000;
const DEFAULT_STORAGE_KEY: &str = "veritas.session";

const LATENCY_ENV: &str = "VERITAS_AUTH_LATENCY_MS";
const STORAGE_KEY_ENV: &str = "VERITAS_SESSION_KEY";

/// Identity handed out by the social sign-in button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialIdentity {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

impl Default for SocialIdentity {
    fn default() -> Self {
        Self {
            id: "social-demo-user".to_owned(),
            display_name: "Demo User".to_owned(),
            email: "demo.user@example.com".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Artificial delay applied to every simulated auth call.
    pub latency: Duration,
    /// Key of the local slot holding the serialized session.
    pub storage_key: String,
    pub social_identity: SocialIdentity,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            social_identity: SocialIdentity::default(),
        }
    }
}

impl AuthConfig {
    /// Load overrides from `VERITAS_AUTH_LATENCY_MS` and `VERITAS_SESSION_KEY`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let latency_ms = env_parse(LATENCY_ENV, DEFAULT_LATENCY_MS);
        let storage_key = std::env::var(STORAGE_KEY_ENV)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.storage_key);

        Self {
            latency: Duration::from_millis(latency_ms),
            storage_key,
            social_identity: defaults.social_identity,
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_social_identity(mut self, identity: SocialIdentity) -> Self {
        self.social_identity = identity;
        self
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparsable config value");
            default
        }),
        Err(_) => default,
    }
}
