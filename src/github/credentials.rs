//! API token resolution from multiple sources

use log::debug;

use crate::config::credentials;

/// Token resolution with fallback logic
pub struct TokenResolver;

impl TokenResolver {
    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (GH_TOKEN, GITHUB_TOKEN - in order)
    ///
    /// Returns `None` when nothing is configured; public endpoints still
    /// answer anonymous requests.
    pub fn resolve(cli_token: Option<&str>) -> Option<String> {
        Self::resolve_with(cli_token, |name| std::env::var(name).ok())
    }

    /// Same as [`TokenResolver::resolve`] with an injectable env lookup
    pub fn resolve_with<F>(cli_token: Option<&str>, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = cli_token.filter(|t| !t.trim().is_empty()) {
            debug!("Using token from CLI argument");
            return Some(token.trim().to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Some(token) = lookup(env_var).filter(|t| !t.trim().is_empty()) {
                debug!("Using token from {} environment variable", env_var);
                return Some(token.trim().to_string());
            }
        }

        debug!(
            "No token found in CLI argument or {:?}; sending anonymous requests",
            credentials::TOKEN_ENV_VARS
        );
        None
    }
}
