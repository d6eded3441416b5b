//! Runtime configuration, resolved once at startup.

use std::env;

use thiserror::Error;

/// Environment fallback for the API token.
pub const TOKEN_ENV: &str = "GITHUB_API_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no GitHub API token found: pass one to --token or set GITHUB_API_TOKEN")]
    MissingCredential,
}

/// Everything the orchestrators need beyond the filter criteria.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub force: bool,
}

impl Config {
    /// Resolve the token: explicit argument first, then the environment.
    /// Fails before any network call when neither is available.
    pub fn resolve(token_arg: Option<String>, force: bool) -> Result<Self, ConfigError> {
        let token = token_arg
            .or_else(|| env::var(TOKEN_ENV).ok())
            .ok_or(ConfigError::MissingCredential)?;
        Ok(Self { token, force })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_token_wins() {
        let config = Config::resolve(Some("from-arg".to_string()), false).unwrap();
        assert_eq!(config.token, "from-arg");
        assert!(!config.force);
    }

    // Environment-dependent paths share one test to avoid races on the
    // process-wide variable.
    #[test]
    fn environment_fallback_and_missing_token() {
        env::set_var(TOKEN_ENV, "from-env");
        let config = Config::resolve(None, true).unwrap();
        assert_eq!(config.token, "from-env");
        assert!(config.force);

        env::remove_var(TOKEN_ENV);
        let err = Config::resolve(None, false).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential));
    }
}
