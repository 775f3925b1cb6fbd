//! Authentication utilities for working with the API
use std::env;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::warn;

use crate::error::Result;

/// Environment variable consulted when no api key is passed explicitly
pub const API_KEY_ENV: &str = "VERCEL_API_KEY";
/// Environment variable consulted when no team id is passed explicitly
pub const TEAM_ID_ENV: &str = "VERCEL_TEAM_ID";

/// Returns the explicit value if there is one, otherwise the contents of `env_var`
///
/// An unset (or non-unicode) environment variable resolves to `None`.  No other
/// validation takes place, an empty string is returned as-is.
pub fn resolve(explicit: Option<String>, env_var: &str) -> Option<String> {
    explicit.or_else(|| env::var(env_var).ok())
}

/// The credentials used to authenticate against the Vercel API
///
/// Both fields are optional.  A missing api key is not an error here, requests
/// made without one are rejected by the server instead.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    api_key: Option<String>,
    team_id: Option<String>,
}

// Custom implementation of Debug to avoid printing the api key
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "**********"))
            .field("team_id", &self.team_id)
            .finish()
    }
}

impl Credentials {
    /// Creates credentials, falling back to `VERCEL_API_KEY` / `VERCEL_TEAM_ID`
    /// for any field that is not supplied
    pub fn new(api_key: Option<String>, team_id: Option<String>) -> Self {
        Self {
            api_key: resolve(api_key, API_KEY_ENV),
            team_id: resolve(team_id, TEAM_ID_ENV),
        }
    }

    pub fn from_env() -> Self {
        Self::new(None, None)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    /// Builds the headers needed to authenticate a request
    ///
    /// The map contains exactly one entry, `Authorization: Bearer <api key>`.
    /// If no api key is configured the literal `Bearer None` is sent so that
    /// the server, not the client, reports the failure.
    pub fn auth_headers(&self) -> Result<HeaderMap> {
        let token = match self.api_key.as_deref() {
            Some(api_key) => api_key,
            None => {
                warn!("no Vercel api key configured, set {}", API_KEY_ENV);
                "None"
            }
        };
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::error::VercelError;

    fn clear_env() {
        env::remove_var(API_KEY_ENV);
        env::remove_var(TEAM_ID_ENV);
    }

    #[test]
    #[serial]
    fn explicit_overrides_env() {
        env::set_var(API_KEY_ENV, "from-env");
        env::set_var(TEAM_ID_ENV, "team-env");

        let creds = Credentials::new(Some("explicit".to_string()), Some("team".to_string()));
        assert_eq!(creds.api_key(), Some("explicit"));
        assert_eq!(creds.team_id(), Some("team"));

        clear_env();
    }

    #[test]
    #[serial]
    fn falls_back_to_env_per_field() {
        env::set_var(API_KEY_ENV, "from-env");
        env::remove_var(TEAM_ID_ENV);

        let creds = Credentials::new(None, Some("team".to_string()));
        assert_eq!(creds.api_key(), Some("from-env"));
        assert_eq!(creds.team_id(), Some("team"));

        let creds = Credentials::from_env();
        assert_eq!(creds.api_key(), Some("from-env"));
        assert_eq!(creds.team_id(), None);

        clear_env();
    }

    #[test]
    #[serial]
    fn missing_everywhere_is_none() {
        clear_env();
        assert_eq!(resolve(None, API_KEY_ENV), None);
        assert_eq!(Credentials::from_env(), Credentials::default());
    }

    #[test]
    #[serial]
    fn empty_values_are_kept() {
        env::set_var(API_KEY_ENV, "");
        assert_eq!(resolve(None, API_KEY_ENV), Some(String::new()));
        clear_env();
    }

    #[test]
    #[serial]
    fn bearer_header() {
        clear_env();
        let headers = Credentials::new(Some("xyz".to_string()), None)
            .auth_headers()
            .unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer xyz");
    }

    #[test]
    #[serial]
    fn bearer_none_without_key() {
        clear_env();
        let headers = Credentials::from_env().auth_headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer None");
    }

    #[test]
    #[serial]
    fn rejects_unencodable_key() {
        clear_env();
        let err = Credentials::new(Some("bad\nkey".to_string()), None)
            .auth_headers()
            .unwrap_err();
        assert!(matches!(err, VercelError::InvalidHeader(_)));
    }

    #[test]
    fn debug_hides_api_key() {
        let creds = Credentials {
            api_key: Some("super-secret".to_string()),
            team_id: Some("team".to_string()),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("team"));
    }
}
