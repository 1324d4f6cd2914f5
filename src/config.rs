//! Client configuration for the E-utilities endpoints.

use crate::error::{PapersError, Result};
use std::time::Duration;
use url::Url;

/// NCBI E-utilities base URL
pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Target database for both search and summary requests
pub const DEFAULT_DATABASE: &str = "pubmed";

/// Options used to build a [`crate::pubmed::PubMedClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL that `esearch.fcgi` and `esummary.fcgi` are resolved against
    pub base_url: String,
    /// E-utilities `db` parameter
    pub database: String,
    /// Per-request timeout. `None` blocks until the upstream answers.
    pub timeout: Option<Duration>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: EUTILS_BASE_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            timeout: None,
            user_agent: format!("get-papers-list/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Resolve an endpoint name (e.g. `esearch.fcgi`) against the base URL.
    ///
    /// A base URL without a trailing slash is treated as a directory, so
    /// `http://host/eutils` and `http://host/eutils/` resolve identically.
    pub fn endpoint(&self, name: &str) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base = Url::parse(&base)
            .map_err(|e| PapersError::Config(format!("Invalid base URL {:?}: {}", self.base_url, e)))?;

        base.join(name)
            .map_err(|e| PapersError::Config(format!("Invalid endpoint {:?}: {}", name, e)))
    }

    /// Check that the options can produce usable endpoints
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(PapersError::Config("database must not be empty".to_string()));
        }
        self.endpoint("esearch.fcgi").map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() -> Result<()> {
        let options = ClientOptions::default();
        assert_eq!(
            options.endpoint("esearch.fcgi")?.as_str(),
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"
        );
        assert_eq!(
            options.endpoint("esummary.fcgi")?.as_str(),
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi"
        );
        assert!(options.timeout.is_none());
        Ok(())
    }

    #[test]
    fn test_base_url_without_trailing_slash() -> Result<()> {
        let options = ClientOptions {
            base_url: "http://127.0.0.1:8080/eutils".to_string(),
            ..Default::default()
        };
        assert_eq!(
            options.endpoint("esearch.fcgi")?.as_str(),
            "http://127.0.0.1:8080/eutils/esearch.fcgi"
        );
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_options() {
        let bad_url = ClientOptions {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_url.validate(), Err(PapersError::Config(_))));

        let bad_db = ClientOptions {
            database: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_db.validate(), Err(PapersError::Config(_))));

        assert!(ClientOptions::default().validate().is_ok());
    }
}
