//! PubMed E-utilities client.
//!
//! Two endpoints are used:
//! - `esearch.fcgi` returns the identifier list for a free-text query
//! - `esummary.fcgi` returns title, publication date and authors for one identifier
//!
//! Only the API's default page of search results is requested.

use crate::config::ClientOptions;
use crate::error::{OptionExt, PapersError, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// Author entry as returned by the summary endpoint. Any field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Per-record summary object found under `result.<id>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pubdate: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<AuthorEntry>,
}

/// Treat an explicit JSON `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// E-utilities client. One HTTP client is shared by every request.
pub struct PubMedClient {
    client: Client,
    database: String,
    search_url: Url,
    summary_url: Url,
}

impl PubMedClient {
    /// Create a new PubMedClient
    pub fn new(options: ClientOptions) -> Result<Self> {
        options.validate()?;

        let mut builder = Client::builder().user_agent(options.user_agent.clone());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PapersError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url: options.endpoint("esearch.fcgi")?,
            summary_url: options.endpoint("esummary.fcgi")?,
            database: options.database,
        })
    }

    /// Search the database and return the matching record identifiers.
    ///
    /// A response without `esearchresult.idlist` is treated as zero results.
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            return Err(PapersError::Validation("query must not be empty".to_string()));
        }

        info!(query = query, db = %self.database, "Searching PubMed");

        let body = self
            .get(
                &self.search_url,
                &[("db", self.database.as_str()), ("term", query), ("retmode", "json")],
            )
            .await?;

        let ids = parse_search_response(&body)?;
        info!(count = ids.len(), "Search complete");
        Ok(ids)
    }

    /// Fetch the summary object for a single identifier.
    ///
    /// Returns `None` when the response has no object for `id`.
    pub async fn summary(&self, id: &str) -> Result<Option<DocSummary>> {
        debug!(id = id, "Fetching summary");

        let body = self
            .get(
                &self.summary_url,
                &[("db", self.database.as_str()), ("id", id), ("retmode", "json")],
            )
            .await?;

        parse_summary_response(&body, id)
    }

    async fn get(&self, url: &Url, params: &[(&str, &str)]) -> Result<String> {
        let response = self.client.get(url.clone()).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PapersError::Api {
                code: status.as_u16(),
                message: format!("E-utilities error: {} - {}", status, error_text.trim()),
            });
        }

        Ok(response.text().await?)
    }
}

/// Extract `esearchresult.idlist` from a search response body
pub fn parse_search_response(body: &str) -> Result<Vec<String>> {
    let data: Value = serde_json::from_str(body)?;

    let result = match data.get("esearchresult") {
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(result) => result
            .as_object()
            .ok_or_parse("esearchresult is not an object")?,
    };

    match result.get("idlist") {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(ids) => Ok(Vec::<String>::deserialize(ids)?),
    }
}

/// Extract the `result.<id>` object from a summary response body
pub fn parse_summary_response(body: &str, id: &str) -> Result<Option<DocSummary>> {
    let data: Value = serde_json::from_str(body)?;

    let result = match data.get("result") {
        Some(Value::Null) | None => return Ok(None),
        Some(result) => result.as_object().ok_or_parse("result is not an object")?,
    };

    match result.get(id) {
        Some(Value::Null) | None => Ok(None),
        Some(doc) => Ok(Some(DocSummary::deserialize(doc)?)),
    }
}
