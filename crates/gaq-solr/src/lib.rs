//! gaq-solr — HTTP search client for a Golr (Solr) index.
//!
//! One bounded request per invocation: `GET {base}/select` with the query
//! string, field list, and row cap from an [`AssocQuery`]. The timeout lives
//! on the underlying HTTP client; there is no retry and no cancellation.

use gaq_core::{AssocQuery, Document};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Transport and decoding failures from the select request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout, or body-decoding failure.
    #[error("solr request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("solr returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        /// First few hundred bytes of the response body, for diagnostics.
        body: String,
    },
}

/// Client for the Golr select endpoint.
pub struct SolrClient {
    http: reqwest::Client,
    base_url: String,
}

impl SolrClient {
    /// Build a client against `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Execute the query, returning at most `query.rows` documents.
    ///
    /// `fl` is omitted when the field list is empty so the index returns
    /// every stored field, which is what wildcard projection needs.
    pub async fn search(&self, query: &AssocQuery) -> Result<Vec<Document>, ClientError> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.q.clone()),
            ("wt", "json".to_string()),
            ("rows", query.rows.to_string()),
        ];
        if !query.fields.is_empty() {
            params.push(("fl", query.fields.join(",")));
        }

        let response = self
            .http
            .get(select_url(&self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let select: SelectResponse = response.json().await?;
        tracing::debug!(
            rows = select.response.docs.len(),
            num_found = select.response.num_found,
            "select returned"
        );
        Ok(select.response.docs)
    }
}

/// Join the select handler onto the base URL, tolerating a trailing slash.
fn select_url(base_url: &str) -> String {
    format!("{}/select", base_url.trim_end_matches('/'))
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SelectResponse {
    response: SelectBody,
}

#[derive(Debug, Deserialize)]
struct SelectBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<Document>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
