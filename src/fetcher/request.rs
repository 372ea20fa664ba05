//! Search request construction.
//!
//! The library never performs I/O itself: it builds a [`SearchRequest`] and
//! hands it to the plugin runtime as an action. The runtime issues the HTTP
//! call through the host and feeds the response back as an event, carrying
//! the request id in the request context.

use crate::domain::error::{BoardError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Context key under which the request id travels with the host request.
pub const REQUEST_ID_KEY: &str = "request_id";

/// HTTP method used for the search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    /// The aggregation endpoint treats a search as a write/update.
    #[default]
    Put,
    Delete,
}

impl FromStr for HttpMethod {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(BoardError::Config(format!("unsupported HTTP method: {other}"))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Where and how search requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    pub url: String,
    pub method: HttpMethod,
}

impl SearchEndpoint {
    #[must_use]
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
        }
    }
}

/// JSON body of a search request.
#[derive(Debug, Serialize)]
struct SearchPayload<'a> {
    #[serde(rename = "inputValue")]
    input_value: &'a str,
}

/// A fully built search request, ready for the host to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonic id, used to correlate the response in traces.
    pub id: u64,
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    /// The query the body was built from.
    pub query: String,
}

impl SearchRequest {
    /// Builds a request carrying `query` as `{"inputValue": query}`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] if the endpoint URL is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use custom_board::fetcher::{HttpMethod, SearchEndpoint, SearchRequest};
    ///
    /// let endpoint = SearchEndpoint::new("https://api.example.com/news", HttpMethod::Put);
    /// let request = SearchRequest::new(1, &endpoint, "gold")?;
    /// assert_eq!(request.body, br#"{"inputValue":"gold"}"#.to_vec());
    /// # Ok::<(), custom_board::BoardError>(())
    /// ```
    pub fn new(id: u64, endpoint: &SearchEndpoint, query: &str) -> Result<Self> {
        if endpoint.url.trim().is_empty() {
            return Err(BoardError::Config("search endpoint URL is empty".to_string()));
        }

        let body = serde_json::to_vec(&SearchPayload { input_value: query })
            .map_err(|e| BoardError::Config(format!("failed to encode search payload: {e}")))?;

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(Self {
            id,
            url: endpoint.url.clone(),
            method: endpoint.method,
            headers,
            body,
            query: query.to_string(),
        })
    }

    /// Context map to attach to the host request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(REQUEST_ID_KEY.to_string(), self.id.to_string());
        context
    }

    /// Recovers the request id from a response context.
    #[must_use]
    pub fn id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        context.get(REQUEST_ID_KEY).and_then(|id| id.parse().ok())
    }
}
