//! Search result fetcher.
//!
//! Turns a query into a host HTTP request and a host response into
//! normalized [`Article`](crate::domain::Article)s. The round trip itself is
//! performed by the plugin runtime (`web_request`), which keeps this module
//! free of I/O and testable on any target.
//!
//! ```text
//! query ──► SearchRequest ──► Action::Fetch ──► host web request
//!                                                     │
//! Vec<Article> ◄── parse_response ◄── Event::SearchResponse
//! ```
//!
//! # Modules
//!
//! - [`request`]: endpoint, method and payload construction
//! - [`response`]: status check, JSON parsing, normalization
//! - [`sanitize`]: markup stripping applied to every text field

pub mod request;
pub mod response;
pub mod sanitize;

pub use request::{HttpMethod, SearchEndpoint, SearchRequest, REQUEST_ID_KEY};
pub use response::{normalize, parse_response};
pub use sanitize::strip_html;
