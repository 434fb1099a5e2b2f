//! Domain DTOs for the list-generation API.
//!
//! # Design
//! Wire types mirror the backend's JSON contract but are defined
//! independently of the mock-server crate; integration tests catch any
//! schema drift between the two. `GenerateListResponse` is deliberately
//! loose (every field beyond `success` is optional): the backend is
//! inconsistent about which shape arrives with which HTTP status, and the
//! reducer must absorb all of them without failing.

use serde::{Deserialize, Serialize};

/// User-entered search text plus optional notification email.
///
/// Both fields are trimmed at construction. A `Query` is immutable once
/// submitted; callers build a fresh one per user action and must check
/// [`Query::is_empty`] before submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub email: String,
}

impl Query {
    pub fn new(text: &str, email: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    /// True when the trimmed search text is empty. Empty queries never
    /// reach the network.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One ranked product in a returned list. Opaque to the client beyond
/// display; affiliate identifiers are never recomputed or validated here.
///
/// String fields default to empty and `image_url` to absent so a partial
/// payload still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub asin: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub affiliate_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request payload for the generate-list route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateListRequest {
    pub prompt: String,
    pub email: String,
}

/// Loose envelope for whatever the backend sends back.
///
/// Tolerates both the success and failure shapes at any HTTP status; the
/// status code and the `success` flag are not assumed to agree.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateListResponse {
    #[serde(default)]
    pub success: bool,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub products: Option<Vec<Product>>,
    pub generated_at: Option<String>,
    pub affiliate_id: Option<String>,
    pub error: Option<String>,
}

/// A successfully generated list, ready for display. Product order is the
/// server-given ranking (position = rank 1..N); an empty list is a valid
/// success, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductList {
    pub title: String,
    pub intro: String,
    pub products: Vec<Product>,
    pub generated_at: String,
    pub affiliate_id: String,
}

/// Normalized outcome of one submission, the only value the presentation
/// layer renders from. Exactly one variant is active at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum ListResult {
    /// No request has completed yet.
    Idle,
    /// A request is in flight.
    Pending,
    Success(ProductList),
    /// A single human-readable line; never contains raw URLs, exception
    /// text, or upstream-service identifiers.
    Failure { message: String },
}
