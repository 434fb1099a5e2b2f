//! Stateless request builder and response reducer for the list API.
//!
//! # Design
//! `ListClient` holds only a `base_url` and carries no mutable state between
//! calls. Request construction (`build_generate_list`) and response
//! normalization (`reduce_generate_list`) are separate steps with the HTTP
//! round-trip in between, executed by the caller. The reducer is the one
//! place that interprets status codes and payload shapes; everything
//! downstream branches on `ListResult` alone.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{GenerateListRequest, GenerateListResponse, ListResult, ProductList, Query};

/// Route suffix for list generation, appended to the resolved base URL.
pub const GENERATE_LIST_ROUTE: &str = "/api/generate-list";

/// Shown for transport-class failures: the request never produced a usable
/// response body. Deliberately generic, with no URLs and no exception text.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error — please try again.";

/// Shown when the backend reports failure without a usable reason.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed. Please try again.";

/// Synchronous, stateless client for the list-generation API.
///
/// Builds `HttpRequest` values and reduces `HttpResponse` values without
/// touching the network. The caller executes the HTTP round-trip between
/// `build_generate_list` and `reduce_generate_list`.
#[derive(Debug, Clone)]
pub struct ListClient {
    base_url: String,
}

impl ListClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full target URL for list generation. Idempotent: a base that already
    /// ends with the route suffix is used as-is rather than doubled.
    pub fn generate_list_url(&self) -> String {
        if self.base_url.ends_with(GENERATE_LIST_ROUTE) {
            self.base_url.clone()
        } else {
            format!("{}{}", self.base_url, GENERATE_LIST_ROUTE)
        }
    }

    /// Build the single POST request for one submission.
    ///
    /// Precondition: `query` is non-empty (callers check [`Query::is_empty`]
    /// before invoking anything network-bound).
    pub fn build_generate_list(&self, query: &Query) -> Result<HttpRequest, ApiError> {
        let payload = GenerateListRequest {
            prompt: query.text.trim().to_string(),
            email: query.email.trim().to_string(),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.generate_list_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Normalize a raw response into a terminal `ListResult`.
    pub fn reduce_generate_list(&self, response: HttpResponse) -> ListResult {
        reduce_response(response.status, &response.body)
    }
}

/// Reduce one `(status, body)` pair into `Success` or `Failure`.
///
/// Total: never fails, never panics. The status code and the payload's
/// `success` flag are not assumed to agree; either signal is sufficient to
/// declare failure. Success requires all three of: a 2xx status, an explicit
/// `success: true`, and a present `products` field (an empty list is a valid
/// success). Missing optional fields default rather than fail.
pub fn reduce_response(status: u16, body: &str) -> ListResult {
    let envelope: GenerateListResponse = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        // No parseable body was obtained, same class as a connection failure.
        Err(_) => return transport_failure(),
    };

    if (200..300).contains(&status) && envelope.success {
        if let Some(products) = envelope.products {
            return ListResult::Success(ProductList {
                title: envelope.title.unwrap_or_default(),
                intro: envelope.intro.unwrap_or_default(),
                products,
                generated_at: envelope.generated_at.unwrap_or_default(),
                affiliate_id: envelope.affiliate_id.unwrap_or_default(),
            });
        }
        // Claimed success without a product list is still a failure.
    }

    let message = envelope
        .error
        .filter(|reason| !reason.trim().is_empty())
        .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string());
    ListResult::Failure { message }
}

/// The canonical outcome for a round-trip that failed before any response
/// body was obtained (connection refused, DNS failure, timeout). Hosts map
/// their transport errors here instead of surfacing them.
pub fn transport_failure() -> ListResult {
    ListResult::Failure {
        message: NETWORK_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn client() -> ListClient {
        ListClient::new("http://localhost:5000")
    }

    fn query() -> Query {
        Query::new("fantasy football trophies", "fan@example.com")
    }

    #[test]
    fn build_generate_list_produces_correct_request() {
        let req = client().build_generate_list(&query()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/api/generate-list");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["prompt"], "fantasy football trophies");
        assert_eq!(body["email"], "fan@example.com");
    }

    #[test]
    fn build_generate_list_trims_payload() {
        let q = Query {
            text: "  organic chips ".to_string(),
            email: " a@b.c  ".to_string(),
        };
        let req = client().build_generate_list(&q).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["prompt"], "organic chips");
        assert_eq!(body["email"], "a@b.c");
    }

    #[test]
    fn empty_email_is_sent_as_empty_string() {
        let q = Query::new("gaming laptops", "");
        let req = client().build_generate_list(&q).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ListClient::new("http://localhost:5000/");
        assert_eq!(
            client.generate_list_url(),
            "http://localhost:5000/api/generate-list"
        );
    }

    #[test]
    fn route_suffix_is_not_duplicated() {
        let client = ListClient::new("http://localhost:5000/api/generate-list");
        assert_eq!(
            client.generate_list_url(),
            "http://localhost:5000/api/generate-list"
        );
    }

    fn success_body(products: &str) -> String {
        format!(
            r#"{{"success":true,"title":"Top Picks","intro":"Researched for you.","products":{products},"generated_at":"2025-06-01T12:00:00Z","affiliate_id":"toplist-20"}}"#
        )
    }

    #[test]
    fn reduce_success_preserves_product_order() {
        let body = success_body(
            r#"[{"asin":"A","title":"First","price":"$1","rating":4.0,"description":"","affiliate_link":""},
                {"asin":"B","title":"Second","price":"$2","rating":4.5,"description":"","affiliate_link":""},
                {"asin":"C","title":"Third","price":"$3","rating":5.0,"description":"","affiliate_link":""}]"#,
        );
        let ListResult::Success(list) = reduce_response(200, &body) else {
            panic!("expected success");
        };
        let asins: Vec<&str> = list.products.iter().map(|p| p.asin.as_str()).collect();
        assert_eq!(asins, ["A", "B", "C"]);
        assert_eq!(list.title, "Top Picks");
        assert_eq!(list.affiliate_id, "toplist-20");
    }

    #[test]
    fn reduce_empty_product_list_is_success() {
        let result = reduce_response(200, &success_body("[]"));
        let ListResult::Success(list) = &result else {
            panic!("expected success, got {result:?}");
        };
        assert!(list.products.is_empty());
    }

    #[test]
    fn reduce_declared_failure_uses_backend_reason() {
        let result = reduce_response(200, r#"{"success":false,"error":"no results"}"#);
        assert_eq!(
            result,
            ListResult::Failure {
                message: "no results".to_string()
            }
        );
    }

    #[test]
    fn reduce_declared_failure_without_reason_is_generic() {
        let result = reduce_response(200, r#"{"success":false}"#);
        assert_eq!(
            result,
            ListResult::Failure {
                message: REQUEST_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn reduce_blank_reason_is_generic() {
        let result = reduce_response(200, r#"{"success":false,"error":"   "}"#);
        assert_eq!(
            result,
            ListResult::Failure {
                message: REQUEST_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn reduce_error_status_fails_even_with_success_flag() {
        let result = reduce_response(500, &success_body("[]"));
        assert!(matches!(result, ListResult::Failure { .. }));
    }

    #[test]
    fn reduce_success_flag_without_products_is_failure() {
        let result = reduce_response(200, r#"{"success":true,"title":"Top Picks"}"#);
        assert_eq!(
            result,
            ListResult::Failure {
                message: REQUEST_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn reduce_non_json_body_is_network_failure() {
        let result = reduce_response(200, "<html>gateway timeout</html>");
        assert_eq!(
            result,
            ListResult::Failure {
                message: NETWORK_ERROR_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn reduce_empty_body_is_network_failure() {
        assert_eq!(reduce_response(502, ""), transport_failure());
    }

    #[test]
    fn failure_messages_never_contain_urls() {
        for result in [
            reduce_response(200, "not json"),
            reduce_response(500, r#"{"success":false}"#),
            transport_failure(),
        ] {
            let ListResult::Failure { message } = result else {
                panic!("expected failure");
            };
            assert!(!message.contains("http://"));
            assert!(!message.contains("https://"));
        }
    }

    #[test]
    fn reduce_defaults_missing_optional_fields() {
        let body = r#"{"success":true,"products":[{"asin":"A"}]}"#;
        let ListResult::Success(list) = reduce_response(200, body) else {
            panic!("expected success");
        };
        assert_eq!(list.title, "");
        assert_eq!(list.intro, "");
        assert_eq!(list.generated_at, "");
        assert_eq!(
            list.products,
            vec![Product {
                asin: "A".to_string(),
                title: String::new(),
                price: String::new(),
                rating: 0.0,
                description: String::new(),
                affiliate_link: String::new(),
                image_url: None,
            }]
        );
    }

    #[test]
    fn reduce_via_client_matches_free_function() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"success":false,"error":"quota exceeded"}"#.to_string(),
        };
        assert_eq!(
            client().reduce_generate_list(response),
            ListResult::Failure {
                message: "quota exceeded".to_string()
            }
        );
    }
}
